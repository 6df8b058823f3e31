mod common;

use common::small_hierarchy;
use excheck::hierarchy::HierarchyError;
use excheck::{parser, ExceptionHierarchy, ExceptionKind, HierarchyBuilder, Relation};

#[test]
fn every_unchecked_type_descends_from_an_unchecked_root() {
    let h = ExceptionHierarchy::standard().unwrap();
    let roots: Vec<_> = ["RuntimeException", "Error"].iter().map(|n| h.resolve(n).unwrap()).collect();
    for (id, t) in h.iter() {
        let under_root = roots.iter().any(|&r| h.is_subtype(id, r));
        assert_eq!(t.kind() == ExceptionKind::Unchecked, under_root, "{}", t.name());
    }
}

#[test]
fn hierarchy_is_single_rooted_tree() {
    let h = ExceptionHierarchy::standard().unwrap();
    let root = h.root();
    assert_eq!(h.parent(root), None);
    for (id, _) in h.iter() {
        assert!(h.is_subtype(id, root));
        assert_eq!(h.ancestors(id).last().unwrap_or(root), root);
    }
}

#[test]
fn relations_in_small_tree() {
    let h = small_hierarchy();
    let id = |n: &str| h.resolve(n).unwrap();
    assert_eq!(h.relation(id("FileNotFoundException"), id("IOException")), Relation::Descendant);
    assert_eq!(h.relation(id("Exception"), id("FileNotFoundException")), Relation::Ancestor);
    assert_eq!(h.relation(id("SQLException"), id("IOException")), Relation::Unrelated);
    assert_eq!(h.relation(id("NullPointerException"), id("NullPointerException")), Relation::Same);
}

#[test]
fn user_declarations_extend_standard_tree() {
    let decls = parser::parse_declarations(
        r#"
class InsufficientFundsException extends Exception {}
unchecked class LimitExceededException extends Exception {}
class DailyLimitExceededException extends LimitExceededException {}
"#,
    )
    .unwrap();
    let mut b = HierarchyBuilder::standard();
    b.declare_all(&decls);
    let h = b.build().unwrap();
    assert!(h.is_checked(h.resolve("InsufficientFundsException").unwrap()));
    assert!(!h.is_checked(h.resolve("DailyLimitExceededException").unwrap()));
    // standard unchecked roots still apply
    assert!(!h.is_checked(h.resolve("NullPointerException").unwrap()));
}

#[test]
fn redeclaring_standard_type_is_rejected() {
    let decls = parser::parse_declarations("class IOException extends Exception {}").unwrap();
    let mut b = HierarchyBuilder::standard();
    b.declare_all(&decls);
    assert_eq!(b.build().unwrap_err(), HierarchyError::DuplicateType("IOException".into()));
}

#[test]
fn build_errors_surface_through_crate_error() {
    let mut b = HierarchyBuilder::new();
    b.declare("Throwable", None).declare("Orphan", Some("Missing")).unchecked_root("Throwable");
    let err: excheck::Error = b.build().unwrap_err().into();
    assert_eq!(err.to_string(), "exception type 'Orphan' extends unknown type 'Missing'");
}

#[test]
fn hierarchy_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ExceptionHierarchy>();
}
