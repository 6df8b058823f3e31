// Common test utilities
#![allow(dead_code)]

use excheck::{parser, ExceptionHierarchy, HierarchyBuilder, MethodSignature, RejectReason, ValidationResult};

/// Hierarchy used by the teaching examples: Throwable > Exception > {IOException > FileNotFoundException, SQLException, RuntimeException}
pub fn small_hierarchy() -> ExceptionHierarchy {
    let decls = parser::parse_declarations(
        r#"
class Throwable {}
class Exception extends Throwable {}
unchecked class RuntimeException extends Exception {}
class NullPointerException extends RuntimeException {}
class IOException extends Exception {}
class FileNotFoundException extends IOException {}
class SQLException extends Exception {}
"#,
    )
    .expect("declarations parse");
    let mut b = HierarchyBuilder::new();
    b.declare_all(&decls);
    b.build().expect("hierarchy builds")
}

pub fn method(header: &str) -> MethodSignature {
    parser::parse_method(header).expect("header parses")
}

pub fn verdict(parent: &str, child: &str) -> ValidationResult {
    let h = ExceptionHierarchy::standard().expect("standard hierarchy");
    excheck::validate(&method(parent), &method(child), h).expect("valid input")
}

pub fn ok(parent: &str, child: &str) {
    let r = verdict(parent, child);
    assert_eq!(r, ValidationResult::Allowed, "{parent} / {child}");
}

pub fn rejected(parent: &str, child: &str, offending: &str, reason: RejectReason) {
    let r = verdict(parent, child);
    assert_eq!(r, ValidationResult::rejected(offending, reason), "{parent} / {child}");
}
