//! Exception type hierarchy
//!
//! An explicit parent-pointer tree of exception types, built once through
//! [`HierarchyBuilder`] and read-only afterwards. Every query is a walk over
//! parent links; nothing depends on host-language type machinery.

mod builder;

pub use builder::HierarchyBuilder;

use std::collections::HashMap;
use std::fmt::{self, Write as _};

use once_cell::sync::Lazy;

use crate::consts::STANDARD_PACKAGE_PREFIXES;

/// Errors raised while building a hierarchy
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("duplicate exception type '{0}'")]
    DuplicateType(String),
    #[error("exception type '{name}' extends unknown type '{parent}'")]
    UnknownParent { name: String, parent: String },
    #[error("inheritance cycle through exception type '{0}'")]
    Cycle(String),
    #[error("exception hierarchy has no root type")]
    NoRoot,
    #[error("exception hierarchy must have a single root; found: {}", .0.join(", "))]
    MultipleRoots(Vec<String>),
    #[error("unchecked root '{0}' is not a declared exception type")]
    UnknownUncheckedRoot(String),
    #[error("exception hierarchy designates no unchecked root")]
    MissingUncheckedRoot,
}

/// Handle of a type inside one [`ExceptionHierarchy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub(crate) usize);

impl TypeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Checked-vs-unchecked classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExceptionKind {
    Checked,
    Unchecked,
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExceptionKind::Checked => f.write_str("checked"),
            ExceptionKind::Unchecked => f.write_str("unchecked"),
        }
    }
}

/// A node of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionType {
    name: String,
    parent: Option<TypeId>,
    kind: ExceptionKind,
    depth: usize,
}

impl ExceptionType {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent type; `None` only for the root
    pub fn parent(&self) -> Option<TypeId> {
        self.parent
    }

    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    pub fn is_checked(&self) -> bool {
        self.kind == ExceptionKind::Checked
    }

    /// Distance from the root (root is 0)
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// How two types relate in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Same,
    /// The first type is a proper subtype of the second
    Descendant,
    /// The first type is a proper supertype of the second
    Ancestor,
    Unrelated,
}

/// Immutable single-rooted tree of exception types
#[derive(Debug, Clone)]
pub struct ExceptionHierarchy {
    types: Vec<ExceptionType>,
    by_name: HashMap<String, TypeId>,
    root: TypeId,
}

static STANDARD: Lazy<Result<ExceptionHierarchy, HierarchyError>> =
    Lazy::new(|| HierarchyBuilder::standard().build());

impl ExceptionHierarchy {
    /// The standard Java exception tree, built once and shared by every caller
    pub fn standard() -> Result<&'static ExceptionHierarchy, HierarchyError> {
        STANDARD.as_ref().map_err(Clone::clone)
    }

    pub(crate) fn from_parts(types: Vec<ExceptionType>, root: TypeId) -> Self {
        let by_name = types
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.clone(), TypeId(i)))
            .collect();
        Self { types, by_name, root }
    }

    pub(crate) fn node(name: String, parent: Option<TypeId>, kind: ExceptionKind, depth: usize) -> ExceptionType {
        ExceptionType { name, parent, kind, depth }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn root(&self) -> TypeId {
        self.root
    }

    /// Look a type up by name. A JDK-qualified name such as
    /// `java.io.IOException` falls back to its simple name when it is not
    /// declared verbatim; other packages must match exactly.
    pub fn resolve(&self, name: &str) -> Option<TypeId> {
        let name = name.trim();
        if let Some(id) = self.by_name.get(name) {
            return Some(*id);
        }
        standard_simple_name(name).and_then(|simple| self.by_name.get(simple).copied())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    pub fn get(&self, id: TypeId) -> &ExceptionType {
        &self.types[id.0]
    }

    pub fn name(&self, id: TypeId) -> &str {
        &self.types[id.0].name
    }

    pub fn parent(&self, id: TypeId) -> Option<TypeId> {
        self.types[id.0].parent
    }

    pub fn kind(&self, id: TypeId) -> ExceptionKind {
        self.types[id.0].kind
    }

    pub fn is_checked(&self, id: TypeId) -> bool {
        self.types[id.0].is_checked()
    }

    /// True when `sub` is `sup` or one of its descendants
    pub fn is_subtype(&self, sub: TypeId, sup: TypeId) -> bool {
        let target_depth = self.types[sup.0].depth;
        let mut cur = sub;
        while self.types[cur.0].depth > target_depth {
            match self.types[cur.0].parent {
                Some(p) => cur = p,
                None => return false,
            }
        }
        cur == sup
    }

    pub fn relation(&self, a: TypeId, b: TypeId) -> Relation {
        if a == b {
            Relation::Same
        } else if self.is_subtype(a, b) {
            Relation::Descendant
        } else if self.is_subtype(b, a) {
            Relation::Ancestor
        } else {
            Relation::Unrelated
        }
    }

    /// Proper ancestors of `id`, nearest first, ending at the root
    pub fn ancestors(&self, id: TypeId) -> Ancestors<'_> {
        Ancestors {
            hierarchy: self,
            next: self.types[id.0].parent,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &ExceptionType)> {
        self.types.iter().enumerate().map(|(i, t)| (TypeId(i), t))
    }

    /// Indented rendering of the tree, children in declaration order
    pub fn render_tree(&self) -> String {
        let mut children: Vec<Vec<TypeId>> = vec![Vec::new(); self.types.len()];
        for (id, t) in self.iter() {
            if let Some(p) = t.parent {
                children[p.0].push(id);
            }
        }
        let mut out = String::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let t = self.get(id);
            let _ = writeln!(out, "{}{} [{}]", "  ".repeat(t.depth), t.name, t.kind);
            stack.extend(children[id.0].iter().rev());
        }
        out
    }
}

/// Simple name of a qualified name in one of the standard JDK packages
pub(crate) fn standard_simple_name(name: &str) -> Option<&str> {
    if !STANDARD_PACKAGE_PREFIXES.iter().any(|p| name.starts_with(*p)) {
        return None;
    }
    name.rsplit_once('.').map(|(_, simple)| simple)
}

/// Iterator over the parent chain of a type
pub struct Ancestors<'a> {
    hierarchy: &'a ExceptionHierarchy,
    next: Option<TypeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        let cur = self.next?;
        self.next = self.hierarchy.parent(cur);
        Some(cur)
    }
}
