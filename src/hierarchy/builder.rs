use std::collections::HashMap;

use super::{standard_simple_name, ExceptionHierarchy, ExceptionKind, ExceptionType, HierarchyError, TypeId};
use crate::consts::{STANDARD_EXCEPTIONS, STANDARD_ROOT, STANDARD_UNCHECKED_ROOTS};
use crate::parser::ExceptionDecl;

/// Collects declarations and validates them into an [`ExceptionHierarchy`]
///
/// Declarations may arrive in any order; parents are resolved in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct HierarchyBuilder {
    entries: Vec<(String, Option<String>)>,
    unchecked_roots: Vec<String>,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preloaded with the standard Java exception tree
    pub fn standard() -> Self {
        let mut b = Self::new();
        b.declare(STANDARD_ROOT, None);
        for (name, parent) in STANDARD_EXCEPTIONS {
            b.declare(*name, Some(*parent));
        }
        for root in STANDARD_UNCHECKED_ROOTS {
            b.unchecked_root(*root);
        }
        b
    }

    pub fn declare(&mut self, name: impl Into<String>, parent: Option<&str>) -> &mut Self {
        self.entries.push((name.into(), parent.map(str::to_string)));
        self
    }

    /// Mark a declared type as the root of an unchecked subtree
    pub fn unchecked_root(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if !self.unchecked_roots.contains(&name) {
            self.unchecked_roots.push(name);
        }
        self
    }

    /// Add parsed declarations; `unchecked` ones also become unchecked roots
    pub fn declare_all(&mut self, decls: &[ExceptionDecl]) -> &mut Self {
        for d in decls {
            self.declare(d.name.clone(), d.extends.as_deref());
            if d.unchecked {
                self.unchecked_root(d.name.clone());
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(&self) -> Result<ExceptionHierarchy, HierarchyError> {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(self.entries.len());
        for (i, (name, _)) in self.entries.iter().enumerate() {
            if index.insert(name.as_str(), i).is_some() {
                return Err(HierarchyError::DuplicateType(name.clone()));
            }
        }

        let mut parents: Vec<Option<usize>> = Vec::with_capacity(self.entries.len());
        for (name, parent) in &self.entries {
            match parent {
                Some(p) => match lookup(&index, p) {
                    Some(pi) => parents.push(Some(pi)),
                    None => {
                        return Err(HierarchyError::UnknownParent {
                            name: name.clone(),
                            parent: p.clone(),
                        })
                    }
                },
                None => parents.push(None),
            }
        }

        let order = self.topological_order(&parents)?;

        let roots: Vec<usize> = (0..parents.len()).filter(|&i| parents[i].is_none()).collect();
        let root = match roots.as_slice() {
            [] => return Err(HierarchyError::NoRoot),
            [r] => *r,
            many => {
                return Err(HierarchyError::MultipleRoots(
                    many.iter().map(|&i| self.entries[i].0.clone()).collect(),
                ))
            }
        };

        if self.unchecked_roots.is_empty() {
            return Err(HierarchyError::MissingUncheckedRoot);
        }
        let mut is_unchecked_root = vec![false; self.entries.len()];
        for name in &self.unchecked_roots {
            match lookup(&index, name) {
                Some(i) => is_unchecked_root[i] = true,
                None => return Err(HierarchyError::UnknownUncheckedRoot(name.clone())),
            }
        }

        // parents come before children in `order`, so both fields can be filled in one sweep
        let mut depth = vec![0usize; self.entries.len()];
        let mut unchecked = vec![false; self.entries.len()];
        for &i in &order {
            if let Some(p) = parents[i] {
                depth[i] = depth[p] + 1;
                unchecked[i] = unchecked[p];
            }
            unchecked[i] |= is_unchecked_root[i];
        }

        let types: Vec<ExceptionType> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (name, _))| {
                let kind = if unchecked[i] { ExceptionKind::Unchecked } else { ExceptionKind::Checked };
                ExceptionHierarchy::node(name.clone(), parents[i].map(TypeId), kind, depth[i])
            })
            .collect();

        log::debug!(
            "exception hierarchy built: types={} root={} unchecked_roots={:?}",
            types.len(),
            self.entries[root].0,
            self.unchecked_roots
        );
        Ok(ExceptionHierarchy::from_parts(types, TypeId(root)))
    }

    /// Orders nodes so that every parent precedes its children, rejecting cycles
    fn topological_order(&self, parents: &[Option<usize>]) -> Result<Vec<usize>, HierarchyError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unseen,
            OnPath,
            Done,
        }
        let mut marks = vec![Mark::Unseen; parents.len()];
        let mut order = Vec::with_capacity(parents.len());
        let mut path = Vec::new();
        for start in 0..parents.len() {
            let mut cur = Some(start);
            while let Some(i) = cur {
                match marks[i] {
                    Mark::Done => break,
                    Mark::OnPath => return Err(HierarchyError::Cycle(self.entries[i].0.clone())),
                    Mark::Unseen => {
                        marks[i] = Mark::OnPath;
                        path.push(i);
                        cur = parents[i];
                    }
                }
            }
            while let Some(i) = path.pop() {
                marks[i] = Mark::Done;
                order.push(i);
            }
        }
        Ok(order)
    }
}

/// Exact name first, then the simple name of a JDK-qualified one
fn lookup(index: &HashMap<&str, usize>, name: &str) -> Option<usize> {
    index
        .get(name)
        .or_else(|| standard_simple_name(name).and_then(|simple| index.get(simple)))
        .copied()
}
