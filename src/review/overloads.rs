use super::overrides::{resolve_throws, validate};
use super::ValidationResult;
use crate::error::Result;
use crate::hierarchy::ExceptionHierarchy;
use crate::signature::MethodSignature;

/// How a candidate method relates to a parent method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodRelation {
    /// Same name and same erased parameter types
    Override,
    /// Same name, different parameter types
    Overload,
    Unrelated,
}

impl MethodRelation {
    pub fn between(parent: &MethodSignature, child: &MethodSignature) -> Self {
        if parent.name() != child.name() {
            return MethodRelation::Unrelated;
        }
        let same_params = parent.parameters().len() == child.parameters().len()
            && parent
                .parameters()
                .iter()
                .zip(child.parameters())
                .all(|(a, b)| erase(a) == erase(b));
        if same_params {
            MethodRelation::Override
        } else {
            MethodRelation::Overload
        }
    }
}

/// Apply the override rule only where the child really overrides the parent.
/// Overloads and unrelated methods declare exceptions independently, but
/// their names must still resolve.
pub fn check(
    parent: &MethodSignature,
    child: &MethodSignature,
    hierarchy: &ExceptionHierarchy,
) -> Result<ValidationResult> {
    match MethodRelation::between(parent, child) {
        MethodRelation::Override => validate(parent, child, hierarchy),
        relation => {
            resolve_throws(parent, hierarchy)?;
            resolve_throws(child, hierarchy)?;
            log::debug!("{:?} {} / {}: exceptions unconstrained", relation, parent, child);
            Ok(ValidationResult::Allowed)
        }
    }
}

/// Drop type arguments and package qualifiers: `java.util.List<String>[]` -> `List[]`
fn erase(ty: &str) -> String {
    let mut out = String::with_capacity(ty.len());
    let mut depth = 0usize;
    for ch in ty.chars() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {}
        }
    }
    match out.find('[') {
        Some(i) => {
            let (base, dims) = out.split_at(i);
            format!("{}{}", base.rsplit('.').next().unwrap_or(base), dims)
        }
        None => out.rsplit('.').next().unwrap_or(&out).to_string(),
    }
}
