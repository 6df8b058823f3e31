use super::{RejectReason, ValidationResult, Violation};
use crate::error::{Error, Result};
use crate::hierarchy::{ExceptionHierarchy, TypeId};
use crate::signature::MethodSignature;

/// Decide whether `child` may override `parent` given their `throws` lists.
///
/// Every child checked exception must equal or descend from some parent
/// checked exception; unchecked ones never matter. All names on both sides
/// are resolved before any verdict, so an unknown name is always reported.
pub fn validate(
    parent: &MethodSignature,
    child: &MethodSignature,
    hierarchy: &ExceptionHierarchy,
) -> Result<ValidationResult> {
    let result = match uncovered(parent, child, hierarchy, true)?.into_iter().next() {
        Some(v) => ValidationResult::rejected(v.offending, v.reason),
        None => ValidationResult::Allowed,
    };
    log::debug!("override {} -> {}: {}", parent, child, result);
    Ok(result)
}

/// Every uncovered child checked exception, in declaration order
pub fn diagnose(
    parent: &MethodSignature,
    child: &MethodSignature,
    hierarchy: &ExceptionHierarchy,
) -> Result<Vec<Violation>> {
    uncovered(parent, child, hierarchy, false)
}

pub(super) fn resolve_throws(method: &MethodSignature, hierarchy: &ExceptionHierarchy) -> Result<Vec<TypeId>> {
    method
        .throws()
        .iter()
        .map(|name| {
            hierarchy
                .resolve(name)
                .ok_or_else(|| Error::invalid_input(method.name(), name.as_str()))
        })
        .collect()
}

fn uncovered(
    parent: &MethodSignature,
    child: &MethodSignature,
    hierarchy: &ExceptionHierarchy,
    first_only: bool,
) -> Result<Vec<Violation>> {
    let parent_checked: Vec<TypeId> = resolve_throws(parent, hierarchy)?
        .into_iter()
        .filter(|&id| hierarchy.is_checked(id))
        .collect();
    let child_types = resolve_throws(child, hierarchy)?;

    let reason = if parent_checked.is_empty() {
        RejectReason::New
    } else {
        RejectReason::Broader
    };

    let mut violations = Vec::new();
    for id in child_types {
        if !hierarchy.is_checked(id) {
            log::trace!("'{}' is unchecked; no constraint", hierarchy.name(id));
            continue;
        }
        if parent_checked.iter().any(|&p| hierarchy.is_subtype(id, p)) {
            continue;
        }
        log::debug!("'{}' not covered by {} ({})", hierarchy.name(id), parent, reason);
        violations.push(Violation {
            offending: hierarchy.name(id).to_string(),
            reason,
            parent_checked: parent_checked.iter().map(|&p| hierarchy.name(p).to_string()).collect(),
        });
        if first_only {
            break;
        }
    }
    Ok(violations)
}
