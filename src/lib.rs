//! Exception override checker (excheck)
//!
//! Decides whether a method override is legal under Java's checked-exception
//! covariance rule: every checked exception the overriding method declares
//! must be the same as, or a subtype of, some checked exception the
//! overridden method declares. Unchecked exceptions are never constrained.
//!
//! ## Architecture
//!
//! - **hierarchy**: immutable tree of exception types with checked/unchecked classification
//! - **signature**: method signatures and override pairs
//! - **review**: the override rule, diagnostics, and overload detection
//! - **parser**: Java-shaped exception declarations and method headers
//! - **config**: TOML description of the hierarchy to build
//! - **bin**: command-line check
//!
//! ```text
//! declarations / config → HierarchyBuilder → ExceptionHierarchy ─┐
//! method headers → MethodSignature ──────────────────────────────┴→ review::validate → ValidationResult
//! ```

pub mod config;
pub mod consts;
pub mod error;
pub mod hierarchy;
pub mod parser;
pub mod review;
pub mod signature;

pub use config::Config;
pub use error::{Error, Result};
pub use hierarchy::{ExceptionHierarchy, ExceptionKind, ExceptionType, HierarchyBuilder, Relation, TypeId};
pub use review::{check, diagnose, validate, MethodRelation, RejectReason, ValidationResult, Validator, Violation};
pub use signature::{MethodSignature, OverridePair};

/// Parse two method headers and validate the override against `hierarchy`
pub fn validate_headers(parent: &str, child: &str, hierarchy: &ExceptionHierarchy) -> Result<ValidationResult> {
    let parent = parser::parse_method(parent)?;
    let child = parser::parse_method(child)?;
    validate(&parent, &child, hierarchy)
}
