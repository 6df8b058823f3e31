//! Override review: the checked-exception covariance rule
//!
//! A rejected override is a normal outcome carried by [`ValidationResult`];
//! only unresolvable input is an [`Error`](crate::Error).

mod overloads;
mod overrides;

pub use overloads::{check, MethodRelation};
pub use overrides::{diagnose, validate};

use std::fmt;

use crate::error::Result;
use crate::hierarchy::ExceptionHierarchy;
use crate::signature::{MethodSignature, OverridePair};

/// Why a child's checked exception is not allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The parent declares no checked exceptions at all
    New,
    /// The parent declares checked exceptions but none covers this one
    Broader,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::New => "new",
            RejectReason::Broader => "broader",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking one override
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Allowed,
    /// First child checked exception (declaration order) not covered by the parent.
    /// `offending` is the canonical hierarchy name, so a child declaring
    /// `java.sql.SQLException` is reported as `SQLException`.
    Rejected { offending: String, reason: RejectReason },
}

impl ValidationResult {
    pub fn rejected(offending: impl Into<String>, reason: RejectReason) -> Self {
        Self::Rejected { offending: offending.into(), reason }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_allowed()
    }

    pub fn offending(&self) -> Option<&str> {
        match self {
            Self::Allowed => None,
            Self::Rejected { offending, .. } => Some(offending),
        }
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Self::Allowed => None,
            Self::Rejected { reason, .. } => Some(*reason),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allowed => f.write_str("allowed"),
            Self::Rejected { offending, reason } => write!(f, "rejected: {offending} ({reason})"),
        }
    }
}

/// One uncovered checked exception, with the parent's checked list it was compared to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub offending: String,
    pub reason: RejectReason,
    pub parent_checked: Vec<String>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            RejectReason::New => write!(
                f,
                "overridden method throws no checked exceptions; '{}' is new",
                self.offending
            ),
            RejectReason::Broader => write!(
                f,
                "throws incompatible exception '{}'; overridden method throws {}",
                self.offending,
                self.parent_checked.join(", ")
            ),
        }
    }
}

/// Reviews overrides against one shared hierarchy
#[derive(Debug, Clone, Copy)]
pub struct Validator<'h> {
    hierarchy: &'h ExceptionHierarchy,
}

impl<'h> Validator<'h> {
    pub fn new(hierarchy: &'h ExceptionHierarchy) -> Self {
        Self { hierarchy }
    }

    pub fn hierarchy(&self) -> &'h ExceptionHierarchy {
        self.hierarchy
    }

    pub fn validate(&self, parent: &MethodSignature, child: &MethodSignature) -> Result<ValidationResult> {
        validate(parent, child, self.hierarchy)
    }

    pub fn validate_pair(&self, pair: &OverridePair<'_>) -> Result<ValidationResult> {
        validate(pair.parent(), pair.child(), self.hierarchy)
    }

    pub fn diagnose(&self, parent: &MethodSignature, child: &MethodSignature) -> Result<Vec<Violation>> {
        diagnose(parent, child, self.hierarchy)
    }

    pub fn check(&self, parent: &MethodSignature, child: &MethodSignature) -> Result<ValidationResult> {
        check(parent, child, self.hierarchy)
    }
}

impl OverridePair<'_> {
    pub fn validate(&self, hierarchy: &ExceptionHierarchy) -> Result<ValidationResult> {
        validate(self.parent(), self.child(), hierarchy)
    }

    pub fn diagnose(&self, hierarchy: &ExceptionHierarchy) -> Result<Vec<Violation>> {
        diagnose(self.parent(), self.child(), hierarchy)
    }

    pub fn relation(&self) -> MethodRelation {
        MethodRelation::between(self.parent(), self.child())
    }
}
