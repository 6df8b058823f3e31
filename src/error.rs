use thiserror::Error;

use crate::config::ConfigError;
use crate::hierarchy::HierarchyError;
use crate::parser::ParseError;

/// Result type for excheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for excheck
///
/// A rejected override is not an error; see [`crate::review::ValidationResult`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid input: method '{method}' references unknown exception type '{type_name}'")]
    InvalidInput { method: String, type_name: String },

    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Create an invalid input error for an unresolved exception name
    pub fn invalid_input(method: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::InvalidInput {
            method: method.into(),
            type_name: type_name.into(),
        }
    }

    /// True when the error came from an unresolved exception name
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
