//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{Field, ValidationError};
use thiserror::Error;

/// Errors raised by contact validation and the contact directory.
///
/// Every failure is a caller-input contract violation, so there is a single
/// kind. The wrapped [`ValidationError`] names the rule that was broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// An argument was absent, malformed, or violated a directory precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),
}

impl ContactError {
    /// Shorthand for an absent required field.
    pub fn missing(field: Field) -> Self {
        Self::InvalidArgument(ValidationError::MissingField(field))
    }

    /// The underlying validation failure.
    pub fn reason(&self) -> &ValidationError {
        match self {
            Self::InvalidArgument(reason) => reason,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
