//! Unified error handling for Da Vinci Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Da Vinci Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// davinci-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum DaVinciError {
    /// Errors from the domain layer (validation failures).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl DaVinciError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in the sub-theme generator".into(),
                "Please report this issue to the Da Vinci maintainers".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code this error should surface as.
    ///
    /// Validation errors carry their own aggregated code (the maximum across
    /// all collected failures); everything else is 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Domain(e) => e.exit_code(),
            _ => 1,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Precondition,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type DaVinciResult<T> = Result<T, DaVinciError>;
