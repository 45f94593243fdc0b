//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The target directory exists and already contains entries.
    #[error("Destination directory '{}' not empty", .path.display())]
    DestinationNotEmpty { path: PathBuf },

    /// No starterkit with the requested identifier.
    #[error("Starterkit '{}' not found under '{}'", .id, .root.display())]
    StarterkitNotFound { id: String, root: PathBuf },

    /// The copied tree has no `*.info.yml` marker, so the placeholder token
    /// cannot be determined.
    #[error("No *.info.yml file found in '{}'", .dir.display())]
    MissingInfoFile { dir: PathBuf },

    /// More than one `*.info.yml` marker; the placeholder token is
    /// ambiguous.
    #[error("Multiple *.info.yml files found in '{}': {}", .dir.display(), .names.join(", "))]
    AmbiguousInfoFile { dir: PathBuf, names: Vec<String> },

    /// A file could not be read as text.
    #[error("Could not read file '{}': {}", .path.display(), .reason)]
    UnreadableFile { path: PathBuf, reason: String },

    /// A filesystem operation failed.
    #[error("Filesystem error at '{}': {}", .path.display(), .reason)]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationNotEmpty { path } => vec![
                format!("The directory '{}' already has content", path.display()),
                "Choose a different machine name or destination".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::StarterkitNotFound { id, .. } => vec![
                format!("No starterkit named '{id}' is installed"),
                "List installed starterkits: davinci list".into(),
            ],
            Self::MissingInfoFile { dir } => vec![
                format!("'{}' does not look like a starterkit", dir.display()),
                "A starterkit must carry exactly one *.info.yml at its top level".into(),
            ],
            Self::AmbiguousInfoFile { .. } => vec![
                "A starterkit must carry exactly one *.info.yml at its top level".into(),
                "Remove the extra info files from the starterkit".into(),
            ],
            Self::UnreadableFile { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Starterkit files must be UTF-8 text".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DestinationNotEmpty { .. } => ErrorCategory::Validation,
            Self::StarterkitNotFound { .. }
            | Self::MissingInfoFile { .. }
            | Self::AmbiguousInfoFile { .. } => ErrorCategory::Precondition,
            Self::UnreadableFile { .. } | Self::Filesystem { .. } => ErrorCategory::Io,
        }
    }
}
