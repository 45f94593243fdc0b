//! Domain layer errors.
//!
//! All errors are:
//! - Cloneable (for aggregation)
//! - Categorizable (for CLI display)
//! - Actionable (provides suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The theme label was empty.
    #[error("Argument '{argument}' must not be empty.")]
    EmptyLabel { argument: String },

    /// The theme label contained tab/CR/LF characters.
    #[error("Tabs and new line characters are not allowed in argument '{argument}'.")]
    ForbiddenWhitespace { argument: String },

    /// One or more machine names failed the `^[a-z][a-z0-9_]*$` rule.
    ///
    /// Every offending value is collected before reporting.
    #[error("Following machine-names are invalid in option '{}': {}", .option, .names.join(", "))]
    InvalidMachineNames { option: String, names: Vec<String> },

    /// Several validation rules failed; their messages are joined into one
    /// report and the exit code is the maximum across all of them.
    #[error("{}", .messages.join("\n"))]
    Aggregate { messages: Vec<String>, code: u8 },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyLabel { argument } => {
                vec![format!("Provide a non-empty value for '{argument}'")]
            }
            Self::ForbiddenWhitespace { argument } => vec![
                format!("Remove tab and newline characters from '{argument}'"),
                "Example: davinci subtheme 'My Theme'".into(),
            ],
            Self::InvalidMachineNames { .. } => vec![
                "Machine names must start with a lowercase letter".into(),
                "Only lowercase letters, digits, and underscores are allowed".into(),
                "Examples: my_theme, theme2, corporate_blue".into(),
            ],
            Self::Aggregate { .. } => vec!["Fix the listed problems and re-run".into()],
        }
    }

    /// Exit code to surface for this error.
    ///
    /// Individual rules report 1; an aggregate carries the maximum across
    /// the failures it collects.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Aggregate { code, .. } => *code,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_machine_names_lists_every_value() {
        let err = DomainError::InvalidMachineNames {
            option: "machine-name".into(),
            names: vec!["My_Theme".into(), "9lives".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("My_Theme"));
        assert!(msg.contains("9lives"));
        assert!(msg.contains("machine-name"));
    }

    #[test]
    fn aggregate_joins_messages_with_newlines() {
        let err = DomainError::Aggregate {
            messages: vec!["first".into(), "second".into()],
            code: 1,
        };
        assert_eq!(err.to_string(), "first\nsecond");
    }

    #[test]
    fn aggregate_carries_its_code() {
        let err = DomainError::Aggregate {
            messages: vec!["x".into()],
            code: 3,
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn single_errors_exit_with_one() {
        let err = DomainError::EmptyLabel {
            argument: "name".into(),
        };
        assert_eq!(err.exit_code(), 1);
    }
}
