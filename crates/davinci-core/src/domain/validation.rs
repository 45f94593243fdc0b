//! Request validation.
//!
//! Rules are declared as a static list of (field, validator) pairs and
//! evaluated in order; every failure is collected before reporting so the
//! user sees all problems at once.

use crate::domain::{DomainError, GenerationRequest, is_valid_machine_name};

type Validator = fn(&GenerationRequest) -> Option<DomainError>;

/// The validation rules, in evaluation order.
const RULES: &[(&str, Validator)] = &[
    ("name", validate_label),
    ("machine-name", validate_machine_names),
];

/// Run every rule and aggregate the failures.
pub fn validate(request: &GenerationRequest) -> Result<(), DomainError> {
    aggregate(
        RULES
            .iter()
            .filter_map(|(_, validator)| validator(request))
            .collect(),
    )
}

/// Collapse collected failures into a single error.
///
/// One failure is returned as-is; several become an
/// [`DomainError::Aggregate`] whose message joins theirs and whose exit
/// code is the maximum across them.
pub fn aggregate(errors: Vec<DomainError>) -> Result<(), DomainError> {
    let mut errors = errors;
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => {
            let code = errors.iter().map(DomainError::exit_code).max().unwrap_or(1);
            let messages = errors.iter().map(ToString::to_string).collect();
            Err(DomainError::Aggregate { messages, code })
        }
    }
}

fn validate_label(request: &GenerationRequest) -> Option<DomainError> {
    let label = request.name();
    if label.is_empty() {
        return Some(DomainError::EmptyLabel {
            argument: "name".into(),
        });
    }
    if label.chars().any(|c| matches!(c, '\t' | '\r' | '\n')) {
        return Some(DomainError::ForbiddenWhitespace {
            argument: "name".into(),
        });
    }
    None
}

fn validate_machine_names(request: &GenerationRequest) -> Option<DomainError> {
    // Modeled as a list: every offending value is reported, not just the
    // first.
    let invalid: Vec<String> = [request.machine_name()]
        .iter()
        .filter(|name| !is_valid_machine_name(name))
        .map(ToString::to_string)
        .collect();

    if invalid.is_empty() {
        return None;
    }

    Some(DomainError::InvalidMachineNames {
        option: "machine-name".into(),
        names: invalid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn request(name: &str, machine_name: &str) -> GenerationRequest {
        GenerationRequest::builder(name)
            .machine_name(machine_name)
            .destination("./themes")
            .build(|_: &Path| false)
            .expect("fixture request must be valid")
    }

    #[test]
    fn valid_request_passes() {
        assert!(validate(&request("My Theme", "my_theme")).is_ok());
    }

    #[test]
    fn tab_in_label_is_rejected() {
        let err = GenerationRequest::builder("My\tTheme")
            .machine_name("my_theme")
            .build(|_: &Path| false)
            .unwrap_err();
        assert!(matches!(err, DomainError::ForbiddenWhitespace { .. }));
    }

    #[test]
    fn carriage_return_in_label_is_rejected() {
        let err = GenerationRequest::builder("My\rTheme")
            .machine_name("my_theme")
            .build(|_: &Path| false)
            .unwrap_err();
        assert!(matches!(err, DomainError::ForbiddenWhitespace { .. }));
    }

    #[test]
    fn bad_machine_name_is_named_in_the_error() {
        let err = GenerationRequest::builder("My Theme")
            .machine_name("Bad-Name")
            .build(|_: &Path| false)
            .unwrap_err();
        assert!(err.to_string().contains("Bad-Name"));
    }

    #[test]
    fn multiple_failures_aggregate_into_one_error() {
        let err = GenerationRequest::builder("My\tTheme")
            .machine_name("Bad-Name")
            .build(|_: &Path| false)
            .unwrap_err();
        match err {
            DomainError::Aggregate { messages, code } => {
                assert_eq!(messages.len(), 2);
                assert_eq!(code, 1);
                assert!(messages[0].contains("not allowed"));
                assert!(messages[1].contains("Bad-Name"));
            }
            other => panic!("expected aggregate, got: {other:?}"),
        }
    }

    #[test]
    fn aggregate_of_nothing_is_ok() {
        assert!(aggregate(Vec::new()).is_ok());
    }

    #[test]
    fn aggregate_of_one_returns_it_unchanged() {
        let single = DomainError::EmptyLabel {
            argument: "name".into(),
        };
        let err = aggregate(vec![single.clone()]).unwrap_err();
        assert_eq!(err, single);
    }
}
