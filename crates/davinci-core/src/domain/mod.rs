//! Domain layer - pure sub-theme scaffolding rules.
//!
//! Everything in here is deterministic and free of I/O: machine-name rules,
//! replacement-pair computation, request construction and validation. The
//! only outside influence is an injected existence-check capability used to
//! resolve the default destination.

pub mod error;
pub mod machine_name;
pub mod replace;
pub mod request;
pub mod validation;

pub use error::DomainError;
pub use machine_name::{is_valid_machine_name, label_to_machine_name};
pub use replace::{HIDDEN_LINE, LABEL_PLACEHOLDER, replacement_pairs, translate};
pub use request::{
    DEFAULT_DESCRIPTION, DEFAULT_STARTERKIT, GenerationRequest, GenerationRequestBuilder,
    default_destination,
};
