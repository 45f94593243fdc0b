//! Application layer - use-case orchestration.
//!
//! Services coordinate the domain rules with the outside world through
//! driven ports. No I/O implementation lives here; adapters provide it.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{CustomizeRequest, SubThemeGenerator, SubThemeService};
