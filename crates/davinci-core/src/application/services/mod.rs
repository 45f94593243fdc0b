//! Application services.

pub mod generator;
pub mod subtheme_service;

pub use generator::{CustomizeRequest, SubThemeGenerator};
pub use subtheme_service::SubThemeService;
