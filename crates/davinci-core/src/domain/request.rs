//! Generation requests.
//!
//! A [`GenerationRequest`] is the immutable, fully-resolved input to one
//! scaffolding run. It is only obtainable through
//! [`GenerationRequestBuilder::build`], which fills in every default and
//! validates the result — code holding a request can rely on its
//! invariants.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{DomainError, label_to_machine_name, validation};

/// Description used when the caller supplies none.
pub const DEFAULT_DESCRIPTION: &str = "Da Vinci custom subtheme.";

/// Starterkit used when the caller supplies none.
pub const DEFAULT_STARTERKIT: &str = "default";

/// A validated request to generate one sub-theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    name: String,
    machine_name: String,
    description: String,
    destination: PathBuf,
    starterkit: String,
}

impl GenerationRequest {
    /// Start building a request for the given human-readable label.
    pub fn builder(name: impl Into<String>) -> GenerationRequestBuilder {
        GenerationRequestBuilder {
            name: name.into(),
            machine_name: None,
            description: None,
            destination: None,
            starterkit: None,
        }
    }

    /// Human-readable theme label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Machine name (explicit or derived from the label).
    pub fn machine_name(&self) -> &str {
        &self.machine_name
    }

    /// Theme description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Parent directory the sub-theme is created under.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Identifier of the starterkit to copy.
    pub fn starterkit(&self) -> &str {
        &self.starterkit
    }

    /// The directory the sub-theme lands in:
    /// `{destination}/{machine_name}`.
    pub fn target_dir(&self) -> PathBuf {
        self.destination.join(&self.machine_name)
    }
}

/// Builder for [`GenerationRequest`].
///
/// Setters overwrite; empty strings count as "not supplied" so that blank
/// CLI options fall back to the derived defaults.
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    name: String,
    machine_name: Option<String>,
    description: Option<String>,
    destination: Option<PathBuf>,
    starterkit: Option<String>,
}

impl GenerationRequestBuilder {
    pub fn machine_name(mut self, machine_name: impl Into<String>) -> Self {
        self.machine_name = Some(machine_name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn starterkit(mut self, starterkit: impl Into<String>) -> Self {
        self.starterkit = Some(starterkit.into());
        self
    }

    /// Resolve defaults, validate, and produce the immutable request.
    ///
    /// `exists` answers whether a path exists; it is injected so the default
    /// destination stays a pure function of explicit inputs. Validation
    /// failures from every field are aggregated into a single error.
    pub fn build(self, exists: impl Fn(&Path) -> bool) -> Result<GenerationRequest, DomainError> {
        let machine_name = self
            .machine_name
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| label_to_machine_name(&self.name));
        let description = self
            .description
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
        let destination = self
            .destination
            .filter(|v| !v.as_os_str().is_empty())
            .unwrap_or_else(|| default_destination(&exists));
        let starterkit = self
            .starterkit
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_STARTERKIT.to_string());

        let request = GenerationRequest {
            name: self.name,
            machine_name,
            description,
            destination,
            starterkit,
        };
        validation::validate(&request)?;
        Ok(request)
    }
}

/// Default destination for generated sub-themes.
///
/// `./themes/custom` when a contrib/custom split is in place, plain
/// `./themes` otherwise.
pub fn default_destination(exists: &impl Fn(&Path) -> bool) -> PathBuf {
    if exists(Path::new("./themes/contrib")) || exists(Path::new("./themes/custom")) {
        PathBuf::from("./themes/custom")
    } else {
        PathBuf::from("./themes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nothing_exists(_: &Path) -> bool {
        false
    }

    #[test]
    fn derives_machine_name_from_label() {
        let request = GenerationRequest::builder("My Theme")
            .build(nothing_exists)
            .unwrap();
        assert_eq!(request.machine_name(), "my_theme");
    }

    #[test]
    fn explicit_machine_name_wins() {
        let request = GenerationRequest::builder("My Theme")
            .machine_name("corporate")
            .build(nothing_exists)
            .unwrap();
        assert_eq!(request.machine_name(), "corporate");
    }

    #[test]
    fn empty_options_fall_back_to_defaults() {
        let request = GenerationRequest::builder("My Theme")
            .machine_name("")
            .description("")
            .starterkit("")
            .build(nothing_exists)
            .unwrap();
        assert_eq!(request.machine_name(), "my_theme");
        assert_eq!(request.description(), DEFAULT_DESCRIPTION);
        assert_eq!(request.starterkit(), DEFAULT_STARTERKIT);
    }

    #[test]
    fn default_destination_without_theme_dirs() {
        let request = GenerationRequest::builder("My Theme")
            .build(nothing_exists)
            .unwrap();
        assert_eq!(request.destination(), Path::new("./themes"));
    }

    #[test]
    fn default_destination_with_custom_split() {
        let request = GenerationRequest::builder("My Theme")
            .build(|p| p == Path::new("./themes/custom"))
            .unwrap();
        assert_eq!(request.destination(), Path::new("./themes/custom"));
    }

    #[test]
    fn contrib_dir_alone_selects_custom() {
        let dest = default_destination(&|p: &Path| p == Path::new("./themes/contrib"));
        assert_eq!(dest, PathBuf::from("./themes/custom"));
    }

    #[test]
    fn target_dir_joins_destination_and_machine_name() {
        let request = GenerationRequest::builder("My Theme")
            .destination("/var/www/themes/custom")
            .build(nothing_exists)
            .unwrap();
        assert_eq!(
            request.target_dir(),
            PathBuf::from("/var/www/themes/custom/my_theme")
        );
    }

    #[test]
    fn invalid_explicit_machine_name_fails_build() {
        let err = GenerationRequest::builder("My Theme")
            .machine_name("Not-Valid")
            .build(nothing_exists)
            .unwrap_err();
        assert!(err.to_string().contains("Not-Valid"));
    }

    #[test]
    fn label_with_newline_fails_build() {
        let err = GenerationRequest::builder("My\nTheme")
            .machine_name("my_theme")
            .build(nothing_exists)
            .unwrap_err();
        assert!(err.to_string().contains("not allowed"));
    }
}
