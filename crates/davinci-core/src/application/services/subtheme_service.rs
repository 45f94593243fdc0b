//! Sub-theme service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the request (before any mutation)
//! 2. Resolve the starterkit source directory
//! 3. Mirror it onto the target directory
//! 4. Customize the copy (content rewrite, then renames)
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing).

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, StarterkitInfo, StarterkitStore},
        services::{CustomizeRequest, SubThemeGenerator},
    },
    domain::{GenerationRequest, validation},
    error::DaVinciResult,
};

/// Main scaffolding service.
pub struct SubThemeService {
    store: Box<dyn StarterkitStore>,
    filesystem: Box<dyn Filesystem>,
}

impl SubThemeService {
    /// Create a new service with the given adapters.
    pub fn new(store: Box<dyn StarterkitStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Create one sub-theme.
    ///
    /// Validation and the destination-not-empty check happen before the
    /// first filesystem write. A copy failure aborts before the generator
    /// runs; a generator failure leaves the copy partially transformed
    /// (accepted, no rollback).
    #[instrument(skip_all, fields(theme = %request.machine_name()))]
    pub fn create(&self, request: &GenerationRequest) -> DaVinciResult<()> {
        validation::validate(request)?;

        let target = request.target_dir();
        if self.filesystem.exists(&target) && !self.filesystem.is_dir_empty(&target)? {
            return Err(ApplicationError::DestinationNotEmpty { path: target }.into());
        }

        let source = self.store.resolve(request.starterkit())?;
        debug!(
            starterkit = request.starterkit(),
            src = %source.display(),
            dst = %target.display(),
            "copy starterkit"
        );
        self.filesystem.mirror(&source, &target)?;

        debug!(dst = %target.display(), "customize starterkit copy");
        let generator = SubThemeGenerator::new(self.filesystem.as_ref());
        generator.customize(
            &target,
            &CustomizeRequest {
                name: request.name().to_string(),
                description: request.description().to_string(),
                machine_name: Some(request.machine_name().to_string()),
            },
        )?;

        info!(theme = request.machine_name(), "sub-theme created");
        Ok(())
    }

    /// List every installed starterkit.
    pub fn list_starterkits(&self) -> DaVinciResult<Vec<StarterkitInfo>> {
        self.store.list()
    }
}
