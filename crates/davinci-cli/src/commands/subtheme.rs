//! Implementation of the `davinci subtheme` command.
//!
//! Responsibility: translate CLI arguments into a `GenerationRequest`, call
//! the core sub-theme service, and display results. No business logic lives
//! here.

use tracing::{debug, info, instrument};

use davinci_adapters::{DirStarterkitStore, LocalFilesystem};
use davinci_core::{application::SubThemeService, domain::GenerationRequest};

use crate::{
    cli::{SubthemeArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `davinci subtheme` command.
///
/// Dispatch sequence:
/// 1. Build the request (flags > config defaults > derived defaults);
///    validation failures are aggregated and reported here
/// 2. Wire the filesystem and starterkit-store adapters
/// 3. Execute generation via `SubThemeService`
/// 4. Print next-steps guidance
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(
    args: SubthemeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Build request (defaults + validation)
    let request = build_request(&args, &config)?;

    debug!(
        machine_name = request.machine_name(),
        destination = %request.destination().display(),
        starterkit = request.starterkit(),
        "Request resolved"
    );

    // 2. Create adapters and service
    let root = config.starterkit_root();
    let store = Box::new(DirStarterkitStore::new(root));
    let filesystem = Box::new(LocalFilesystem::new());
    let service = SubThemeService::new(store, filesystem);

    let target = request.target_dir();
    output.header(&format!("Creating sub-theme '{}'...", request.name()))?;
    info!(theme = request.machine_name(), path = %target.display(), "Generation started");

    // 3. Generate
    service.create(&request).map_err(CliError::Core)?;

    info!(theme = request.machine_name(), "Generation completed");

    // 4. Success + next steps
    output.success(&format!(
        "Sub-theme '{}' created at {}",
        request.name(),
        target.display()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  drush theme:enable {}   # enable the new sub-theme",
            request.machine_name()
        ))?;
        output.print(&format!("  drush config-set system.theme default {}", request.machine_name()))?;
    }

    Ok(())
}

/// Resolve option values (flag > config default) and build the validated
/// request.
fn build_request(args: &SubthemeArgs, config: &AppConfig) -> CliResult<GenerationRequest> {
    let mut builder = GenerationRequest::builder(&args.name);

    if let Some(machine_name) = args.machine_name.as_deref() {
        builder = builder.machine_name(machine_name);
    }
    if let Some(description) = args
        .description
        .as_deref()
        .or(config.defaults.description.as_deref())
    {
        builder = builder.description(description);
    }
    if let Some(destination) = args
        .destination
        .as_deref()
        .or(config.defaults.destination.as_deref())
    {
        builder = builder.destination(destination);
    }
    if let Some(starterkit) = args
        .starterkit
        .as_deref()
        .or(config.defaults.starterkit.as_deref())
    {
        builder = builder.starterkit(starterkit);
    }

    builder
        .build(|path| path.exists())
        .map_err(|e| CliError::Core(e.into()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
