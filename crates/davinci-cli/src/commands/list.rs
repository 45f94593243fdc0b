//! Implementation of the `davinci list` command.

use serde_json::json;
use tracing::instrument;

use davinci_adapters::{DirStarterkitStore, LocalFilesystem};
use davinci_core::application::SubThemeService;

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `davinci list` command.
#[instrument(skip_all)]
pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = config.starterkit_root();
    let store = Box::new(DirStarterkitStore::new(root.clone()));
    let service = SubThemeService::new(store, Box::new(LocalFilesystem::new()));

    let kits = service.list_starterkits().map_err(CliError::Core)?;

    match args.format {
        ListFormat::List => {
            if kits.is_empty() {
                output.warning(&format!("No starterkits found under {}", root.display()))?;
                return Ok(());
            }
            for kit in kits {
                output.print(&kit.id)?;
            }
        }
        ListFormat::Json => {
            let entries: Vec<serde_json::Value> = kits
                .iter()
                .map(|kit| json!({ "id": kit.id, "path": kit.path }))
                .collect();
            let rendered = serde_json::to_string_pretty(&entries).map_err(|e| {
                CliError::InvalidInput {
                    message: format!("cannot render starterkit list as JSON: {e}"),
                }
            })?;
            // JSON goes straight to stdout so it stays machine-readable even
            // in quiet mode.
            println!("{rendered}");
        }
    }

    Ok(())
}
