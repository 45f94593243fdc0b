//! Sub-theme generator.
//!
//! Operates on a directory that already contains a copied starterkit and
//! turns it into a uniquely named theme: the placeholder token is read off
//! the kit's `*.info.yml`, every file's content is rewritten, then files
//! carrying the token in their name are renamed. Content rewriting finishes
//! for the whole tree before the first rename — the rename pass matches on
//! file names the rewrite pass must still be able to see.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{replacement_pairs, translate},
    error::DaVinciResult,
};

/// Suffix marking the info file of a theme.
const INFO_SUFFIX: &str = ".info.yml";

/// Inputs for customizing an already-copied starterkit tree.
///
/// `machine_name` left as `None` falls back to the base name of the target
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizeRequest {
    pub name: String,
    pub description: String,
    pub machine_name: Option<String>,
}

/// Rewrites and renames a copied starterkit in place.
pub struct SubThemeGenerator<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> SubThemeGenerator<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Customize the tree at `dir`.
    ///
    /// Fails before touching anything if the placeholder token cannot be
    /// determined. A failure mid-rewrite leaves the tree partially
    /// transformed; there is no rollback.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn customize(&self, dir: &Path, request: &CustomizeRequest) -> DaVinciResult<()> {
        let token = self.discover_token(dir)?;
        let machine_name = match request.machine_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string(),
        };
        debug!(token = %token, machine_name = %machine_name, "customizing starterkit copy");

        let pairs = replacement_pairs(&token, &request.name, &request.description, &machine_name);
        self.rewrite_contents(dir, &pairs)?;
        self.rename_files(dir, &token, &machine_name)
    }

    /// The placeholder token is the basename of the single `*.info.yml`
    /// directly under `dir`. Zero or several info files is an error.
    fn discover_token(&self, dir: &Path) -> DaVinciResult<String> {
        let mut tokens: Vec<String> = self
            .filesystem
            .entries_in(dir)?
            .into_iter()
            .filter_map(|entry| {
                entry
                    .file_name()
                    .and_then(|n| n.to_str())
                    .and_then(|n| n.strip_suffix(INFO_SUFFIX))
                    .map(ToString::to_string)
            })
            .collect();
        tokens.sort();

        match tokens.len() {
            0 => Err(ApplicationError::MissingInfoFile {
                dir: dir.to_path_buf(),
            }
            .into()),
            1 => Ok(tokens.remove(0)),
            _ => Err(ApplicationError::AmbiguousInfoFile {
                dir: dir.to_path_buf(),
                names: tokens
                    .into_iter()
                    .map(|t| format!("{t}{INFO_SUFFIX}"))
                    .collect(),
            }
            .into()),
        }
    }

    /// Apply the replacement pairs to every file in the tree.
    ///
    /// Files that vanished since listing are skipped; unreadable content is
    /// fatal.
    fn rewrite_contents(&self, dir: &Path, pairs: &[(String, String)]) -> DaVinciResult<()> {
        for file in self.filesystem.files_under(dir)? {
            if !self.filesystem.exists(&file) {
                continue;
            }
            let content = self.filesystem.read_to_string(&file)?;
            self.filesystem
                .write_file(&file, &translate(&content, pairs))?;
        }
        Ok(())
    }

    /// Rename every file whose name contains the old token.
    ///
    /// A no-op when the machine name did not change. The substitution
    /// applies to the final path component only; directory placement is
    /// preserved.
    fn rename_files(&self, dir: &Path, old: &str, new: &str) -> DaVinciResult<()> {
        if old == new {
            return Ok(());
        }

        for file in self.filesystem.files_under(dir)? {
            let Some(name) = file.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.contains(old) {
                continue;
            }
            let renamed: PathBuf = file.with_file_name(name.replace(old, new));
            debug!(from = %file.display(), to = %renamed.display(), "renaming");
            self.filesystem.rename(&file, &renamed)?;
        }
        Ok(())
    }
}
