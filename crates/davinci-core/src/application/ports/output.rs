//! Driven (output) ports.

use std::path::{Path, PathBuf};

use crate::error::DaVinciResult;

/// Blocking filesystem operations the application depends on.
///
/// The operation set is sized to what generation actually needs: mirroring
/// a source tree, rewriting files in place, and renaming them. Adapters map
/// their native failures into `ApplicationError::Filesystem` /
/// `ApplicationError::UnreadableFile`.
pub trait Filesystem: Send + Sync {
    /// Whether `path` exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Whether the directory at `path` has no entries.
    fn is_dir_empty(&self, path: &Path) -> DaVinciResult<bool>;

    /// Recursively copy `src` onto `dst`, creating directories as needed
    /// and overwriting existing files.
    fn mirror(&self, src: &Path, dst: &Path) -> DaVinciResult<()>;

    /// Read a file as UTF-8 text. Content that cannot be decoded is an
    /// error, not a skip.
    fn read_to_string(&self, path: &Path) -> DaVinciResult<String>;

    /// Write `content` to `path`, replacing what was there.
    fn write_file(&self, path: &Path, content: &str) -> DaVinciResult<()>;

    /// Rename `from` to `to`.
    fn rename(&self, from: &Path, to: &Path) -> DaVinciResult<()>;

    /// Every file under `dir`, recursively. Directories themselves are not
    /// listed.
    fn files_under(&self, dir: &Path) -> DaVinciResult<Vec<PathBuf>>;

    /// Direct children of `dir`, files and directories alike.
    fn entries_in(&self, dir: &Path) -> DaVinciResult<Vec<PathBuf>>;
}

/// One installed starterkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterkitInfo {
    /// Identifier, the directory name under the starterkits root.
    pub id: String,
    /// Absolute or root-relative path to the starterkit tree.
    pub path: PathBuf,
}

/// Resolution and listing of installed starterkits.
pub trait StarterkitStore: Send + Sync {
    /// Resolve a starterkit identifier to its source directory.
    fn resolve(&self, id: &str) -> DaVinciResult<PathBuf>;

    /// List every installed starterkit.
    fn list(&self) -> DaVinciResult<Vec<StarterkitInfo>>;
}
