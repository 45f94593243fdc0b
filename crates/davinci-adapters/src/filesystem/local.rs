//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use davinci_core::{application::ports::Filesystem, error::DaVinciResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir_empty(&self, path: &Path) -> DaVinciResult<bool> {
        let mut entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        Ok(entries.next().is_none())
    }

    fn mirror(&self, src: &Path, dst: &Path) -> DaVinciResult<()> {
        for entry in WalkDir::new(src) {
            let entry = entry.map_err(|e| map_walk_error(src, e))?;
            let rel = entry
                .path()
                .strip_prefix(src)
                .map_err(|e| map_io_error(entry.path(), io::Error::other(e), "relativize"))?;
            let target = dst.join(rel);
            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)
                    .map_err(|e| map_io_error(&target, e, "create directory"))?;
            } else {
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| map_io_error(parent, e, "create directory"))?;
                }
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| map_io_error(&target, e, "copy file"))?;
            }
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> DaVinciResult<String> {
        std::fs::read_to_string(path).map_err(|e| {
            davinci_core::application::ApplicationError::UnreadableFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> DaVinciResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn rename(&self, from: &Path, to: &Path) -> DaVinciResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename"))
    }

    fn files_under(&self, dir: &Path) -> DaVinciResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir) {
            let entry = entry.map_err(|e| map_walk_error(dir, e))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn entries_in(&self, dir: &Path) -> DaVinciResult<Vec<PathBuf>> {
        let entries =
            std::fs::read_dir(dir).map_err(|e| map_io_error(dir, e, "read directory"))?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(dir, e, "read directory entry"))?;
            paths.push(entry.path());
        }
        paths.sort();
        Ok(paths)
    }
}

fn map_io_error(
    path: &Path,
    e: io::Error,
    operation: &str,
) -> davinci_core::error::DaVinciError {
    use davinci_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

fn map_walk_error(root: &Path, e: walkdir::Error) -> davinci_core::error::DaVinciError {
    use davinci_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: e
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf()),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn mirror_copies_nested_trees() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("a/b/dst");
        write(&src.join("mytheme.info.yml"), "name: My theme\n");
        write(&src.join("js/mytheme.js"), "// js\n");

        let filesystem = LocalFilesystem::new();
        filesystem.mirror(&src, &dst).unwrap();

        assert!(dst.join("mytheme.info.yml").is_file());
        assert!(dst.join("js/mytheme.js").is_file());
    }

    #[test]
    fn mirror_overwrites_existing_files() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("dst");
        write(&src.join("file.txt"), "new");
        write(&dst.join("file.txt"), "old");

        LocalFilesystem::new().mirror(&src, &dst).unwrap();
        assert_eq!(std::fs::read_to_string(dst.join("file.txt")).unwrap(), "new");
    }

    #[test]
    fn mirror_of_missing_source_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let result = LocalFilesystem::new().mirror(&tmp.path().join("gone"), &tmp.path().join("dst"));
        assert!(result.is_err());
    }

    #[test]
    fn is_dir_empty_distinguishes() {
        let tmp = tempfile::tempdir().unwrap();
        let empty = tmp.path().join("empty");
        std::fs::create_dir(&empty).unwrap();
        write(&tmp.path().join("full/file.txt"), "x");

        let filesystem = LocalFilesystem::new();
        assert!(filesystem.is_dir_empty(&empty).unwrap());
        assert!(!filesystem.is_dir_empty(&tmp.path().join("full")).unwrap());
    }

    #[test]
    fn files_under_lists_only_files() {
        let tmp = tempfile::tempdir().unwrap();
        write(&tmp.path().join("a.txt"), "x");
        write(&tmp.path().join("sub/b.txt"), "y");

        let files = LocalFilesystem::new().files_under(tmp.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.is_file()));
    }

    #[test]
    fn entries_in_lists_direct_children() {
        let tmp = tempfile::tempdir().unwrap();
        write(&tmp.path().join("a.txt"), "x");
        write(&tmp.path().join("sub/b.txt"), "y");

        let entries = LocalFilesystem::new().entries_in(tmp.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains(&tmp.path().join("a.txt")));
        assert!(entries.contains(&tmp.path().join("sub")));
    }

    #[test]
    fn read_to_string_rejects_non_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("binary.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

        assert!(LocalFilesystem::new().read_to_string(&path).is_err());
    }

    #[test]
    fn rename_moves_within_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("mytheme.breakpoints.yml");
        write(&from, "x");
        let to = tmp.path().join("my_theme.breakpoints.yml");

        LocalFilesystem::new().rename(&from, &to).unwrap();
        assert!(!from.exists());
        assert!(to.is_file());
    }
}
