//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use davinci_core::{
    application::{ApplicationError, ports::Filesystem},
    error::DaVinciResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, creating parent directories implicitly (testing
    /// helper).
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.into());
    }

    /// Insert an empty directory (testing helper).
    pub fn insert_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Read a file's content (testing helper).
    pub fn file_content(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir_empty(&self, path: &Path) -> DaVinciResult<bool> {
        let inner = self.inner.read().unwrap();
        let occupied = inner.files.keys().any(|p| p.starts_with(path) && p != path)
            || inner
                .directories
                .iter()
                .any(|p| p.starts_with(path) && p != path);
        Ok(!occupied)
    }

    fn mirror(&self, src: &Path, dst: &Path) -> DaVinciResult<()> {
        let mut inner = self.inner.write().unwrap();
        if !inner.directories.contains(src) && !inner.files.keys().any(|p| p.starts_with(src)) {
            return Err(ApplicationError::Filesystem {
                path: src.to_path_buf(),
                reason: "source does not exist".into(),
            }
            .into());
        }

        let copied_files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(path, content)| {
                path.strip_prefix(src)
                    .ok()
                    .map(|rel| (dst.join(rel), content.clone()))
            })
            .collect();
        let copied_dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|path| path.strip_prefix(src).ok().map(|rel| dst.join(rel)))
            .collect();

        let mut current = PathBuf::new();
        for component in dst.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        inner.directories.extend(copied_dirs);
        inner.files.extend(copied_files);
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> DaVinciResult<String> {
        let inner = self.inner.read().unwrap();
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::UnreadableFile {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> DaVinciResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> DaVinciResult<()> {
        let mut inner = self.inner.write().unwrap();
        match inner.files.remove(from) {
            Some(content) => {
                inner.files.insert(to.to_path_buf(), content);
                Ok(())
            }
            None => Err(ApplicationError::Filesystem {
                path: from.to_path_buf(),
                reason: "no such file".into(),
            }
            .into()),
        }
    }

    fn files_under(&self, dir: &Path) -> DaVinciResult<Vec<PathBuf>> {
        let inner = self.inner.read().unwrap();
        Ok(inner
            .files
            .keys()
            .filter(|p| p.starts_with(dir))
            .cloned()
            .collect())
    }

    fn entries_in(&self, dir: &Path) -> DaVinciResult<Vec<PathBuf>> {
        let inner = self.inner.read().unwrap();
        let mut entries: BTreeSet<PathBuf> = BTreeSet::new();
        for path in inner.files.keys().chain(inner.directories.iter()) {
            if let Ok(rel) = path.strip_prefix(dir) {
                if let Some(first) = rel.components().next() {
                    entries.insert(dir.join(first));
                }
            }
        }
        Ok(entries.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_read_back() {
        let filesystem = MemoryFilesystem::new();
        filesystem.insert_file("/a/b/file.txt", "content");
        assert!(filesystem.exists(Path::new("/a/b/file.txt")));
        assert!(filesystem.exists(Path::new("/a/b")));
        assert_eq!(
            filesystem.file_content(Path::new("/a/b/file.txt")).as_deref(),
            Some("content")
        );
    }

    #[test]
    fn empty_dir_reports_empty() {
        let filesystem = MemoryFilesystem::new();
        filesystem.insert_dir("/empty");
        assert!(filesystem.is_dir_empty(Path::new("/empty")).unwrap());
        filesystem.insert_file("/empty/x", "y");
        assert!(!filesystem.is_dir_empty(Path::new("/empty")).unwrap());
    }

    #[test]
    fn mirror_copies_files_and_dirs() {
        let filesystem = MemoryFilesystem::new();
        filesystem.insert_file("/src/a.txt", "1");
        filesystem.insert_file("/src/sub/b.txt", "2");

        filesystem.mirror(Path::new("/src"), Path::new("/dst")).unwrap();
        assert_eq!(
            filesystem.file_content(Path::new("/dst/a.txt")).as_deref(),
            Some("1")
        );
        assert_eq!(
            filesystem.file_content(Path::new("/dst/sub/b.txt")).as_deref(),
            Some("2")
        );
    }

    #[test]
    fn entries_in_returns_direct_children_once() {
        let filesystem = MemoryFilesystem::new();
        filesystem.insert_file("/d/one.txt", "1");
        filesystem.insert_file("/d/sub/two.txt", "2");
        filesystem.insert_file("/d/sub/three.txt", "3");

        let entries = filesystem.entries_in(Path::new("/d")).unwrap();
        assert_eq!(
            entries,
            vec![PathBuf::from("/d/one.txt"), PathBuf::from("/d/sub")]
        );
    }

    #[test]
    fn rename_replaces_key() {
        let filesystem = MemoryFilesystem::new();
        filesystem.insert_file("/d/mytheme.js", "x");
        filesystem
            .rename(Path::new("/d/mytheme.js"), Path::new("/d/my_theme.js"))
            .unwrap();
        assert!(!filesystem.exists(Path::new("/d/mytheme.js")));
        assert!(filesystem.exists(Path::new("/d/my_theme.js")));
    }
}
