//! Directory-backed starterkit store.
//!
//! Starterkits live as sibling directories under one root:
//!
//! ```text
//! starterkits/
//! ├── default/
//! │   ├── mytheme.info.yml     ← placeholder token marker (required)
//! │   ├── mytheme.libraries.yml
//! │   └── js/
//! │       └── mytheme.js
//! └── minimal/
//!     └── mytheme.info.yml
//! ```
//!
//! The identifier of a kit is its directory name.

use std::path::{Path, PathBuf};

use tracing::debug;

use davinci_core::{
    application::{
        ApplicationError,
        ports::{StarterkitInfo, StarterkitStore},
    },
    error::DaVinciResult,
};

/// Starterkit store rooted at a directory.
#[derive(Debug, Clone)]
pub struct DirStarterkitStore {
    root: PathBuf,
}

impl DirStarterkitStore {
    /// Create a store for the kits under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The starterkits root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StarterkitStore for DirStarterkitStore {
    fn resolve(&self, id: &str) -> DaVinciResult<PathBuf> {
        // Identifiers are bare directory names; anything path-like would
        // escape the root.
        let is_bare = !id.is_empty()
            && !id
                .chars()
                .any(|c| c == '/' || c == '\\' || c == std::path::MAIN_SEPARATOR)
            && id != "."
            && id != "..";
        let path = self.root.join(id);
        if is_bare && path.is_dir() {
            debug!(id, path = %path.display(), "resolved starterkit");
            Ok(path)
        } else {
            Err(ApplicationError::StarterkitNotFound {
                id: id.to_string(),
                root: self.root.clone(),
            }
            .into())
        }
    }

    fn list(&self) -> DaVinciResult<Vec<StarterkitInfo>> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| {
            davinci_core::error::DaVinciError::from(ApplicationError::Filesystem {
                path: self.root.clone(),
                reason: format!("Failed to read starterkits root: {e}"),
            })
        })?;

        let mut kits = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                davinci_core::error::DaVinciError::from(ApplicationError::Filesystem {
                    path: self.root.clone(),
                    reason: format!("Failed to read starterkits entry: {e}"),
                })
            })?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            if let Some(id) = path.file_name().and_then(|n| n.to_str()) {
                kits.push(StarterkitInfo {
                    id: id.to_string(),
                    path: path.clone(),
                });
            }
        }
        kits.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(kits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_kits(kits: &[&str]) -> (tempfile::TempDir, DirStarterkitStore) {
        let tmp = tempfile::tempdir().unwrap();
        for kit in kits {
            std::fs::create_dir_all(tmp.path().join(kit)).unwrap();
        }
        let store = DirStarterkitStore::new(tmp.path());
        (tmp, store)
    }

    #[test]
    fn resolves_existing_kit() {
        let (tmp, store) = store_with_kits(&["default"]);
        assert_eq!(store.resolve("default").unwrap(), tmp.path().join("default"));
    }

    #[test]
    fn missing_kit_is_an_error() {
        let (_tmp, store) = store_with_kits(&["default"]);
        assert!(store.resolve("nope").is_err());
    }

    #[test]
    fn path_like_identifiers_are_rejected() {
        let (_tmp, store) = store_with_kits(&["default"]);
        assert!(store.resolve("../default").is_err());
        assert!(store.resolve("a/b").is_err());
        assert!(store.resolve("..").is_err());
        assert!(store.resolve("").is_err());
    }

    #[test]
    fn list_is_sorted_and_skips_files() {
        let (tmp, store) = store_with_kits(&["minimal", "default"]);
        std::fs::write(tmp.path().join("README.txt"), "not a kit").unwrap();

        let kits = store.list().unwrap();
        let ids: Vec<&str> = kits.iter().map(|k| k.id.as_str()).collect();
        assert_eq!(ids, vec!["default", "minimal"]);
    }
}
