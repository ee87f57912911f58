//! On-disk key-value store: one `<key>.json` file per key in a directory.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use cardsmith_core::{
    application::{ApplicationError, ports::KeyValueStore},
    error::{CardsmithError, CardsmithResult},
};

/// Production store backed by files under a data directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash never leaves a half-written value behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> CardsmithResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| ApplicationError::StorageDirectory {
            path: root.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> CardsmithResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ApplicationError::Storage {
                key: key.into(),
                reason: "keys may only contain letters, digits, '-' and '_'".into(),
            }
            .into());
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> CardsmithResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(map_io_error(key, &path, e, "read")),
        }
    }

    fn save(&self, key: &str, value: &str) -> CardsmithResult<()> {
        let path = self.path_for(key)?;
        let tmp = self
            .root
            .join(format!(".{key}.{}.tmp", uuid::Uuid::new_v4().simple()));

        std::fs::write(&tmp, value).map_err(|e| map_io_error(key, &tmp, e, "write"))?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(map_io_error(key, &path, e, "replace"));
        }
        debug!(path = %path.display(), bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> CardsmithResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(map_io_error(key, &path, e, "remove")),
        }
    }
}

fn map_io_error(key: &str, path: &Path, e: io::Error, operation: &str) -> CardsmithError {
    ApplicationError::Storage {
        key: key.to_string(),
        reason: format!("Failed to {} {}: {}", operation, path.display(), e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        for key in ["", "../escape", "a/b", "dot.key"] {
            assert!(store.path_for(key).is_err(), "{key:?} accepted");
        }
        assert!(store.path_for("roundsStudioDataV2").is_ok());
    }

    #[test]
    fn missing_key_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.load("absent").unwrap(), None);
    }
}
