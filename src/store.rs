//! Persisted preference store capability.
//!
//! The controller never touches storage directly; it goes through the
//! [`PreferenceStore`] trait so hosts can supply whatever persistence
//! they have and tests can substitute [`MemoryStore`].
//!
//! Two implementations ship with the crate:
//!
//! - [`MemoryStore`]: in-memory map, nothing survives the process
//! - [`FileStore`]: a JSON object in a single file

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// The key under which the theme preference is persisted.
pub const PREFERENCE_KEY: &str = "theme";

/// Error from a preference store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference store I/O failed")]
    Io(#[from] std::io::Error),
    #[error("preference store serialization failed")]
    Serialize(#[source] serde_json::Error),
}

/// String key-value store for user preferences.
///
/// Reads distinguish "absent" from failure; callers that only need a
/// defaulted value can flatten both to the default.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral hosts.
///
/// # Example
///
/// ```rust
/// use duotone::{MemoryStore, PreferenceStore, PREFERENCE_KEY};
///
/// let mut store = MemoryStore::new();
/// assert_eq!(store.get(PREFERENCE_KEY).unwrap(), None);
/// store.set(PREFERENCE_KEY, "dark").unwrap();
/// assert_eq!(store.get(PREFERENCE_KEY).unwrap().as_deref(), Some("dark"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store holding a flat JSON object of string entries.
///
/// The file is read leniently: a missing, unreadable, or malformed file
/// behaves as an empty store, so first runs and corrupted files never
/// error. Writes rewrite the whole object; with single-key workloads
/// that is one small pretty-printed file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not created until the first [`PreferenceStore::set`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&entries).map_err(StoreError::Serialize)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_absent_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get(PREFERENCE_KEY).unwrap(), None);
    }

    #[test]
    fn test_memory_store_set_then_get() {
        let mut store = MemoryStore::new();
        store.set(PREFERENCE_KEY, "system").unwrap();
        assert_eq!(
            store.get(PREFERENCE_KEY).unwrap().as_deref(),
            Some("system")
        );
    }

    #[test]
    fn test_memory_store_overwrite() {
        let mut store = MemoryStore::with_entry(PREFERENCE_KEY, "light");
        store.set(PREFERENCE_KEY, "dark").unwrap();
        assert_eq!(store.get(PREFERENCE_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_missing_file_reads_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.get(PREFERENCE_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = FileStore::new(&path);
        store.set(PREFERENCE_KEY, "dark").unwrap();
        drop(store);

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get(PREFERENCE_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_file_store_corrupt_file_reads_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get(PREFERENCE_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = FileStore::new(&path);
        store.set("locale", "en").unwrap();
        store.set(PREFERENCE_KEY, "system").unwrap();

        assert_eq!(store.get("locale").unwrap().as_deref(), Some("en"));
        assert_eq!(
            store.get(PREFERENCE_KEY).unwrap().as_deref(),
            Some("system")
        );
    }

    #[test]
    fn test_file_store_set_into_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("no/such/dir/prefs.json"));
        assert!(matches!(
            store.set(PREFERENCE_KEY, "dark"),
            Err(StoreError::Io(_))
        ));
    }
}
