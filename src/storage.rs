//! Durable key/value storage for preferences.
//!
//! Values are opaque strings (usually JSON). `FileStorage` keeps every key in
//! one flat JSON object on disk; `MemoryStorage` backs tests and sessions
//! where nothing should touch the file system.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key → string store.
pub trait Storage {
    /// Reads a key. `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a key.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile storage held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage persisted as a flat JSON object in a single file.
///
/// The file is read once on open. Every write rewrites the whole file using
/// temp file + rename so a crash never leaves a half-written store.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens (or lazily creates) the store at `path`.
    ///
    /// A missing or malformed file opens as an empty store; the file is
    /// only created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Ignoring unreadable storage file {}: {e:#}", path.display());
                BTreeMap::new()
            }
        };

        debug!("Opened storage {} with {} keys", path.display(), entries.len());
        Self { path, entries }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read storage file: {}", path.display()))?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .context(format!("Failed to parse storage file: {}", path.display()))
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create storage directory: {}",
                parent.display()
            ))?;
        }

        let content =
            serde_json::to_string_pretty(&self.entries).context("Failed to serialize storage")?;
        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp storage file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp storage file to: {}",
            self.path.display()
        ))?;

        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Roll back so memory mirrors what is on disk
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_basic() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("darkMode").unwrap(), None);

        storage.set("darkMode", "true").unwrap();
        assert_eq!(storage.get("darkMode").unwrap().as_deref(), Some("true"));

        storage.set("darkMode", "false").unwrap();
        assert_eq!(storage.get("darkMode").unwrap().as_deref(), Some("false"));
        assert!(!storage.is_empty());
    }

    #[test]
    fn test_file_storage_persists_between_opens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("storage.json");

        let mut storage = FileStorage::open(&path);
        storage.set("layoutMode", "custom").unwrap();
        assert!(path.exists());

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("layoutMode").unwrap().as_deref(), Some("custom"));
    }

    #[test]
    fn test_file_storage_malformed_file_opens_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "{ not json").unwrap();

        let mut storage = FileStorage::open(&path);
        assert_eq!(storage.get("darkMode").unwrap(), None);

        // First write replaces the broken file
        storage.set("darkMode", "false").unwrap();
        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("darkMode").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_file_storage_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");

        let mut storage = FileStorage::open(&path);
        storage.set("darkMode", "true").unwrap();

        assert!(!path.with_extension("json.tmp").exists());
    }
}
