//! File-backed key-value storage.
//!
//! Persists the credential map as a flat JSON object in
//! `~/.config/hearth/credentials.json`.
//!
//! Responsibilities:
//! - Load and save the JSON map via async file I/O
//! - Create the config directory on first write
//! - Restrict file permissions to the owning user on Unix
//!
//! Does NOT:
//! - Validate or inspect stored values
//! - Handle encryption (plaintext JSON storage)

use crate::paths::HearthPaths;
use hearth_core::error::{HearthError, Result};
use hearth_core::storage::KeyValueStorage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Key-value storage backed by a single JSON file.
///
/// Writes are serialized through an internal mutex so concurrent `set`
/// and `remove` calls cannot interleave their read-modify-write cycles.
/// The storage offers no guarantee beyond that single-file atomicity.
pub struct FileKeyValueStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStorage {
    /// Creates storage at the default location
    /// (`~/.config/hearth/credentials.json`).
    pub fn new() -> Result<Self> {
        let path = HearthPaths::credentials_file()
            .map_err(|e| HearthError::config(format!("Failed to resolve credentials path: {e}")))?;
        Ok(Self::with_path(path))
    }

    /// Creates storage at a custom path (for testing).
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_map(&self) -> Result<HashMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let map: HashMap<String, String> = serde_json::from_str(&content)?;
                Ok(map)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_map(&self, map: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(map)?;
        tokio::fs::write(&self.path, json).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            tokio::fs::set_permissions(&self.path, perms).await?;
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for FileKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.load_map().await?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.save_map(&map).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load_map().await?;
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.save_map(&map).await
    }
}

/// In-memory key-value storage.
///
/// Used by tests and by compositions that do not want credentials on
/// disk (the token then lives only as long as the process).
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::storage::AUTH_TOKEN_KEY;
    use serde_json::Value;
    use tempfile::TempDir;

    fn storage_in(temp_dir: &TempDir) -> FileKeyValueStorage {
        FileKeyValueStorage::with_path(temp_dir.path().join("credentials.json"))
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        storage.set(AUTH_TOKEN_KEY, "abc123").await.unwrap();
        assert_eq!(
            storage.get(AUTH_TOKEN_KEY).await.unwrap(),
            Some("abc123".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        assert_eq!(storage.get(AUTH_TOKEN_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_value_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("credentials.json");

        let storage = FileKeyValueStorage::with_path(&path);
        storage.set(AUTH_TOKEN_KEY, "abc123").await.unwrap();
        drop(storage);

        let reopened = FileKeyValueStorage::with_path(&path);
        assert_eq!(
            reopened.get(AUTH_TOKEN_KEY).await.unwrap(),
            Some("abc123".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        // Removing before the file even exists is a no-op
        storage.remove(AUTH_TOKEN_KEY).await.unwrap();

        storage.set(AUTH_TOKEN_KEY, "abc123").await.unwrap();
        storage.remove(AUTH_TOKEN_KEY).await.unwrap();
        storage.remove(AUTH_TOKEN_KEY).await.unwrap();
        assert_eq!(storage.get(AUTH_TOKEN_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_is_flat_json_object() {
        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);

        storage.set(AUTH_TOKEN_KEY, "abc123").await.unwrap();

        let raw = std::fs::read_to_string(storage.path()).unwrap();
        let parsed: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed[AUTH_TOKEN_KEY], "abc123");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_permissions_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let storage = storage_in(&temp_dir);
        storage.set(AUTH_TOKEN_KEY, "abc123").await.unwrap();

        let mode = std::fs::metadata(storage.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[tokio::test]
    async fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();

        storage.set(AUTH_TOKEN_KEY, "abc123").await.unwrap();
        assert_eq!(
            storage.get(AUTH_TOKEN_KEY).await.unwrap(),
            Some("abc123".to_string())
        );
        storage.remove(AUTH_TOKEN_KEY).await.unwrap();
        assert_eq!(storage.get(AUTH_TOKEN_KEY).await.unwrap(), None);
    }
}
