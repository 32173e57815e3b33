// File-backed credential store
// One JSON map per file, replaced atomically via temp-file + rename

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::Mutex;

use super::{CredentialStore, StoreError};

/// Credential store persisted as a JSON object at a fixed path.
/// Writes go through a temp file in the same directory followed by a rename,
/// so readers never observe a partially written file.
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    async fn load_map(&self) -> Result<HashMap<String, String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_map(&self, map: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path.with_extension("tmp");
        let raw = serde_json::to_string_pretty(map)?;
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let map = self.load_map().await?;
        Ok(map.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.save_map(&map).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load_map().await?;
        if map.remove(key).is_some() {
            self.save_map(&map).await?;
        }
        Ok(())
    }
}
