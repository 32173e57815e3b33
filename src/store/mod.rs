// Credential storage
// Small secure key-value stores for the session object

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Key under which the serialized session is persisted.
/// One canonical session object; no separate token/email/password entries.
pub const SESSION_KEY: &str = "session";

/// Errors from the credential store backends
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Abstract secure key-value store for small credential material
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key has never been set
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write or overwrite a value
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a value; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
