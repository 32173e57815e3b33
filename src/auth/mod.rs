// Authentication module
// Owns the persisted session and the refresh critical section

mod provider;
mod types;

pub use provider::TokenProvider;
pub use types::{CachedToken, LoginRequest, Session};
