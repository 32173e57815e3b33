// Session and login wire types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Persisted session: the logged-in user plus the credentials needed to
/// re-authenticate when the token expires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Option<i64>,
    pub email: String,
    pub password: String,
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: Option<i64>, email: String, password: String, token: String) -> Self {
        Self {
            user_id,
            email,
            password,
            token,
            issued_at: Utc::now(),
        }
    }

    /// A session without a token is a logged-out session
    pub fn is_active(&self) -> bool {
        !self.token.is_empty()
    }
}

/// In-memory copy of the session token plus the time it was read.
/// Replaced wholesale under a write lock, never mutated field by field.
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub token: String,
    pub fetched_at: DateTime<Utc>,
}

impl CachedToken {
    pub fn new(token: String) -> Self {
        Self {
            token,
            fetched_at: Utc::now(),
        }
    }

    /// The cache is only trusted within the freshness window; past it the
    /// persistent store is re-read
    pub fn is_fresh(&self, window: Duration) -> bool {
        Utc::now() - self.fetched_at < window
    }
}

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
