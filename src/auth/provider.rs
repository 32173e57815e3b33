// Token provider
// Single owner of the cached token and the refresh critical section

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use reqwest::{Client, Url};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use super::types::{CachedToken, LoginRequest, Session};
use crate::models::User;
use crate::store::{CredentialStore, SESSION_KEY};

/// Provides the current bearer token and coordinates refreshes.
///
/// Exactly one refresh runs at a time. Callers that block on the refresh lock
/// while another refresh completes observe that refresh's outcome instead of
/// issuing a duplicate login.
pub struct TokenProvider {
    /// Persistent session storage
    store: Arc<dyn CredentialStore>,

    /// In-memory token copy, trusted within the freshness window
    cache: RwLock<Option<CachedToken>>,

    /// Refresh critical section, shared with the request interceptor
    refresh_lock: Mutex<()>,

    /// Bumped after every completed refresh attempt
    refresh_epoch: AtomicU64,

    /// Outcome of the most recent refresh attempt
    last_refresh_ok: AtomicBool,

    /// HTTP client for login requests
    client: Client,

    /// API base URL, trailing slash required for relative joins
    base_url: Url,

    /// Cache freshness window
    freshness: Duration,
}

impl TokenProvider {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        base_url: Url,
        freshness_secs: u64,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            store,
            cache: RwLock::new(None),
            refresh_lock: Mutex::new(()),
            refresh_epoch: AtomicU64::new(0),
            last_refresh_ok: AtomicBool::new(false),
            client,
            base_url,
            freshness: Duration::seconds(freshness_secs as i64),
        })
    }

    /// Current bearer token, or an empty string when no active session exists.
    /// Never fails; storage errors degrade to the logged-out answer.
    pub async fn get_token(&self) -> String {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_fresh(self.freshness) {
                    return cached.token.clone();
                }
            }
        }

        match self.load_session().await {
            Some(session) if session.is_active() => {
                let token = session.token.clone();
                *self.cache.write().await = Some(CachedToken::new(token.clone()));
                token
            }
            _ => String::new(),
        }
    }

    /// Re-authenticate with the stored credentials and persist the new token.
    /// Returns false on any failure, leaving the existing session untouched.
    pub async fn refresh_token(&self) -> bool {
        let observed = self.refresh_epoch.load(Ordering::Acquire);
        let _guard = self.refresh_lock.lock().await;

        // Another refresh completed while we waited for the lock; its outcome
        // answers for us, a second login would be redundant
        if self.refresh_epoch.load(Ordering::Acquire) != observed {
            return self.last_refresh_ok.load(Ordering::Acquire);
        }

        let ok = self.do_refresh().await;
        self.last_refresh_ok.store(ok, Ordering::Release);
        self.refresh_epoch.fetch_add(1, Ordering::Release);
        ok
    }

    /// Remove all persisted credential material and the cache; idempotent
    pub async fn clear_session(&self) {
        if let Err(e) = self.store.remove(SESSION_KEY).await {
            tracing::warn!(error = %e, "failed to remove persisted session");
        }
        *self.cache.write().await = None;
        tracing::debug!("session cleared");
    }

    /// Persist a freshly established session and prime the cache (login path)
    pub async fn store_session(&self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string(session).context("Failed to serialize session")?;
        self.store
            .set(SESSION_KEY, &raw)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to persist session: {e}"))?;
        *self.cache.write().await = Some(CachedToken::new(session.token.clone()));
        Ok(())
    }

    /// Current persisted session, if any
    pub async fn session(&self) -> Option<Session> {
        self.load_session().await
    }

    async fn load_session(&self) -> Option<Session> {
        let raw = match self.store.get(SESSION_KEY).await {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!(error = %e, "credential store read failed");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "stored session is not parseable");
                None
            }
        }
    }

    /// One refresh attempt. Must only run under the refresh lock.
    async fn do_refresh(&self) -> bool {
        let Some(mut session) = self.load_session().await else {
            tracing::warn!("token refresh skipped: no stored session");
            return false;
        };

        if session.email.is_empty() || session.password.is_empty() {
            tracing::warn!("token refresh skipped: stored session has no credentials");
            return false;
        }

        let url = match self.base_url.join("users/login") {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(error = %e, "could not build login URL");
                return false;
            }
        };

        let body = LoginRequest {
            email: session.email.clone(),
            password: session.password.clone(),
        };

        let response = match self.client.put(url).json(&body).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "token refresh request failed");
                return false;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                body = %body,
                "login rejected during token refresh"
            );
            return false;
        }

        let user: User = match response.json().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "failed to parse login response");
                return false;
            }
        };

        let token = match user.token {
            Some(token) if !token.is_empty() => token,
            _ => {
                tracing::warn!("login response carried no token");
                return false;
            }
        };

        session.token = token.clone();
        session.issued_at = Utc::now();
        if user.id.is_some() {
            session.user_id = user.id;
        }

        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(e) = self.store.set(SESSION_KEY, &raw).await {
                    // The refreshed token is still good; keep it in memory
                    // rather than failing the refresh over a storage error
                    tracing::warn!(error = %e, "failed to persist refreshed session");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize refreshed session");
            }
        }

        *self.cache.write().await = Some(CachedToken::new(token));
        tracing::info!("bearer token refreshed");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn refused_url() -> Url {
        // Nothing listens on the discard port; refreshes fail fast
        Url::parse("http://127.0.0.1:9/").unwrap()
    }

    async fn seeded_store(token: &str) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        let session = Session::new(
            Some(1),
            "cook@example.com".to_string(),
            "secret".to_string(),
            token.to_string(),
        );
        store
            .set(SESSION_KEY, &serde_json::to_string(&session).unwrap())
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_get_token_without_session_is_empty() {
        let store = Arc::new(MemoryStore::new());
        let provider = TokenProvider::new(store, refused_url(), 300).unwrap();
        assert_eq!(provider.get_token().await, "");
    }

    #[tokio::test]
    async fn test_fresh_cache_skips_the_store() {
        let store = seeded_store("tok-1").await;
        let provider = TokenProvider::new(store.clone(), refused_url(), 300).unwrap();

        assert_eq!(provider.get_token().await, "tok-1");
        let reads_after_first = store.read_count();

        assert_eq!(provider.get_token().await, "tok-1");
        assert_eq!(store.read_count(), reads_after_first);
    }

    #[tokio::test]
    async fn test_stale_cache_rereads_the_store() {
        let store = seeded_store("tok-1").await;
        let provider = TokenProvider::new(store.clone(), refused_url(), 300).unwrap();

        assert_eq!(provider.get_token().await, "tok-1");
        let reads_after_first = store.read_count();

        // Age the cached entry past the 5 minute window
        if let Some(cached) = provider.cache.write().await.as_mut() {
            cached.fetched_at = Utc::now() - Duration::seconds(301);
        }

        assert_eq!(provider.get_token().await, "tok-1");
        assert_eq!(store.read_count(), reads_after_first + 1);
    }

    #[tokio::test]
    async fn test_cache_trusted_just_inside_the_window() {
        let store = seeded_store("tok-1").await;
        let provider = TokenProvider::new(store.clone(), refused_url(), 300).unwrap();

        assert_eq!(provider.get_token().await, "tok-1");
        let reads_after_first = store.read_count();

        if let Some(cached) = provider.cache.write().await.as_mut() {
            cached.fetched_at = Utc::now() - Duration::seconds(299);
        }

        assert_eq!(provider.get_token().await, "tok-1");
        assert_eq!(store.read_count(), reads_after_first);
    }

    #[tokio::test]
    async fn test_refresh_without_session_fails() {
        let store = Arc::new(MemoryStore::new());
        let provider = TokenProvider::new(store, refused_url(), 300).unwrap();
        assert!(!provider.refresh_token().await);
    }

    #[tokio::test]
    async fn test_failed_refresh_leaves_session_untouched() {
        let store = seeded_store("tok-old").await;
        let provider = TokenProvider::new(store.clone(), refused_url(), 300).unwrap();

        assert!(!provider.refresh_token().await);

        let session = provider.session().await.unwrap();
        assert_eq!(session.token, "tok-old");
        assert_eq!(provider.get_token().await, "tok-old");
    }

    #[tokio::test]
    async fn test_clear_session_is_idempotent() {
        let store = seeded_store("tok-1").await;
        let provider = TokenProvider::new(store, refused_url(), 300).unwrap();

        assert_eq!(provider.get_token().await, "tok-1");

        provider.clear_session().await;
        provider.clear_session().await;

        assert_eq!(provider.get_token().await, "");
        assert!(provider.session().await.is_none());
    }

    #[tokio::test]
    async fn test_store_session_primes_the_cache() {
        let store = Arc::new(MemoryStore::new());
        let provider = TokenProvider::new(store.clone(), refused_url(), 300).unwrap();

        let session = Session::new(
            Some(2),
            "cook@example.com".to_string(),
            "secret".to_string(),
            "tok-fresh".to_string(),
        );
        provider.store_session(&session).await.unwrap();

        // Token answered from the primed cache, no store read needed
        assert_eq!(provider.get_token().await, "tok-fresh");
        assert_eq!(store.read_count(), 0);
    }
}
