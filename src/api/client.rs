// Aggregate client
// Wires the token provider, the authenticated transport and the typed surfaces

use anyhow::Result as AnyResult;
use reqwest::Url;
use std::sync::Arc;

use super::{
    IngredientsApi, ItemTypesApi, ItemsApi, RecipesApi, StorageApi, UsersApi,
};
use crate::auth::{Session, TokenProvider};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::http::AuthenticatedClient;
use crate::models::User;
use crate::store::CredentialStore;

/// Entry point for talking to the Larder backend.
/// Owns one token provider and one pooled authenticated client; the typed
/// API surfaces all share them.
pub struct LarderClient {
    http: Arc<AuthenticatedClient>,
    tokens: Arc<TokenProvider>,
    base: Url,
}

impl LarderClient {
    pub fn new(config: &Config, store: Arc<dyn CredentialStore>) -> AnyResult<Self> {
        let tokens = Arc::new(TokenProvider::new(
            store,
            config.api_url.clone(),
            config.token_freshness,
        )?);
        let http = Arc::new(AuthenticatedClient::new(
            tokens.clone(),
            config.http_connect_timeout,
            config.http_request_timeout,
        )?);

        Ok(Self {
            http,
            tokens,
            base: config.api_url.clone(),
        })
    }

    pub fn tokens(&self) -> Arc<TokenProvider> {
        self.tokens.clone()
    }

    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.http.clone(), self.base.clone())
    }

    pub fn items(&self) -> ItemsApi {
        ItemsApi::new(self.http.clone(), self.base.clone())
    }

    pub fn item_types(&self) -> ItemTypesApi {
        ItemTypesApi::new(self.http.clone(), self.base.clone())
    }

    pub fn recipes(&self) -> RecipesApi {
        RecipesApi::new(self.http.clone(), self.base.clone())
    }

    pub fn ingredients(&self) -> IngredientsApi {
        IngredientsApi::new(self.http.clone(), self.base.clone())
    }

    pub fn storage(&self) -> StorageApi {
        StorageApi::new(self.http.clone(), self.base.clone())
    }

    /// Authenticate and establish a persisted session
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let payload = User {
            id: None,
            name: None,
            email: email.to_string(),
            password: Some(password.to_string()),
            role: None,
            token: None,
        };

        let user = self.users().login(&payload).await?;

        let token = user
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::Auth("login response carried no token".to_string()))?;

        let session = Session::new(user.id, email.to_string(), password.to_string(), token);
        self.tokens.store_session(&session).await?;

        tracing::info!(email = %email, "logged in");
        Ok(user)
    }

    /// Tell the backend goodbye and drop the local session either way
    pub async fn logout(&self) -> Result<()> {
        if let Some(session) = self.tokens.session().await {
            let payload = User {
                id: session.user_id,
                name: None,
                email: session.email.clone(),
                password: Some(session.password.clone()),
                role: None,
                token: Some(session.token.clone()),
            };

            if let Err(e) = self.users().logout(&payload).await {
                tracing::warn!(error = %e, "backend logout failed, clearing local session anyway");
            }
        }

        self.tokens.clear_session().await;
        Ok(())
    }

    /// The logged-in user's id, required by the pantry endpoints
    pub async fn current_user_id(&self) -> Result<i64> {
        self.tokens
            .session()
            .await
            .and_then(|s| s.user_id)
            .ok_or_else(|| ApiError::NotLoggedIn("run `larder login` first".to_string()))
    }
}
