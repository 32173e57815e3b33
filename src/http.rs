// Authenticated HTTP client
// Attaches the bearer token and recovers from expiry with a single replay

use anyhow::{Context, Result};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, Request, RequestBuilder, Response, StatusCode, Url};
use std::sync::Arc;
use std::time::Duration;

use crate::auth::TokenProvider;
use crate::error::ApiError;

/// HTTP client that injects authentication and handles token expiry.
///
/// Every outgoing request gets the current bearer token. A 401 response
/// triggers one coordinated refresh through the token provider, after which
/// the buffered request is replayed once with the new token. A second 401,
/// or a failed refresh, is surfaced to the caller unchanged.
pub struct AuthenticatedClient {
    /// Shared HTTP client with connection pooling
    client: Client,

    /// Token provider; requests pass through untouched when absent
    tokens: Option<Arc<TokenProvider>>,
}

impl AuthenticatedClient {
    pub fn new(
        tokens: Arc<TokenProvider>,
        connect_timeout: u64,
        request_timeout: u64,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(connect_timeout, request_timeout)?,
            tokens: Some(tokens),
        })
    }

    /// Client with no token provider wired in. Requests are dispatched
    /// without credentials and 401s are returned as-is.
    pub fn without_auth(connect_timeout: u64, request_timeout: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(connect_timeout, request_timeout)?,
            tokens: None,
        })
    }

    /// Start building a request against the pooled client
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Dispatch a request with bearer injection and the single 401 replay.
    /// Transport errors propagate unchanged; they are not retried here.
    pub async fn execute(&self, mut request: Request) -> Result<Response, ApiError> {
        let Some(tokens) = self.tokens.as_ref() else {
            tracing::debug!(url = %request.url(), "no token provider; passing request through");
            return Ok(self.client.execute(request).await?);
        };

        let token = tokens.get_token().await;
        if !token.is_empty() {
            apply_token(&mut request, &token);
        }

        // Bodies built from buffered bytes clone; streaming bodies cannot be
        // replayed and give None
        let retry = request.try_clone();

        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(method = %method, url = %url, "sending request");

        let response = self.client.execute(request).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        tracing::debug!(url = %url, "received 401, attempting token refresh");

        let Some(mut retry) = retry else {
            tracing::warn!(url = %url, "401 on a non-replayable request body, surfacing as-is");
            return Ok(response);
        };

        if !tokens.refresh_token().await {
            tracing::warn!(url = %url, "token refresh failed, surfacing original 401");
            return Ok(response);
        }

        let token = tokens.get_token().await;
        if !token.is_empty() {
            apply_token(&mut retry, &token);
        }

        tracing::debug!(method = %method, url = %url, "replaying request with refreshed token");

        // Whatever the retry returns is the canonical result; a second 401
        // means the refreshed token is no good either
        Ok(self.client.execute(retry).await?)
    }
}

fn build_client(connect_timeout: u64, request_timeout: u64) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(connect_timeout))
        .timeout(Duration::from_secs(request_timeout))
        .build()
        .context("Failed to create HTTP client")
}

fn apply_token(request: &mut Request, token: &str) {
    match HeaderValue::from_str(&format!("Bearer {token}")) {
        Ok(value) => {
            request.headers_mut().insert(AUTHORIZATION, value);
        }
        Err(e) => {
            tracing::warn!(error = %e, "token is not a valid header value, sending without it");
        }
    }
}
