// Typed client surfaces over the kitchen inventory REST API
// Thin endpoint mappings; all transport concerns live in crate::http

mod client;
mod ingredients;
mod item_types;
mod items;
mod recipes;
mod storage;
mod users;

pub use client::LarderClient;
pub use ingredients::IngredientsApi;
pub use item_types::ItemTypesApi;
pub use items::ItemsApi;
pub use recipes::RecipesApi;
pub use storage::StorageApi;
pub use users::UsersApi;

use reqwest::{Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Result};
use crate::http::AuthenticatedClient;
use crate::models::ErrorMessage;

/// Resolve an endpoint path against the API base URL
pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url> {
    base.join(path)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("invalid endpoint path {path:?}: {e}")))
}

/// GET-style call with a JSON response
pub(crate) async fn fetch<T: DeserializeOwned>(
    http: &AuthenticatedClient,
    method: Method,
    url: Url,
) -> Result<T> {
    let request = http.request(method, url).build()?;
    decode(http.execute(request).await?).await
}

/// Body-carrying call with a JSON response
pub(crate) async fn fetch_with_body<T, B>(
    http: &AuthenticatedClient,
    method: Method,
    url: Url,
    body: &B,
) -> Result<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let request = http.request(method, url).json(body).build()?;
    decode(http.execute(request).await?).await
}

/// Body-carrying call where only success matters
pub(crate) async fn send_with_body<B>(
    http: &AuthenticatedClient,
    method: Method,
    url: Url,
    body: &B,
) -> Result<()>
where
    B: Serialize + ?Sized,
{
    let request = http.request(method, url).json(body).build()?;
    let response = http.execute(request).await?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(error_from(status, response.text().await.unwrap_or_default()))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    Err(error_from(status, response.text().await.unwrap_or_default()))
}

fn error_from(status: StatusCode, body: String) -> ApiError {
    // The backend wraps errors as {"message": "..."}; fall back to the raw body
    let message = serde_json::from_str::<ErrorMessage>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    ApiError::Api {
        status: status.as_u16(),
        message,
    }
}
