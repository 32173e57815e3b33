// Stored item (pantry) endpoints

use reqwest::{Method, Url};
use std::sync::Arc;

use super::{endpoint, fetch, fetch_with_body};
use crate::error::Result;
use crate::http::AuthenticatedClient;
use crate::models::StoredItem;

pub struct StorageApi {
    http: Arc<AuthenticatedClient>,
    base: Url,
}

impl StorageApi {
    pub(crate) fn new(http: Arc<AuthenticatedClient>, base: Url) -> Self {
        Self { http, base }
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<StoredItem>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("storeditems/{user_id}"))?,
        )
        .await
    }

    pub async fn count(&self, user_id: i64) -> Result<i64> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("storage/{user_id}/length"))?,
        )
        .await
    }

    pub async fn range(&self, user_id: i64, from: i64, to: i64) -> Result<Vec<StoredItem>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("storage/{user_id}/from/{from}/to/{to}"))?,
        )
        .await
    }

    pub async fn by_type(&self, user_id: i64, type_id: i64) -> Result<Vec<StoredItem>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("storage/{user_id}/{type_id}"))?,
        )
        .await
    }

    pub async fn by_type_count(&self, user_id: i64, type_id: i64) -> Result<i64> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("storage/{user_id}/{type_id}/length"))?,
        )
        .await
    }

    pub async fn by_type_range(
        &self,
        user_id: i64,
        type_id: i64,
        from: i64,
        to: i64,
    ) -> Result<Vec<StoredItem>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(
                &self.base,
                &format!("storage/{user_id}/{type_id}/from/{from}/to/{to}"),
            )?,
        )
        .await
    }

    pub async fn search(&self, user_id: i64, word: &str) -> Result<Vec<StoredItem>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("storage/{user_id}/search/{word}"))?,
        )
        .await
    }

    pub async fn by_type_and_search(
        &self,
        user_id: i64,
        type_id: i64,
        word: &str,
    ) -> Result<Vec<StoredItem>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(
                &self.base,
                &format!("storage/{user_id}/{type_id}/search/{word}"),
            )?,
        )
        .await
    }

    pub async fn add(&self, stored: &StoredItem) -> Result<StoredItem> {
        fetch_with_body(
            &self.http,
            Method::POST,
            endpoint(&self.base, "storage")?,
            stored,
        )
        .await
    }

    /// The backend takes the row to remove in the request body
    pub async fn remove(&self, stored: &StoredItem) -> Result<StoredItem> {
        fetch_with_body(
            &self.http,
            Method::DELETE,
            endpoint(&self.base, "storage")?,
            stored,
        )
        .await
    }
}
