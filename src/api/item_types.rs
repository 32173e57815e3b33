// Item category endpoints

use reqwest::{Method, Url};
use std::sync::Arc;

use super::{endpoint, fetch, fetch_with_body};
use crate::error::Result;
use crate::http::AuthenticatedClient;
use crate::models::ItemType;

pub struct ItemTypesApi {
    http: Arc<AuthenticatedClient>,
    base: Url,
}

impl ItemTypesApi {
    pub(crate) fn new(http: Arc<AuthenticatedClient>, base: Url) -> Self {
        Self { http, base }
    }

    pub async fn list(&self) -> Result<Vec<ItemType>> {
        fetch(&self.http, Method::GET, endpoint(&self.base, "types")?).await
    }

    pub async fn add(&self, item_type: &ItemType) -> Result<ItemType> {
        fetch_with_body(
            &self.http,
            Method::POST,
            endpoint(&self.base, "types")?,
            item_type,
        )
        .await
    }

    pub async fn update(&self, item_type: &ItemType) -> Result<ItemType> {
        fetch_with_body(
            &self.http,
            Method::PUT,
            endpoint(&self.base, "types")?,
            item_type,
        )
        .await
    }

    pub async fn count(&self) -> Result<i64> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, "types/length")?,
        )
        .await
    }

    pub async fn range(&self, from: i64, to: i64) -> Result<Vec<ItemType>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("types/from/{from}/to/{to}"))?,
        )
        .await
    }

    pub async fn search(&self, word: &str) -> Result<Vec<ItemType>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("types/search/{word}"))?,
        )
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<ItemType> {
        fetch(
            &self.http,
            Method::DELETE,
            endpoint(&self.base, &format!("types/{id}"))?,
        )
        .await
    }
}
