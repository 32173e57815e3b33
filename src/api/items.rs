// Item catalog endpoints

use reqwest::{Method, Url};
use std::sync::Arc;

use super::{endpoint, fetch, fetch_with_body};
use crate::error::Result;
use crate::http::AuthenticatedClient;
use crate::models::Item;

pub struct ItemsApi {
    http: Arc<AuthenticatedClient>,
    base: Url,
}

impl ItemsApi {
    pub(crate) fn new(http: Arc<AuthenticatedClient>, base: Url) -> Self {
        Self { http, base }
    }

    pub async fn list(&self) -> Result<Vec<Item>> {
        fetch(&self.http, Method::GET, endpoint(&self.base, "items")?).await
    }

    pub async fn add(&self, item: &Item) -> Result<Item> {
        fetch_with_body(&self.http, Method::POST, endpoint(&self.base, "items")?, item).await
    }

    pub async fn update(&self, item: &Item) -> Result<Item> {
        fetch_with_body(&self.http, Method::PUT, endpoint(&self.base, "items")?, item).await
    }

    pub async fn count(&self) -> Result<i64> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, "items/length")?,
        )
        .await
    }

    pub async fn range(&self, from: i64, to: i64) -> Result<Vec<Item>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("items/from/{from}/to/{to}"))?,
        )
        .await
    }

    pub async fn by_type(&self, type_id: i64) -> Result<Vec<Item>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("items/typeid/{type_id}"))?,
        )
        .await
    }

    pub async fn search(&self, word: &str) -> Result<Vec<Item>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("items/search/{word}"))?,
        )
        .await
    }

    pub async fn by_type_and_search(&self, type_id: i64, word: &str) -> Result<Vec<Item>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("items/typeid/{type_id}/search/{word}"))?,
        )
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<Item> {
        fetch(
            &self.http,
            Method::DELETE,
            endpoint(&self.base, &format!("items/{id}"))?,
        )
        .await
    }
}
