// Recipe endpoints

use reqwest::{Method, Url};
use std::sync::Arc;

use super::{endpoint, fetch, fetch_with_body};
use crate::error::Result;
use crate::http::AuthenticatedClient;
use crate::models::Recipe;

pub struct RecipesApi {
    http: Arc<AuthenticatedClient>,
    base: Url,
}

impl RecipesApi {
    pub(crate) fn new(http: Arc<AuthenticatedClient>, base: Url) -> Self {
        Self { http, base }
    }

    pub async fn list(&self) -> Result<Vec<Recipe>> {
        fetch(&self.http, Method::GET, endpoint(&self.base, "recipes")?).await
    }

    pub async fn add(&self, recipe: &Recipe) -> Result<Recipe> {
        fetch_with_body(
            &self.http,
            Method::POST,
            endpoint(&self.base, "recipes")?,
            recipe,
        )
        .await
    }

    pub async fn update(&self, recipe: &Recipe) -> Result<Recipe> {
        fetch_with_body(
            &self.http,
            Method::PUT,
            endpoint(&self.base, "recipes")?,
            recipe,
        )
        .await
    }

    pub async fn count(&self) -> Result<i64> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, "recipes/length")?,
        )
        .await
    }

    pub async fn range(&self, from: i64, to: i64) -> Result<Vec<Recipe>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("recipes/from/{from}/to/{to}"))?,
        )
        .await
    }

    /// The backend answers the by-id lookup with a single-element list
    pub async fn get(&self, id: i64) -> Result<Vec<Recipe>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("recipes/{id}"))?,
        )
        .await
    }

    pub async fn by_category(&self, category: &str) -> Result<Vec<Recipe>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("recipes/type/{category}"))?,
        )
        .await
    }

    pub async fn categories(&self) -> Result<Vec<String>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, "recipes/getTypes")?,
        )
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<Recipe> {
        fetch(
            &self.http,
            Method::DELETE,
            endpoint(&self.base, &format!("recipes/{id}"))?,
        )
        .await
    }
}
