// Recipe ingredient endpoints

use reqwest::{Method, Url};
use std::sync::Arc;

use super::{endpoint, fetch, fetch_with_body};
use crate::error::{ApiError, Result};
use crate::http::AuthenticatedClient;
use crate::models::Ingredient;

pub struct IngredientsApi {
    http: Arc<AuthenticatedClient>,
    base: Url,
}

impl IngredientsApi {
    pub(crate) fn new(http: Arc<AuthenticatedClient>, base: Url) -> Self {
        Self { http, base }
    }

    pub async fn for_recipe(&self, recipe_id: i64) -> Result<Vec<Ingredient>> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("ingredients/{recipe_id}"))?,
        )
        .await
    }

    pub async fn add(&self, ingredient: &Ingredient) -> Result<Ingredient> {
        fetch_with_body(
            &self.http,
            Method::POST,
            endpoint(&self.base, "ingredients")?,
            ingredient,
        )
        .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let url = endpoint(&self.base, &format!("ingredients/{id}"))?;
        let request = self.http.request(Method::DELETE, url).build()?;
        let response = self.http.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(ApiError::Api {
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        })
    }
}
