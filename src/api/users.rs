// User account endpoints

use reqwest::{Method, Url};
use std::sync::Arc;

use super::{endpoint, fetch, fetch_with_body, send_with_body};
use crate::error::Result;
use crate::http::AuthenticatedClient;
use crate::models::User;

pub struct UsersApi {
    http: Arc<AuthenticatedClient>,
    base: Url,
}

impl UsersApi {
    pub(crate) fn new(http: Arc<AuthenticatedClient>, base: Url) -> Self {
        Self { http, base }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        fetch(&self.http, Method::GET, endpoint(&self.base, "users")?).await
    }

    pub async fn get(&self, id: i64) -> Result<User> {
        fetch(
            &self.http,
            Method::GET,
            endpoint(&self.base, &format!("users/{id}"))?,
        )
        .await
    }

    pub async fn register(&self, user: &User) -> Result<User> {
        fetch_with_body(
            &self.http,
            Method::POST,
            endpoint(&self.base, "users/register")?,
            user,
        )
        .await
    }

    /// The backend uses PUT for login; the response carries the bearer token
    pub async fn login(&self, user: &User) -> Result<User> {
        fetch_with_body(
            &self.http,
            Method::PUT,
            endpoint(&self.base, "users/login")?,
            user,
        )
        .await
    }

    pub async fn logout(&self, user: &User) -> Result<()> {
        send_with_body(
            &self.http,
            Method::PUT,
            endpoint(&self.base, "users/logout")?,
            user,
        )
        .await
    }
}
