//! Users: token issue, current profile, registration, administration.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::net::api::{ApiClient, normalize_detail};
use crate::net::types::{LoginTokens, Page, User};
use crate::state::list::{HasId, ListQuery};

impl HasId for User {
    fn id(&self) -> i64 {
        self.id
    }
}

fn detail_path(id: i64) -> String {
    format!("/users/{id}/")
}

/// Exchange credentials for a token pair. Public endpoint: no bearer header
/// goes out even when a stale token is stored.
pub async fn issue_tokens(api: &ApiClient, email: &str, password: &str) -> Result<LoginTokens, ApiError> {
    let body = api
        .post("/token/", serde_json::json!({"email": email, "password": password}))
        .await?;
    normalize_detail(body)
}

/// The profile of whoever owns the bearer token.
pub async fn me(api: &ApiClient) -> Result<User, ApiError> {
    super::detail(api, "/users/me/").await
}

/// Self-service account creation (public endpoint).
#[derive(Clone, Debug, Serialize)]
pub struct RegistrationPayload {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

pub async fn register(api: &ApiClient, payload: &RegistrationPayload) -> Result<User, ApiError> {
    super::create(api, "/users/register/", payload).await
}

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<Page<User>, ApiError> {
    super::list(api, "/users/", query).await
}

pub async fn get(api: &ApiClient, id: i64) -> Result<User, ApiError> {
    super::detail(api, &detail_path(id)).await
}

pub async fn create(api: &ApiClient, payload: &Value) -> Result<User, ApiError> {
    super::create(api, "/users/", payload).await
}

pub async fn update(api: &ApiClient, id: i64, payload: &Value) -> Result<User, ApiError> {
    super::update(api, &detail_path(id), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    super::remove(api, &detail_path(id)).await
}

/// Assignable roles, from `/users/roles/`.
pub async fn roles(api: &ApiClient) -> Result<Value, ApiError> {
    super::meta(api, "/users/roles/").await
}
