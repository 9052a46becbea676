//! Partenaires: partner companies and institutions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::types::Page;
use crate::state::list::{HasId, ListQuery};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partenaire {
    pub id: i64,
    pub nom: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub type_display: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub ville: Option<String>,
    pub commentaire: Option<String>,
    pub a_prevenu: bool,
    pub is_actif: bool,
    pub nombre_appairages: Option<i64>,
    pub date_derniere_prospection: Option<String>,
}

impl HasId for Partenaire {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PartenairePayload {
    pub nom: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ville: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentaire: Option<String>,
    pub a_prevenu: bool,
    pub is_actif: bool,
}

fn detail_path(id: i64) -> String {
    format!("/partenaires/{id}/")
}

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<Page<Partenaire>, ApiError> {
    super::list(api, "/partenaires/", query).await
}

pub async fn get(api: &ApiClient, id: i64) -> Result<Partenaire, ApiError> {
    super::detail(api, &detail_path(id)).await
}

pub async fn create(api: &ApiClient, payload: &PartenairePayload) -> Result<Partenaire, ApiError> {
    super::create(api, "/partenaires/", payload).await
}

pub async fn update(api: &ApiClient, id: i64, payload: &PartenairePayload) -> Result<Partenaire, ApiError> {
    super::update(api, &detail_path(id), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    super::remove(api, &detail_path(id)).await
}

/// Partner-type choices from `/partenaires/meta/`.
pub async fn meta(api: &ApiClient) -> Result<Value, ApiError> {
    super::meta(api, "/partenaires/meta/").await
}
