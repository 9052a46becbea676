//! Appairages: candidate/partner matchings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::types::Page;
use crate::state::list::{HasId, ListQuery};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appairage {
    pub id: i64,
    pub candidat: i64,
    pub candidat_nom: String,
    pub partenaire: i64,
    pub partenaire_nom: String,
    pub formation: Option<i64>,
    pub formation_nom: Option<String>,
    pub date_appairage: Option<String>,
    pub statut: Option<String>,
    pub statut_display: Option<String>,
    pub commentaire: Option<String>,
    pub retour_partenaire: Option<String>,
    pub date_retour: Option<String>,
    pub created_by_nom: Option<String>,
    pub historiques: Vec<HistoriqueAppairage>,
}

impl HasId for Appairage {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoriqueAppairage {
    pub id: i64,
    pub appairage: i64,
    pub date: Option<String>,
    pub statut: Option<String>,
    pub statut_display: Option<String>,
    pub commentaire: Option<String>,
    pub auteur_nom: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppairagePayload {
    pub candidat: i64,
    pub partenaire: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation: Option<i64>,
    pub statut: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentaire: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retour_partenaire: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_retour: Option<String>,
}

fn detail_path(id: i64) -> String {
    format!("/appairages/{id}/")
}

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<Page<Appairage>, ApiError> {
    super::list(api, "/appairages/", query).await
}

pub async fn get(api: &ApiClient, id: i64) -> Result<Appairage, ApiError> {
    super::detail(api, &detail_path(id)).await
}

pub async fn create(api: &ApiClient, payload: &AppairagePayload) -> Result<Appairage, ApiError> {
    super::create(api, "/appairages/", payload).await
}

pub async fn update(api: &ApiClient, id: i64, payload: &AppairagePayload) -> Result<Appairage, ApiError> {
    super::update(api, &detail_path(id), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    super::remove(api, &detail_path(id)).await
}

/// Statut choices from `/appairages/meta/`.
pub async fn meta(api: &ApiClient) -> Result<Value, ApiError> {
    super::meta(api, "/appairages/meta/").await
}
