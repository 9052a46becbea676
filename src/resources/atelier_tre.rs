//! Ateliers TRE: job-search workshops and candidate participation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::types::Page;
use crate::state::list::{HasId, ListQuery};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtelierTre {
    pub id: i64,
    pub type_atelier: String,
    pub type_atelier_display: Option<String>,
    pub date: Option<String>,
    pub remarque: Option<String>,
    pub nb_participants_prevus: Option<i64>,
    pub nb_participants_presents: Option<i64>,
    pub participations: Vec<Participation>,
}

impl HasId for AtelierTre {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participation {
    pub id: i64,
    pub candidat: i64,
    pub candidat_nom: String,
    pub present: bool,
    pub commentaire_individuel: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AtelierTrePayload {
    pub type_atelier: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarque: Option<String>,
}

/// Enroll (or update) one candidate's participation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParticipationPayload {
    pub candidat: i64,
    pub ateliertre: i64,
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentaire_individuel: Option<String>,
}

fn detail_path(id: i64) -> String {
    format!("/ateliers-tre/{id}/")
}

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<Page<AtelierTre>, ApiError> {
    super::list(api, "/ateliers-tre/", query).await
}

pub async fn get(api: &ApiClient, id: i64) -> Result<AtelierTre, ApiError> {
    super::detail(api, &detail_path(id)).await
}

pub async fn create(api: &ApiClient, payload: &AtelierTrePayload) -> Result<AtelierTre, ApiError> {
    super::create(api, "/ateliers-tre/", payload).await
}

pub async fn update(api: &ApiClient, id: i64, payload: &AtelierTrePayload) -> Result<AtelierTre, ApiError> {
    super::update(api, &detail_path(id), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    super::remove(api, &detail_path(id)).await
}

pub async fn add_participation(api: &ApiClient, payload: &ParticipationPayload) -> Result<Participation, ApiError> {
    super::create(api, "/participations-ateliers-tre/", payload).await
}

/// Workshop-type choices from `/ateliers-tre/meta/`.
pub async fn meta(api: &ApiClient) -> Result<Value, ApiError> {
    super::meta(api, "/ateliers-tre/meta/").await
}
