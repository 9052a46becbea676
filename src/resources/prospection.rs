//! Prospections: partner-outreach tracking, with status changes and an
//! audit trail.

#[cfg(test)]
#[path = "prospection_test.rs"]
mod prospection_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::types::Page;
use crate::state::list::{HasId, ListQuery};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prospection {
    pub id: i64,
    pub partenaire: i64,
    pub partenaire_nom: String,
    pub formation: Option<i64>,
    pub formation_nom: Option<String>,
    pub date_prospection: Option<String>,
    pub type_contact: Option<String>,
    pub type_contact_display: Option<String>,
    pub motif: Option<String>,
    pub motif_display: Option<String>,
    pub statut: Option<String>,
    pub statut_display: Option<String>,
    pub objectif: Option<String>,
    pub objectif_display: Option<String>,
    pub commentaire: Option<String>,
    pub prochain_contact: Option<String>,
    pub is_active: Option<bool>,
    pub relance_necessaire: Option<bool>,
    pub created_by: Option<String>,
}

impl HasId for Prospection {
    fn id(&self) -> i64 {
        self.id
    }
}

/// One status change in a prospection's history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoriqueProspection {
    pub id: i64,
    pub prospection: i64,
    pub date_modification: Option<String>,
    pub ancien_statut: Option<String>,
    pub nouveau_statut: Option<String>,
    pub commentaire: Option<String>,
    pub prochain_contact: Option<String>,
    pub modifie_par: Option<String>,
}

impl HasId for HistoriqueProspection {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProspectionPayload {
    pub partenaire: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation: Option<i64>,
    pub date_prospection: String,
    pub type_contact: String,
    pub motif: String,
    pub statut: String,
    pub objectif: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentaire: Option<String>,
}

/// Payload of the `changer-statut` action.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChangerStatutPayload {
    pub statut: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentaire: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prochain_contact: Option<String>,
}

fn detail_path(id: i64) -> String {
    format!("/prospections/{id}/")
}

fn changer_statut_path(id: i64) -> String {
    format!("/prospections/{id}/changer-statut/")
}

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<Page<Prospection>, ApiError> {
    super::list(api, "/prospections/", query).await
}

pub async fn get(api: &ApiClient, id: i64) -> Result<Prospection, ApiError> {
    super::detail(api, &detail_path(id)).await
}

pub async fn create(api: &ApiClient, payload: &ProspectionPayload) -> Result<Prospection, ApiError> {
    super::create(api, "/prospections/", payload).await
}

pub async fn update(api: &ApiClient, id: i64, payload: &ProspectionPayload) -> Result<Prospection, ApiError> {
    super::update(api, &detail_path(id), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    super::remove(api, &detail_path(id)).await
}

/// Move a prospection to a new status; the backend appends the history row.
pub async fn changer_statut(
    api: &ApiClient,
    id: i64,
    payload: &ChangerStatutPayload,
) -> Result<Prospection, ApiError> {
    super::create(api, &changer_statut_path(id), payload).await
}

/// History of one prospection.
pub async fn historiques(api: &ApiClient, id: i64, query: &ListQuery) -> Result<Page<HistoriqueProspection>, ApiError> {
    super::list(api, &format!("/prospections/{id}/historiques/"), query).await
}

/// Every history row across prospections, for the global history screen.
pub async fn all_historiques(api: &ApiClient, query: &ListQuery) -> Result<Page<HistoriqueProspection>, ApiError> {
    super::list(api, "/historiquesprospection/", query).await
}

/// Statut/motif/objectif choices from `/historiquesprospection/choices/`.
pub async fn choices(api: &ApiClient) -> Result<Value, ApiError> {
    super::meta(api, "/historiquesprospection/choices/").await
}
