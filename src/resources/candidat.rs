//! Candidats: trainees and applicants.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::types::Page;
use crate::state::list::{HasId, ListQuery};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Candidat {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    pub nom_complet: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub ville: Option<String>,
    pub code_postal: Option<String>,
    pub statut: Option<String>,
    pub formation: Option<i64>,
    pub evenement: Option<i64>,
    pub notes: Option<String>,
    pub origine_sourcing: Option<String>,
    pub date_inscription: Option<String>,
    pub date_naissance: Option<String>,
    pub entretien_done: bool,
    pub test_is_ok: bool,
    pub rqth: bool,
    pub permis_b: bool,
    pub admissible: bool,
    pub courrier_rentree: bool,
    pub type_contrat: Option<String>,
    pub disponibilite: Option<String>,
    pub date_rentree: Option<String>,
    pub resultat_placement: Option<String>,
    pub nb_appairages: Option<i64>,
    pub age: Option<i64>,
}

impl HasId for Candidat {
    fn id(&self) -> i64 {
        self.id
    }
}

fn detail_path(id: i64) -> String {
    format!("/candidats/{id}/")
}

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<Page<Candidat>, ApiError> {
    super::list(api, "/candidats/", query).await
}

pub async fn get(api: &ApiClient, id: i64) -> Result<Candidat, ApiError> {
    super::detail(api, &detail_path(id)).await
}

/// Candidat payloads are partial by design (screens submit only the fields
/// they own), so they stay raw JSON.
pub async fn create(api: &ApiClient, payload: &Value) -> Result<Candidat, ApiError> {
    super::create(api, "/candidats/", payload).await
}

pub async fn update(api: &ApiClient, id: i64, payload: &Value) -> Result<Candidat, ApiError> {
    super::update(api, &detail_path(id), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    super::remove(api, &detail_path(id)).await
}

/// Status/contract/CSP choices from `/candidats/meta/`.
pub async fn meta(api: &ApiClient) -> Result<Value, ApiError> {
    super::meta(api, "/candidats/meta/").await
}
