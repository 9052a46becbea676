//! Formations: the central resource, with nested collection reads.

#[cfg(test)]
#[path = "formation_test.rs"]
mod formation_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::types::{CouleurLibelle, NomId, Page};
use crate::resources::commentaire::Commentaire;
use crate::resources::document::Document;
use crate::resources::partenaire::Partenaire;
use crate::resources::prospection::Prospection;
use crate::state::list::{HasId, ListQuery};

/// A training session as served by `/formations/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Formation {
    pub id: i64,
    pub nom: String,
    pub centre: Option<NomId>,
    pub type_offre: Option<CouleurLibelle>,
    pub statut: Option<CouleurLibelle>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub num_kairos: Option<String>,
    pub num_offre: Option<String>,
    pub num_produit: Option<String>,
    pub assistante: Option<String>,
    pub convocation_envoie: Option<bool>,
    pub prevus_crif: Option<i64>,
    pub prevus_mp: Option<i64>,
    pub inscrits_crif: Option<i64>,
    pub inscrits_mp: Option<i64>,
    pub cap: Option<i64>,
    pub nombre_candidats: Option<i64>,
    pub nombre_evenements: Option<i64>,
    pub saturation: Option<f64>,
    pub taux_transformation: Option<f64>,
    pub total_places: Option<i64>,
    pub inscrits_total: Option<i64>,
    pub places_restantes: Option<i64>,
    pub a_recruter: Option<i64>,
    pub dernier_commentaire: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl HasId for Formation {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Calendar entry nested under a formation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Evenement {
    pub id: i64,
    pub formation_id: i64,
    pub formation_nom: String,
    pub type_evenement: String,
    pub type_evenement_display: String,
    pub description_autre: Option<String>,
    pub details: Option<String>,
    pub event_date: Option<String>,
    pub lieu: Option<String>,
    pub participants_prevus: Option<i64>,
    pub participants_reels: Option<i64>,
    pub status: Option<String>,
    pub status_label: Option<String>,
}

impl HasId for Evenement {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Audit-trail row for a formation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoriqueFormation {
    pub id: i64,
    pub formation_id: i64,
    pub champ_modifie: Option<String>,
    pub ancienne_valeur: Option<String>,
    pub nouvelle_valeur: Option<String>,
    pub commentaire: Option<String>,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
}

impl HasId for HistoriqueFormation {
    fn id(&self) -> i64 {
        self.id
    }
}

fn detail_path(id: i64) -> String {
    format!("/formations/{id}/")
}

fn nested_path(id: i64, collection: &str) -> String {
    format!("/formations/{id}/{collection}/")
}

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<Page<Formation>, ApiError> {
    super::list(api, "/formations/", query).await
}

pub async fn get(api: &ApiClient, id: i64) -> Result<Formation, ApiError> {
    super::detail(api, &detail_path(id)).await
}

pub async fn create(api: &ApiClient, payload: &Value) -> Result<Formation, ApiError> {
    super::create(api, "/formations/", payload).await
}

pub async fn update(api: &ApiClient, id: i64, payload: &Value) -> Result<Formation, ApiError> {
    super::update(api, &detail_path(id), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    super::remove(api, &detail_path(id)).await
}

/// Available filter values for the formations list screen.
pub async fn filtres(api: &ApiClient) -> Result<Value, ApiError> {
    super::meta(api, "/formations/filtres/").await
}

pub async fn commentaires(api: &ApiClient, id: i64, query: &ListQuery) -> Result<Page<Commentaire>, ApiError> {
    crate::resources::commentaire::normalize_list(super::list(api, &nested_path(id, "commentaires"), query).await?)
}

pub async fn documents(api: &ApiClient, id: i64, query: &ListQuery) -> Result<Page<Document>, ApiError> {
    super::list(api, &nested_path(id, "documents"), query).await
}

pub async fn evenements(api: &ApiClient, id: i64, query: &ListQuery) -> Result<Page<Evenement>, ApiError> {
    super::list(api, &nested_path(id, "evenements"), query).await
}

pub async fn prospections(api: &ApiClient, id: i64, query: &ListQuery) -> Result<Page<Prospection>, ApiError> {
    super::list(api, &nested_path(id, "prospections"), query).await
}

pub async fn partenaires(api: &ApiClient, id: i64, query: &ListQuery) -> Result<Page<Partenaire>, ApiError> {
    super::list(api, &nested_path(id, "partenaires"), query).await
}

pub async fn historique(api: &ApiClient, id: i64, query: &ListQuery) -> Result<Page<HistoriqueFormation>, ApiError> {
    super::list(api, &nested_path(id, "historique"), query).await
}
