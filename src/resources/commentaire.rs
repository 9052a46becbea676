//! Commentaires: feedback entries attached to formations.
//!
//! The commentaires endpoints wrap each list row in its own
//! `{success, message, data}` envelope on top of the page envelope, so list
//! reads unwrap twice.

#[cfg(test)]
#[path = "commentaire_test.rs"]
mod commentaire_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::export::Exportable;
use crate::net::api::{ApiClient, normalize_detail};
use crate::net::types::Page;
use crate::state::list::{HasId, ListQuery};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commentaire {
    pub id: i64,
    pub formation_id: i64,
    pub formation_nom: String,
    pub num_offre: Option<String>,
    pub centre_nom: Option<String>,
    pub statut: Option<String>,
    pub type_offre: Option<String>,
    pub contenu: String,
    pub auteur: String,
    pub date: Option<String>,
    pub heure: Option<String>,
    pub saturation: Option<f64>,
    pub saturation_formation: Option<f64>,
    pub is_edited: Option<bool>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl HasId for Commentaire {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Exportable for Commentaire {
    fn export_date(&self) -> Option<String> {
        self.date.clone().filter(|date| !date.is_empty())
    }

    fn export_row(&self) -> Vec<String> {
        vec![
            self.formation_nom.clone(),
            self.centre_nom.clone().unwrap_or_default(),
            self.auteur.clone(),
            self.contenu.clone(),
            self.saturation.map_or_else(String::new, |s| format!("{s}%")),
        ]
    }
}

/// Header row matching [`Commentaire::export_row`].
pub const EXPORT_HEADERS: [&str; 5] = ["Formation", "Centre", "Auteur", "Contenu", "Saturation"];

/// Fields accepted on create/update.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommentairePayload {
    pub formation: i64,
    pub contenu: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
}

fn detail_path(id: i64) -> String {
    format!("/commentaires/{id}/")
}

/// Unwrap the per-item envelopes of a commentaires page.
pub(crate) fn normalize_list(raw: Page<Value>) -> Result<Page<Commentaire>, ApiError> {
    let total = raw.total;
    let items = raw
        .items
        .into_iter()
        .map(normalize_detail::<Commentaire>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Page { items, total })
}

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<Page<Commentaire>, ApiError> {
    normalize_list(super::list(api, "/commentaires/", query).await?)
}

pub async fn get(api: &ApiClient, id: i64) -> Result<Commentaire, ApiError> {
    super::detail(api, &detail_path(id)).await
}

pub async fn create(api: &ApiClient, payload: &CommentairePayload) -> Result<Commentaire, ApiError> {
    super::create(api, "/commentaires/", payload).await
}

pub async fn update(api: &ApiClient, id: i64, payload: &CommentairePayload) -> Result<Commentaire, ApiError> {
    super::update(api, &detail_path(id), payload).await
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    super::remove(api, &detail_path(id)).await
}

/// Saturation bounds and preview defaults from `/commentaires/meta/`.
pub async fn meta(api: &ApiClient) -> Result<Value, ApiError> {
    super::meta(api, "/commentaires/meta/").await
}
