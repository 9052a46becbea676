//! Documents: files attached to formations. Create and update are multipart
//! because they carry the file bytes.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::types::Page;
use crate::state::list::{HasId, ListQuery};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub id: i64,
    pub nom_fichier: String,
    pub fichier: Option<String>,
    pub type_document: String,
    pub type_document_display: Option<String>,
    pub taille_fichier: Option<i64>,
    pub taille_readable: Option<String>,
    pub mime_type: Option<String>,
    pub extension: Option<String>,
    pub download_url: Option<String>,
    pub formation: Option<i64>,
    pub formation_nom: Option<String>,
    pub formation_num_offre: Option<String>,
    pub created_at: Option<String>,
    pub created_by: Option<String>,
}

impl HasId for Document {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Metadata sent alongside the file bytes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocumentPayload {
    pub nom_fichier: String,
    pub type_document: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation: Option<i64>,
}

fn detail_path(id: i64) -> String {
    format!("/documents/{id}/")
}

fn upload_form(payload: &DocumentPayload, file_name: &str, bytes: Vec<u8>) -> reqwest::multipart::Form {
    let mut form = reqwest::multipart::Form::new()
        .text("nom_fichier", payload.nom_fichier.clone())
        .text("type_document", payload.type_document.clone());
    if let Some(formation) = payload.formation {
        form = form.text("formation", formation.to_string());
    }
    form.part(
        "fichier",
        reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_owned()),
    )
}

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<Page<Document>, ApiError> {
    super::list(api, "/documents/", query).await
}

pub async fn get(api: &ApiClient, id: i64) -> Result<Document, ApiError> {
    super::detail(api, &detail_path(id)).await
}

/// Upload a new document.
pub async fn create(
    api: &ApiClient,
    payload: &DocumentPayload,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<Document, ApiError> {
    let body = api.post_multipart("/documents/", upload_form(payload, file_name, bytes)).await?;
    crate::net::api::normalize_detail(body)
}

/// Replace a document's metadata and bytes.
pub async fn update(
    api: &ApiClient,
    id: i64,
    payload: &DocumentPayload,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<Document, ApiError> {
    let body = api.put_multipart(&detail_path(id), upload_form(payload, file_name, bytes)).await?;
    crate::net::api::normalize_detail(body)
}

pub async fn delete(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    super::remove(api, &detail_path(id)).await
}

/// Document-type choices from `/documents/meta/`.
pub async fn meta(api: &ApiClient) -> Result<Value, ApiError> {
    super::meta(api, "/documents/meta/").await
}
