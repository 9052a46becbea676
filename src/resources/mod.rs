//! Typed endpoint wrappers, one module per backend resource.
//!
//! Every module follows the same shape: a read model, payload types where
//! the backend expects a fixed set of fields, and free functions taking the
//! [`ApiClient`] first (`list`, `get`, `create`, `update`, `delete`, plus
//! whatever extra operations the resource exposes).

pub mod appairage;
pub mod atelier_tre;
pub mod candidat;
pub mod choices;
pub mod commentaire;
pub mod document;
pub mod formation;
pub mod partenaire;
pub mod prospection;
pub mod search;
pub mod user;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::net::api::{ApiClient, normalize_detail, normalize_page};
use crate::net::types::Page;
use crate::state::list::ListQuery;

pub(crate) async fn list<T: DeserializeOwned>(
    api: &ApiClient,
    path: &str,
    query: &ListQuery,
) -> Result<Page<T>, ApiError> {
    let body = api.get_with(path, &query.to_params()).await?;
    normalize_page(body)
}

pub(crate) async fn detail<T: DeserializeOwned>(api: &ApiClient, path: &str) -> Result<T, ApiError> {
    normalize_detail(api.get(path).await?)
}

pub(crate) async fn create<T, P>(api: &ApiClient, path: &str, payload: &P) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    P: Serialize + ?Sized,
{
    let body = to_body(payload)?;
    normalize_detail(api.post(path, body).await?)
}

pub(crate) async fn update<T, P>(api: &ApiClient, path: &str, payload: &P) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    P: Serialize + ?Sized,
{
    let body = to_body(payload)?;
    normalize_detail(api.put(path, body).await?)
}

pub(crate) async fn remove(api: &ApiClient, path: &str) -> Result<(), ApiError> {
    api.delete(path).await.map(|_| ())
}

/// Raw body of a `meta`/`choices` endpoint; shapes differ per resource, so
/// callers pick out what they need.
pub(crate) async fn meta(api: &ApiClient, path: &str) -> Result<Value, ApiError> {
    normalize_detail(api.get(path).await?)
}

fn to_body<P: Serialize + ?Sized>(payload: &P) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|error| ApiError::Envelope(error.to_string()))
}
