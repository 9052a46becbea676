//! Global search across every resource type.

use serde_json::Value;

use crate::error::ApiError;
use crate::net::api::{ApiClient, normalize_detail};

/// `GET /search/?q=...`; the result groups hits per resource type, so the
/// shape stays raw JSON for callers to render as they see fit.
pub async fn global(api: &ApiClient, q: &str) -> Result<Value, ApiError> {
    let params = [("q".to_owned(), q.to_owned())];
    let body = api.get_with("/search/", &params).await?;
    normalize_detail(body)
}
