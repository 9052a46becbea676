//! Reference lists shared by the formation screens: centres, statuts and
//! type-offres. These endpoints are tiny and unpaginated in practice, but
//! still answer in a list envelope.

use crate::error::ApiError;
use crate::net::api::{ApiClient, normalize_page};
use crate::net::types::NomId;

async fn reference_list(api: &ApiClient, path: &str) -> Result<Vec<NomId>, ApiError> {
    let body = api.get(path).await?;
    Ok(normalize_page(body)?.items)
}

pub async fn centres(api: &ApiClient) -> Result<Vec<NomId>, ApiError> {
    reference_list(api, "/centres/").await
}

pub async fn statuts(api: &ApiClient) -> Result<Vec<NomId>, ApiError> {
    reference_list(api, "/statuts/").await
}

pub async fn type_offres(api: &ApiClient) -> Result<Vec<NomId>, ApiError> {
    reference_list(api, "/typeoffres/").await
}

/// The three reference lists the formation form needs, fetched together.
pub async fn formation_choices(api: &ApiClient) -> Result<(Vec<NomId>, Vec<NomId>, Vec<NomId>), ApiError> {
    let centres = centres(api).await?;
    let statuts = statuts(api).await?;
    let type_offres = type_offres(api).await?;
    Ok((centres, statuts, type_offres))
}
