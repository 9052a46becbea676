//! Authenticated REST client.
//!
//! ARCHITECTURE
//! ============
//! Every outbound call goes through one request transform (bearer injection
//! unless the endpoint is public) and one response transform (status mapping
//! plus envelope normalization). A 401 tears the whole session down through
//! the injected [`LogoutHook`]; a 403 only surfaces, since being signed in
//! but not allowed is not a session failure. No retries: every failure
//! reaches the caller synchronously as an `Err`.
//!
//! The backend is inconsistent about envelopes (some endpoints answer
//! `{results, count}`, others `{success, message, data: {...}}`), so callers
//! never touch raw bodies: [`normalize_page`] and [`normalize_detail`] turn
//! every accepted shape into one canonical form.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::net::logout::{LogoutHook, LogoutReason};
use crate::net::token_store::TokenStore;
use crate::net::types::Page;

/// Endpoints reachable without a credential, matched by suffix so the base
/// path never matters.
const PUBLIC_ENDPOINTS: [&str; 3] = ["/token/", "/login/", "/users/register/"];

/// True when `path` needs no bearer credential.
#[must_use]
pub fn is_public_endpoint(path: &str) -> bool {
    PUBLIC_ENDPOINTS.iter().any(|endpoint| path.ends_with(endpoint))
}

/// REST client bound to one backend, one token store, and one logout hook.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
    logout: LogoutHook,
}

impl ApiClient {
    /// Build a client for `base_url` (with or without trailing slash).
    pub fn new(
        base_url: impl Into<String>,
        tokens: TokenStore,
        logout: LogoutHook,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { http, base_url, tokens, logout })
    }

    /// The token store this client authenticates from.
    #[must_use]
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the stored access token unless `path` is public. A missing
    /// token never blocks the request; the server answers 401 on its own.
    fn authorize(&self, path: &str, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if is_public_endpoint(path) {
            return request;
        }
        match self.tokens.read().access {
            Some(access) => request.bearer_auth(access),
            None => request,
        }
    }

    pub async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, path, &[], None).await
    }

    pub async fn get_with(&self, path: &str, params: &[(String, String)]) -> Result<Value, ApiError> {
        self.request(Method::GET, path, params, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.request(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.request(Method::DELETE, path, &[], None).await
    }

    /// Multipart POST for endpoints taking file uploads (documents).
    pub async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ApiError> {
        let request = self.authorize(path, self.http.post(self.url(path)).multipart(form));
        let response = request.send().await?;
        self.digest(response).await
    }

    /// Multipart PUT, the update counterpart of [`Self::post_multipart`].
    pub async fn put_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ApiError> {
        let request = self.authorize(path, self.http.put(self.url(path)).multipart(form));
        let response = request.send().await?;
        self.digest(response).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let mut request = self.http.request(method, self.url(path));
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(json) = body {
            request = request.json(&json);
        }
        let request = self.authorize(path, request);

        tracing::debug!(%path, "outbound request");
        let response = request.send().await?;
        self.digest(response).await
    }

    /// Response transform applied to every response.
    async fn digest(&self, response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!("credential rejected; ending session");
            self.tokens.clear();
            self.logout.trigger(LogoutReason::Expired);
            return Err(ApiError::Auth);
        }
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(ApiError::Forbidden);
        }
        if status.is_client_error() {
            if let Some(fields) = field_errors(&body) {
                return Err(ApiError::Validation { fields });
            }
        }
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message: server_message(&body),
            });
        }
        Ok(body)
    }
}

/// Extract DRF-style per-field messages from a 4xx body: an object whose
/// values are strings or arrays of strings, transport keys excluded.
pub(crate) fn field_errors(body: &Value) -> Option<BTreeMap<String, String>> {
    let map = body.as_object()?;
    let mut fields = BTreeMap::new();
    for (key, value) in map {
        if matches!(key.as_str(), "detail" | "message" | "success" | "code" | "status") {
            continue;
        }
        match value {
            Value::String(text) => {
                fields.insert(key.clone(), text.clone());
            }
            Value::Array(items) => {
                if let Some(first) = items.iter().find_map(Value::as_str) {
                    fields.insert(key.clone(), first.to_owned());
                }
            }
            _ => {}
        }
    }
    if fields.is_empty() { None } else { Some(fields) }
}

/// Server-provided error text, generic fallback when it gave none.
pub(crate) fn server_message(body: &Value) -> String {
    body.get("message")
        .or_else(|| body.get("detail"))
        .and_then(Value::as_str)
        .map_or_else(|| "request failed".to_owned(), ToOwned::to_owned)
}

/// Locate the results array and total inside any accepted list envelope.
pub(crate) fn page_envelope(body: Value) -> Result<(Value, u64), ApiError> {
    match body {
        Value::Array(items) => {
            let total = items.len() as u64;
            Ok((Value::Array(items), total))
        }
        Value::Object(mut map) => {
            if let Some(results) = map.remove("results") {
                let total = map
                    .get("count")
                    .and_then(Value::as_u64)
                    .unwrap_or_else(|| results.as_array().map_or(0, |items| items.len() as u64));
                Ok((results, total))
            } else if let Some(data) = map.remove("data") {
                page_envelope(data)
            } else {
                Err(ApiError::Envelope("expected a paginated list body".to_owned()))
            }
        }
        other => Err(ApiError::Envelope(format!("expected a list body, got {other}"))),
    }
}

/// Normalize any accepted list envelope into one canonical [`Page`].
pub fn normalize_page<T: DeserializeOwned>(body: Value) -> Result<Page<T>, ApiError> {
    let (results, total) = page_envelope(body)?;
    let items = serde_json::from_value(results).map_err(|error| ApiError::Envelope(error.to_string()))?;
    Ok(Page { items, total })
}

/// Unwrap a `{success, data}` envelope when present, then decode.
pub fn normalize_detail<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    let inner = match body {
        Value::Object(mut map) if map.contains_key("success") && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(inner).map_err(|error| ApiError::Envelope(error.to_string()))
}
