//! Shared API payload types.
//!
//! Read models tolerate missing fields (`#[serde(default)]`) because the
//! backend trims serializers per endpoint; a list row and a detail body for
//! the same resource do not always carry the same keys.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Canonical paginated list shape every list endpoint normalizes into,
/// whatever envelope the backend wrapped it in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    /// Empty page.
    #[must_use]
    pub fn empty() -> Self {
        Self { items: Vec::new(), total: 0 }
    }
}

/// Token pair returned by `POST /token/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginTokens {
    pub access: String,
    pub refresh: String,
}

/// The signed-in user, as served by `GET /users/me/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub role: String,
    pub role_display: Option<String>,
    pub is_active: bool,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
    pub date_joined: Option<String>,
    pub full_name: Option<String>,
}

impl User {
    /// Display name: full name when the backend computed one, otherwise the
    /// username.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match &self.full_name {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

/// `{id, nom}` reference used for centres and other plain lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NomId {
    pub id: i64,
    pub nom: String,
}

/// `{id, nom, libelle, couleur}` reference used for statuts and type-offres.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouleurLibelle {
    pub id: i64,
    pub nom: String,
    pub libelle: String,
    pub couleur: String,
}

/// One `{value, label}` entry from a `choices`/`meta` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub value: serde_json::Value,
    pub label: String,
}
