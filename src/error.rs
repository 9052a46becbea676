//! Error taxonomy for the request pipeline.
//!
//! DESIGN
//! ======
//! Every failure a caller can observe is one of a small set of variants so
//! call sites branch on meaning, not on duck-typed response bodies. Form
//! screens feed `Validation` straight into their field-error maps; everything
//! else surfaces as a notification.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

/// Error returned by the API client and everything built on it.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401: the session has been torn down and the user must sign in again.
    #[error("authentication required")]
    Auth,
    /// 403: authenticated but not allowed. The session stays alive.
    #[error("access denied")]
    Forbidden,
    /// 4xx with structured per-field messages, recovered locally by forms.
    #[error("validation failed ({} field(s))", .fields.len())]
    Validation { fields: BTreeMap<String, String> },
    /// Transport-level failure (DNS, connect, TLS, body read).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The response decoded, but not into any shape this client understands.
    #[error("unexpected response shape: {0}")]
    Envelope(String),
    /// Any other non-success status, with the server message when present.
    #[error("server returned HTTP {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    /// True when the error ended the session (only 401 does).
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth)
    }

    /// Per-field messages for validation failures, `None` otherwise.
    #[must_use]
    pub fn validation_fields(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Validation { fields } => Some(fields),
            _ => None,
        }
    }

    /// Notification text for screens that only show a one-liner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth => "Session expired. Please sign in again.".to_owned(),
            Self::Forbidden => "You do not have permission to do that.".to_owned(),
            Self::Validation { fields } => match fields.iter().next() {
                Some((field, message)) => format!("{field}: {message}"),
                None => "Validation failed.".to_owned(),
            },
            Self::Network(_) => "Network error. Check your connection and retry.".to_owned(),
            Self::Envelope(_) => "The server answered in an unexpected format.".to_owned(),
            Self::Http { message, .. } => message.clone(),
        }
    }
}
