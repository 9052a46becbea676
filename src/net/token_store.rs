//! Persistent bearer-token pair storage.
//!
//! DESIGN
//! ======
//! One JSON file, two slots (`access`, `refresh`), written synchronously so a
//! read issued right after a store sees the new values. Tokens are opaque
//! strings; no shape validation, no expiry inspection. Reads never fail: a
//! missing or corrupt file is simply an empty pair.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The two persisted token slots. A `None` slot means "absent", never "empty
/// string".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
}

impl TokenPair {
    /// True when neither slot holds a token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access.is_none() && self.refresh.is_none()
    }
}

/// File-backed token store. Cloning shares the same underlying file.
#[derive(Clone, Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store backed by the given file.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolve the default token file.
    ///
    /// Priority:
    /// 1. `$FORMA_TOKEN_FILE` if set
    /// 2. `~/.formaboard/tokens.json`
    /// 3. `./.formaboard/tokens.json` (current directory fallback)
    #[must_use]
    pub fn default_path() -> PathBuf {
        std::env::var("FORMA_TOKEN_FILE").ok().map_or_else(
            || {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".formaboard")
                    .join("tokens.json")
            },
            PathBuf::from,
        )
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Unconditionally overwrite both slots. Failures are logged, not
    /// surfaced; the next request simply runs unauthenticated.
    pub fn store(&self, access: &str, refresh: &str) {
        let pair = TokenPair {
            access: Some(access.to_owned()),
            refresh: Some(refresh.to_owned()),
        };
        if let Some(parent) = self.path.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                tracing::warn!(%error, path = %self.path.display(), "cannot create token directory");
                return;
            }
        }
        match serde_json::to_string_pretty(&pair) {
            Ok(raw) => {
                if let Err(error) = fs::write(&self.path, raw) {
                    tracing::warn!(%error, path = %self.path.display(), "cannot persist tokens");
                }
            }
            Err(error) => {
                tracing::warn!(%error, "cannot serialize token pair");
            }
        }
    }

    /// Current pair; absent slots for a missing or unreadable file.
    #[must_use]
    pub fn read(&self) -> TokenPair {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return TokenPair::default();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Remove both slots. Idempotent; a missing file is already clear.
    pub fn clear(&self) {
        if let Err(error) = fs::remove_file(&self.path) {
            if error.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(%error, path = %self.path.display(), "cannot clear tokens");
            }
        }
    }
}
