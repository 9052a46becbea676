//! Persisted user preferences.
//!
//! One string preference today: the UI theme. Same storage posture as the
//! token store: synchronous writes, reads never fail, unreadable files fall
//! back to the default.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// UI theme choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PrefsFile {
    theme: ThemeMode,
}

/// File-backed preference store.
#[derive(Clone, Debug)]
pub struct Preferences {
    path: PathBuf,
}

impl Preferences {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.formaboard/prefs.json`, next to the default token file.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".formaboard")
            .join("prefs.json")
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return ThemeMode::default();
        };
        serde_json::from_str::<PrefsFile>(&raw).map_or_else(|_| ThemeMode::default(), |prefs| prefs.theme)
    }

    pub fn set_theme(&self, theme: ThemeMode) {
        if let Some(parent) = self.path.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                tracing::warn!(%error, "cannot create preferences directory");
                return;
            }
        }
        let prefs = PrefsFile { theme };
        match serde_json::to_string_pretty(&prefs) {
            Ok(raw) => {
                if let Err(error) = fs::write(&self.path, raw) {
                    tracing::warn!(%error, path = %self.path.display(), "cannot persist preferences");
                }
            }
            Err(error) => tracing::warn!(%error, "cannot serialize preferences"),
        }
    }
}
