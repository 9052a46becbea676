//! Forced-logout broadcast.
//!
//! ARCHITECTURE
//! ============
//! The HTTP layer must be able to end the session on a 401 without holding a
//! reference to the session controller (which itself owns an `ApiClient`).
//! A `LogoutHook` handle is created at bootstrap and injected into both
//! sides, so neither needs ambient global state to reach the other.
//!
//! The slot is single-occupancy: registering replaces any previous callback
//! (last registration wins), and triggering with nothing registered is a
//! logged no-op. Exactly one session controller exists per process, so a
//! single slot is enough.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use std::sync::{Arc, Mutex};

/// Why the session is being ended; decides the user-facing notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoutReason {
    /// The server rejected the credential (401).
    Expired,
    /// The user asked to sign out.
    Manual,
}

impl LogoutReason {
    /// Notification text shown when the session ends for this reason.
    #[must_use]
    pub fn notice(self) -> &'static str {
        match self {
            Self::Expired => "Session expired. Please sign in again.",
            Self::Manual => "Signed out.",
        }
    }
}

type LogoutCallback = Box<dyn Fn(LogoutReason) + Send + Sync>;

/// Cloneable handle to the single logout slot.
#[derive(Clone, Default)]
pub struct LogoutHook {
    slot: Arc<Mutex<Option<LogoutCallback>>>,
}

impl LogoutHook {
    /// Fresh hook with an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `callback`, replacing any previous registration.
    ///
    /// The callback runs synchronously on the triggering task and must not
    /// re-enter the hook.
    pub fn register<F>(&self, callback: F)
    where
        F: Fn(LogoutReason) + Send + Sync + 'static,
    {
        if let Ok(mut slot) = self.slot.lock() {
            if slot.is_some() {
                tracing::debug!("replacing previously registered logout callback");
            }
            *slot = Some(Box::new(callback));
        }
    }

    /// Invoke the registered callback, if any. No queuing, no retry.
    pub fn trigger(&self, reason: LogoutReason) {
        let Ok(slot) = self.slot.lock() else {
            return;
        };
        match slot.as_ref() {
            Some(callback) => callback(reason),
            None => tracing::warn!(?reason, "logout triggered with no registered callback"),
        }
    }

    /// Whether a callback is currently installed.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.slot.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl std::fmt::Debug for LogoutHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoutHook")
            .field("registered", &self.is_registered())
            .finish()
    }
}
