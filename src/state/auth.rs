//! Session lifecycle: restore on startup, login, logout.
//!
//! ARCHITECTURE
//! ============
//! The session is a three-state machine: `Loading` (transient, visited once
//! at startup) settles into `Anonymous` or `Authenticated`, and the two
//! steady states only change through `login`/`logout`, or through the
//! logout hook when the HTTP layer sees a 401. The controller is the sole
//! writer of session state; everything else reads snapshots.
//!
//! Restore, login and logout run under one async lock so a login issued
//! while the startup restore is still in flight cannot interleave with it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex};

use crate::error::ApiError;
use crate::net::api::ApiClient;
use crate::net::logout::{LogoutHook, LogoutReason};
use crate::net::types::User;
use crate::resources::user;

/// Where the session currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup restore has not settled yet.
    Loading,
    Anonymous,
    Authenticated,
}

/// Read-only view of the session, cloned out to callers.
#[derive(Clone, Debug)]
pub struct Session {
    pub phase: SessionPhase,
    pub user: Option<User>,
    /// One-shot user-facing message ("Signed in.", "Session expired. ...").
    pub notice: Option<String>,
}

impl Session {
    fn loading() -> Self {
        Self { phase: SessionPhase::Loading, user: None, notice: None }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }
}

/// Owns session state and the only code allowed to mutate it.
pub struct SessionController {
    api: ApiClient,
    state: Arc<Mutex<Session>>,
    op_lock: tokio::sync::Mutex<()>,
}

impl SessionController {
    /// Build the controller and wire its teardown into `hook`, so a 401 seen
    /// anywhere in the HTTP layer ends the session. Registration replaces
    /// any earlier callback; exactly one controller exists per process.
    #[must_use]
    pub fn new(api: ApiClient, hook: &LogoutHook) -> Self {
        let state = Arc::new(Mutex::new(Session::loading()));

        let shared = Arc::clone(&state);
        let tokens = api.tokens().clone();
        hook.register(move |reason| {
            tokens.clear();
            if let Ok(mut session) = shared.lock() {
                session.user = None;
                session.phase = SessionPhase::Anonymous;
                session.notice = Some(reason.notice().to_owned());
            }
        });

        Self { api, state, op_lock: tokio::sync::Mutex::new(()) }
    }

    /// The client this controller authenticates with.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Current session, cloned.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state
            .lock()
            .map_or_else(|_| Session::loading(), |session| session.clone())
    }

    /// Pop the pending notice, if any, so the UI shows it exactly once.
    pub fn take_notice(&self) -> Option<String> {
        self.state.lock().ok().and_then(|mut session| session.notice.take())
    }

    /// Startup transition out of `Loading`: a stored token pair is the sole
    /// signal that a session may exist. Profile-fetch failure clears the
    /// store and settles Anonymous.
    pub async fn restore(&self) {
        let _guard = self.op_lock.lock().await;

        if self.api.tokens().read().access.is_none() {
            self.become_anonymous(None);
            return;
        }
        match user::me(&self.api).await {
            Ok(profile) => self.become_authenticated(profile, None),
            Err(error) => {
                tracing::debug!(%error, "session restore failed");
                self.api.tokens().clear();
                self.become_anonymous(None);
            }
        }
    }

    /// Exchange credentials for a token pair, persist it, fetch the profile.
    /// On failure the session stays (or returns to) Anonymous and the error
    /// carries the server message when one was given.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let _guard = self.op_lock.lock().await;

        let tokens = user::issue_tokens(&self.api, email, password).await?;
        self.api.tokens().store(&tokens.access, &tokens.refresh);

        match user::me(&self.api).await {
            Ok(profile) => {
                self.become_authenticated(profile.clone(), Some("Signed in."));
                Ok(profile)
            }
            Err(error) => {
                self.api.tokens().clear();
                self.become_anonymous(None);
                Err(error)
            }
        }
    }

    /// Drop the stored pair and return to Anonymous.
    pub async fn logout(&self) {
        let _guard = self.op_lock.lock().await;
        self.api.tokens().clear();
        self.become_anonymous(Some(LogoutReason::Manual.notice()));
    }

    fn become_authenticated(&self, profile: User, notice: Option<&str>) {
        if let Ok(mut session) = self.state.lock() {
            session.user = Some(profile);
            session.phase = SessionPhase::Authenticated;
            if let Some(notice) = notice {
                session.notice = Some(notice.to_owned());
            }
        }
    }

    /// `notice: None` keeps whatever notice is already pending (the logout
    /// hook may have set one an instant earlier).
    fn become_anonymous(&self, notice: Option<&str>) {
        if let Ok(mut session) = self.state.lock() {
            session.user = None;
            session.phase = SessionPhase::Anonymous;
            if let Some(notice) = notice {
                session.notice = Some(notice.to_owned());
            }
        }
    }
}
