//! Formaboard client core.
//!
//! Headless client for the training-program administration REST API: token
//! and session lifecycle, the authenticated request pipeline, list-screen
//! and form state coordination, typed resource endpoints, and tabular
//! exports. Frontends (the `forma-cli` crate) stay thin on top of this
//! crate.

pub mod error;
pub mod export;
pub mod net;
pub mod resources;
pub mod state;
pub mod util;
