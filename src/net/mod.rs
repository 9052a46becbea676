//! Network layer: token persistence, the logout broadcast, and the
//! authenticated REST client.

pub mod api;
pub mod logout;
pub mod token_store;
pub mod types;
