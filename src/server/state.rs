//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the connection is a pool handle and the
//! identity provider holds only its signing keys.

use sea_orm::DatabaseConnection;

use crate::server::service::identity::IdentityProvider;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, shared with the session store.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer credentials.
    pub identity: IdentityProvider,

    /// Whether cookies set by handlers carry the `Secure` flag.
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, identity: IdentityProvider, secure_cookies: bool) -> Self {
        Self {
            db,
            identity,
            secure_cookies,
        }
    }
}
