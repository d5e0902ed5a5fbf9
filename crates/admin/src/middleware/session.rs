//! Session middleware configuration for admin.
//!
//! Sessions live in `admin.session` in production and in tower-sessions'
//! `MemoryStore` in tests; the cookie settings are the same for both.

use sqlx::PgPool;
use thiserror::Error;
use tower_sessions::{
    Expiry, SessionManagerLayer, SessionStore,
    cookie::{SameSite, time::Duration},
};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::AdminConfig;

/// Session cookie name for admin.
pub const SESSION_COOKIE_NAME: &str = "bo_admin_session";

/// Schema holding the session table.
const SESSION_SCHEMA: &str = "admin";

/// Session table name.
const SESSION_TABLE: &str = "session";

/// The session store could not be configured.
#[derive(Debug, Error)]
#[error("invalid session store identifier: {0}")]
pub struct SessionStoreError(String);

/// Create the `PostgreSQL` session store on `admin.session`.
///
/// The table is created by migration, never at runtime.
///
/// # Errors
///
/// Returns `SessionStoreError` if the schema or table name is rejected.
pub fn postgres_store(pool: &PgPool) -> Result<PostgresStore, SessionStoreError> {
    PostgresStore::new(pool.clone())
        .with_schema_name(SESSION_SCHEMA)
        .map_err(|e| SessionStoreError(e.to_string()))?
        .with_table_name(SESSION_TABLE)
        .map_err(|e| SessionStoreError(e.to_string()))
}

/// Create the session layer over any session store.
///
/// Cookies are `HttpOnly`, `SameSite=Strict`, scoped to `/`, `Secure` when the
/// panel is served over HTTPS, and expire after the configured inactivity.
#[must_use]
pub fn create_session_layer<S>(store: S, config: &AdminConfig) -> SessionManagerLayer<S>
where
    S: SessionStore + Clone,
{
    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            config.session_ttl_minutes,
        )))
        .with_secure(config.is_secure())
        .with_same_site(SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
