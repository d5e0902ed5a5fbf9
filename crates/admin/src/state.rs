//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AdminConfig;
use crate::db::{AdminIdentityRepository, CredentialStore, UserDirectory, UserRepository};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Stores are held behind trait
/// objects so the router runs against `PostgreSQL` in production and
/// in-memory stores in tests.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    credentials: Arc<dyn CredentialStore>,
    users: Arc<dyn UserDirectory>,
}

impl AppState {
    /// Create a new application state from explicit stores.
    #[must_use]
    pub fn new(
        config: AdminConfig,
        credentials: Arc<dyn CredentialStore>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                credentials,
                users,
            }),
        }
    }

    /// Create application state backed by `PostgreSQL` repositories.
    #[must_use]
    pub fn postgres(config: AdminConfig, pool: &PgPool) -> Self {
        Self::new(
            config,
            Arc::new(AdminIdentityRepository::new(pool.clone())),
            Arc::new(UserRepository::new(pool.clone())),
        )
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get the admin credential store.
    #[must_use]
    pub fn credentials(&self) -> &dyn CredentialStore {
        self.inner.credentials.as_ref()
    }

    /// Get the user directory.
    #[must_use]
    pub fn users(&self) -> &dyn UserDirectory {
        self.inner.users.as_ref()
    }
}
