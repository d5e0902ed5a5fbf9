//! Database operations for the admin panel.
//!
//! # Tables
//!
//! - `admin.admin_user` - Admin identities (email + Argon2id password hash)
//! - `admin.session` - tower-sessions storage for the admin realm
//! - `users` - Application users, shown read-only on the listing
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p backoffice-cli -- migrate
//! ```
//!
//! Handlers never talk to sqlx directly: they go through the
//! [`CredentialStore`] and [`UserDirectory`] seams, implemented here for
//! `PostgreSQL` and in [`memory`] for tests and local demos.

pub mod admin_identities;
pub mod memory;
pub mod users;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use backoffice_core::{AdminId, Email, UserId};

use crate::models::{AdminIdentity, UserRecord};

pub use admin_identities::AdminIdentityRepository;
pub use memory::{InMemoryCredentialStore, InMemoryUserDirectory};
pub use users::UserRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Read access to administrator identities.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find the admin whose email matches, ignoring case.
    async fn find_by_email(&self, email: &Email) -> Result<Option<AdminIdentity>, RepositoryError>;

    /// Find the admin with this id. Used to re-check a session's admin.
    async fn find_by_id(&self, id: AdminId) -> Result<Option<AdminIdentity>, RepositoryError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Read access to the users shown on the admin listing.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// All users, ordered by id.
    async fn list(&self) -> Result<Vec<UserRecord>, RepositoryError>;

    /// A single user by id.
    async fn find(&self, id: UserId) -> Result<Option<UserRecord>, RepositoryError>;

    /// Number of users.
    async fn count(&self) -> Result<i64, RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
