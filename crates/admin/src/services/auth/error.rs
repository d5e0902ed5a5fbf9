//! Admin authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during admin authentication operations.
///
/// A wrong email or password is not an error: [`super::SessionGuard::attempt`]
/// reports it as `Ok(false)`.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credential store failure.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Session store failure.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
