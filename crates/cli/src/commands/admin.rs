//! Admin provisioning commands.
//!
//! # Usage
//!
//! ```bash
//! bo-cli admin create -e admin@example.com -p 'a long password'
//! BO_ADMIN_PASSWORD='a long password' bo-cli admin create -e admin@example.com
//! ```
//!
//! # Environment Variables
//!
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//! - `BO_ADMIN_PASSWORD` - Password, when not given with `--password`

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use backoffice_admin::db::{AdminIdentityRepository, RepositoryError, create_pool};
use backoffice_admin::services::auth::{AuthError, hash_password, validate_password};
use backoffice_core::{AdminId, Email, EmailError};

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository error.
    #[error("{0}")]
    Repository(RepositoryError),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password rejected or could not be hashed.
    #[error("{0}")]
    Password(#[from] AuthError),

    /// Admin already exists.
    #[error("Admin already exists with email: {0}")]
    UserExists(String),
}

/// Create a new admin identity.
///
/// # Returns
///
/// The ID of the created admin.
///
/// # Errors
///
/// Returns `AdminError` if the email or password is invalid, the email is
/// already taken, or the database is unreachable.
pub async fn create(email: &str, password: SecretString) -> Result<AdminId, AdminError> {
    let email = Email::parse(email)?;
    validate_password(password.expose_secret())?;

    let database_url =
        super::database_url().ok_or(AdminError::MissingEnvVar("ADMIN_DATABASE_URL"))?;

    tracing::info!("Connecting to admin database...");
    let pool = create_pool(&database_url).await?;

    let password_hash = hash_password(password.expose_secret())?;

    tracing::info!("Creating admin: {}", email);
    let admin = AdminIdentityRepository::new(pool)
        .create(&email, &password_hash)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => AdminError::UserExists(email.to_string()),
            other => AdminError::Repository(other),
        })?;

    tracing::info!(
        "Admin created successfully! ID: {}, Email: {}",
        admin.id,
        admin.email
    );

    Ok(admin.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_invalid_email_before_connecting() {
        let result = create("not-an-email", SecretString::from("long enough")).await;
        assert!(matches!(result, Err(AdminError::InvalidEmail(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_short_password_before_connecting() {
        let result = create("a@x.com", SecretString::from("short")).await;
        assert!(matches!(
            result,
            Err(AdminError::Password(AuthError::WeakPassword(_)))
        ));
    }
}
