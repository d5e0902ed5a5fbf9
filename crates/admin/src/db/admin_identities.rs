//! Admin identity repository.
//!
//! Backs the [`CredentialStore`] seam with `admin.admin_user`. Emails are
//! unique case-insensitively (`lower(email)` index), and every lookup goes
//! through the same expression.

use async_trait::async_trait;
use sqlx::PgPool;

use backoffice_core::{AdminId, Email};

use super::{CredentialStore, RepositoryError};
use crate::models::AdminIdentity;

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct AdminIdentityRow {
    id: AdminId,
    email: String,
    password_hash: String,
}

impl TryFrom<AdminIdentityRow> for AdminIdentity {
    type Error = RepositoryError;

    fn try_from(row: AdminIdentityRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid admin email in database: {e}"))
        })?;

        Ok(Self {
            id: row.id,
            email,
            password_hash: row.password_hash,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for admin identity database operations.
#[derive(Clone)]
pub struct AdminIdentityRepository {
    pool: PgPool,
}

impl AdminIdentityRepository {
    /// Create a new admin identity repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new admin identity.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if an admin with this email exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        email: &Email,
        password_hash: &str,
    ) -> Result<AdminIdentity, RepositoryError> {
        let row = sqlx::query_as::<_, AdminIdentityRow>(
            r"
            INSERT INTO admin.admin_user (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash
            ",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                RepositoryError::Conflict("admin email already exists".to_owned())
            }
            other => RepositoryError::Database(other),
        })?;

        row.try_into()
    }
}

#[async_trait]
impl CredentialStore for AdminIdentityRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<AdminIdentity>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminIdentityRow>(
            r"
            SELECT id, email, password_hash
            FROM admin.admin_user
            WHERE lower(email) = $1
            ",
        )
        .bind(email.normalized())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_id(&self, id: AdminId) -> Result<Option<AdminIdentity>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminIdentityRow>(
            r"
            SELECT id, email, password_hash
            FROM admin.admin_user
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
