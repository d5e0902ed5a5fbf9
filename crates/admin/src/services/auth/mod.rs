//! Admin authentication service.
//!
//! Email + password authentication for the admin realm. A [`SessionGuard`]
//! is built per request from the request's session and the credential store
//! held in application state; there is no global auth state.

mod error;
pub mod password;

pub use error::AuthError;
pub use password::{hash_password, validate_password, verify_password};

use password::verify_dummy;

use tower_sessions::Session;

use backoffice_core::Email;

use crate::db::CredentialStore;
use crate::error::{clear_sentry_user, set_sentry_user};
use crate::models::{ADMIN_REALM, CurrentAdmin, session_keys};

/// Login, logout and authentication checks for one request's session.
pub struct SessionGuard<'a> {
    session: &'a Session,
    credentials: &'a dyn CredentialStore,
}

impl<'a> SessionGuard<'a> {
    /// Create a guard over a session and a credential store.
    #[must_use]
    pub const fn new(session: &'a Session, credentials: &'a dyn CredentialStore) -> Self {
        Self {
            session,
            credentials,
        }
    }

    /// Check an email/password pair and, on a match, bind the session to the
    /// admin.
    ///
    /// Returns `Ok(false)` for an unknown or malformed email and for a wrong
    /// password alike; the session is left untouched in both cases. On success
    /// the session id is rotated before the admin is stored.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the credential store fails and
    /// `AuthError::Session` if the session cannot be updated.
    pub async fn attempt(&self, email: &str, password: &str) -> Result<bool, AuthError> {
        let identity = match Email::parse(email) {
            Ok(email) => self.credentials.find_by_email(&email).await?,
            Err(_) => None,
        };

        let Some(identity) = identity else {
            verify_dummy(password);
            tracing::info!(realm = ADMIN_REALM, "Admin login failed: unknown email");
            return Ok(false);
        };

        if !verify_password(password, &identity.password_hash) {
            tracing::info!(
                realm = ADMIN_REALM,
                admin_id = %identity.id,
                "Admin login failed: wrong password"
            );
            return Ok(false);
        }

        let admin = CurrentAdmin::from(&identity);
        self.session.cycle_id().await?;
        self.session
            .insert(session_keys::CURRENT_ADMIN, &admin)
            .await?;

        set_sentry_user(admin.id.as_i32(), Some(admin.email.as_str()));
        tracing::info!(realm = ADMIN_REALM, admin_id = %admin.id, "Admin logged in");

        Ok(true)
    }

    /// The admin bound to this session, if any.
    ///
    /// The binding is re-checked against the credential store on every call.
    /// If the admin no longer exists the session is flushed. A session or
    /// credential store failure reads as "not signed in".
    pub async fn current(&self) -> Option<CurrentAdmin> {
        let stored = match self
            .session
            .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
            .await
        {
            Ok(stored) => stored?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read admin session");
                return None;
            }
        };

        match self.credentials.find_by_id(stored.id).await {
            Ok(Some(identity)) => Some(CurrentAdmin::from(&identity)),
            Ok(None) => {
                tracing::info!(
                    realm = ADMIN_REALM,
                    admin_id = %stored.id,
                    "Session admin no longer exists, signing out"
                );
                if let Err(e) = self.session.flush().await {
                    tracing::warn!(error = %e, "Failed to flush stale admin session");
                }
                clear_sentry_user();
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, admin_id = %stored.id, "Failed to re-check session admin");
                None
            }
        }
    }

    /// Whether this session is bound to an admin.
    pub async fn is_authenticated(&self) -> bool {
        self.current().await.is_some()
    }

    /// Unbind the admin and destroy the session record. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Session` if the session store cannot be updated.
    pub async fn logout(&self) -> Result<(), AuthError> {
        let previous = self.current().await;

        self.session.flush().await?;
        clear_sentry_user();

        if let Some(admin) = previous {
            tracing::info!(realm = ADMIN_REALM, admin_id = %admin.id, "Admin logged out");
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, LazyLock};

    use tower_sessions::MemoryStore;

    use backoffice_core::AdminId;

    use super::*;
    use crate::db::InMemoryCredentialStore;

    static SECRET_HASH: LazyLock<String> = LazyLock::new(|| hash_password("secret").unwrap());

    fn store() -> InMemoryCredentialStore {
        InMemoryCredentialStore::new().with_admin(
            AdminId::new(1),
            Email::parse("a@x.com").unwrap(),
            SECRET_HASH.clone(),
        )
    }

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_attempt_with_correct_credentials() {
        let credentials = store();
        let session = session();
        let guard = SessionGuard::new(&session, &credentials);

        assert!(guard.attempt("a@x.com", "secret").await.unwrap());
        assert!(guard.is_authenticated().await);

        let admin = guard.current().await.unwrap();
        assert_eq!(admin.id, AdminId::new(1));
        assert_eq!(admin.email.as_str(), "a@x.com");
    }

    #[tokio::test]
    async fn test_attempt_email_is_case_insensitive() {
        let credentials = store();
        let session = session();
        let guard = SessionGuard::new(&session, &credentials);

        assert!(guard.attempt("  A@X.com ", "secret").await.unwrap());
    }

    #[tokio::test]
    async fn test_attempt_rejects_bad_credentials() {
        let credentials = store();

        for (email, password) in [
            ("a@x.com", "wrong"),
            ("a@x.com", ""),
            ("a@x.com", "Secret"),
            ("b@x.com", "secret"),
            ("not-an-email", "secret"),
            ("", ""),
        ] {
            let session = session();
            let guard = SessionGuard::new(&session, &credentials);

            assert!(
                !guard.attempt(email, password).await.unwrap(),
                "{email}/{password} should be rejected"
            );
            assert!(!guard.is_authenticated().await);
        }
    }

    #[tokio::test]
    async fn test_attempt_surfaces_store_failure() {
        let credentials = InMemoryCredentialStore::unavailable();
        let session = session();
        let guard = SessionGuard::new(&session, &credentials);

        let result = guard.attempt("a@x.com", "secret").await;
        assert!(matches!(result, Err(AuthError::Repository(_))));
        assert!(!guard.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_logout_clears_authentication() {
        let credentials = store();
        let session = session();
        let guard = SessionGuard::new(&session, &credentials);

        guard.attempt("a@x.com", "secret").await.unwrap();
        guard.logout().await.unwrap();
        assert!(!guard.is_authenticated().await);

        guard.logout().await.unwrap();
        assert!(!guard.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_revoked_admin_is_no_longer_authenticated() {
        let credentials = store();
        let session = session();
        let guard = SessionGuard::new(&session, &credentials);

        guard.attempt("a@x.com", "secret").await.unwrap();
        assert!(credentials.revoke(AdminId::new(1)));

        assert!(!guard.is_authenticated().await);
        assert!(
            session
                .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_failed_attempt_keeps_existing_login() {
        let credentials = store();
        let session = session();
        let guard = SessionGuard::new(&session, &credentials);

        guard.attempt("a@x.com", "secret").await.unwrap();
        assert!(!guard.attempt("a@x.com", "wrong").await.unwrap());
        assert!(guard.is_authenticated().await);
    }
}
