//! In-memory stores.
//!
//! Used by the test suites and by anyone wiring the router without a
//! database. Clones of a credential store share the same identities, so a
//! test can keep a handle and revoke an admin after handing the store to the
//! app.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use backoffice_core::{AdminId, Email, UserId};

use super::{CredentialStore, RepositoryError, UserDirectory};
use crate::models::{AdminIdentity, UserRecord};

/// Credential store backed by a shared list of identities.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCredentialStore {
    identities: Arc<RwLock<Vec<AdminIdentity>>>,
    unavailable: bool,
}

impl InMemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an identity with an already-hashed password.
    #[must_use]
    pub fn with_admin(self, id: AdminId, email: Email, password_hash: String) -> Self {
        if let Ok(mut identities) = self.identities.write() {
            identities.push(AdminIdentity {
                id,
                email,
                password_hash,
            });
        }
        self
    }

    /// A store whose every call fails, as if the database were down.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            identities: Arc::default(),
            unavailable: true,
        }
    }

    /// Remove an admin. Returns whether an identity was removed.
    pub fn revoke(&self, id: AdminId) -> bool {
        let Ok(mut identities) = self.identities.write() else {
            return false;
        };
        let before = identities.len();
        identities.retain(|identity| identity.id != id);
        identities.len() != before
    }

    fn find(
        &self,
        predicate: impl Fn(&AdminIdentity) -> bool,
    ) -> Result<Option<AdminIdentity>, RepositoryError> {
        if self.unavailable {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }

        let identities = self
            .identities
            .read()
            .map_err(|_| RepositoryError::DataCorruption("Lock poisoned".to_string()))?;
        Ok(identities.iter().find(|identity| predicate(identity)).cloned())
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<AdminIdentity>, RepositoryError> {
        let wanted = email.normalized();
        self.find(|identity| identity.email.normalized() == wanted)
    }

    async fn find_by_id(&self, id: AdminId) -> Result<Option<AdminIdentity>, RepositoryError> {
        self.find(|identity| identity.id == id)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        if self.unavailable {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

/// User directory backed by a fixed list of users.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserDirectory {
    users: Vec<UserRecord>,
}

impl InMemoryUserDirectory {
    /// Create a directory from a list of users; they are kept sorted by id.
    #[must_use]
    pub fn new(mut users: Vec<UserRecord>) -> Self {
        users.sort_by_key(|user| user.id);
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn list(&self) -> Result<Vec<UserRecord>, RepositoryError> {
        Ok(self.users.clone())
    }

    async fn find(&self, id: UserId) -> Result<Option<UserRecord>, RepositoryError> {
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(i64::try_from(self.users.len()).unwrap_or(i64::MAX))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(id: i32, name: &str) -> UserRecord {
        UserRecord {
            id: UserId::new(id),
            name: name.to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[tokio::test]
    async fn test_find_by_email_ignores_case() {
        let store = InMemoryCredentialStore::new().with_admin(
            AdminId::new(1),
            Email::parse("Admin@Example.com").unwrap(),
            "hash".to_owned(),
        );

        let found = store
            .find_by_email(&Email::parse("admin@example.COM").unwrap())
            .await
            .unwrap();
        assert_eq!(found.unwrap().id, AdminId::new(1));

        let missing = store
            .find_by_email(&Email::parse("other@example.com").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_revoke_removes_admin_from_every_clone() {
        let store = InMemoryCredentialStore::new().with_admin(
            AdminId::new(1),
            Email::parse("a@x.com").unwrap(),
            "hash".to_owned(),
        );
        let app_copy = store.clone();

        assert!(app_copy.find_by_id(AdminId::new(1)).await.unwrap().is_some());
        assert!(store.revoke(AdminId::new(1)));
        assert!(!store.revoke(AdminId::new(1)));

        assert!(app_copy.find_by_id(AdminId::new(1)).await.unwrap().is_none());
        assert!(
            app_copy
                .find_by_email(&Email::parse("a@x.com").unwrap())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_unavailable_store_fails() {
        let store = InMemoryCredentialStore::unavailable();

        assert!(store.ping().await.is_err());
        assert!(store.find_by_id(AdminId::new(1)).await.is_err());
        assert!(
            store
                .find_by_email(&Email::parse("a@x.com").unwrap())
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_directory_is_sorted_by_id() {
        let directory = InMemoryUserDirectory::new(vec![user(3, "Carol"), user(1, "Alice")]);

        let ids: Vec<i32> = directory
            .list()
            .await
            .unwrap()
            .iter()
            .map(|u| u.id.as_i32())
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(directory.count().await.unwrap(), 2);
        assert_eq!(
            directory.find(UserId::new(3)).await.unwrap().unwrap().name,
            "Carol"
        );
        assert!(directory.find(UserId::new(2)).await.unwrap().is_none());
    }
}
