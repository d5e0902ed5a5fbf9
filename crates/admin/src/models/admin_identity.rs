//! Administrator identity as held by the credential store.

use backoffice_core::{AdminId, Email};

/// An administrator that can sign in to the admin realm.
///
/// Provisioned out of band (see `bo-cli admin create`); the web server only
/// reads it. `Debug` redacts the password hash.
#[derive(Clone)]
pub struct AdminIdentity {
    /// Unique admin ID.
    pub id: AdminId,
    /// Login email, unique (case-insensitively) across admins.
    pub email: Email,
    /// Argon2id hash in PHC string format.
    pub password_hash: String,
}

impl std::fmt::Debug for AdminIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminIdentity")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_hash() {
        let admin = AdminIdentity {
            id: AdminId::new(1),
            email: Email::parse("a@x.com").unwrap(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        };

        let debug_output = format!("{admin:?}");
        assert!(debug_output.contains("a@x.com"));
        assert!(!debug_output.contains("argon2id"));
    }
}
