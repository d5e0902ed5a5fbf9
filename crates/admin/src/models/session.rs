//! Session-related types for admin authentication.

use serde::{Deserialize, Serialize};

use backoffice_core::{AdminId, Email};

use super::AdminIdentity;

/// Name of the authentication realm guarded by this server.
pub const ADMIN_REALM: &str = "admin";

/// Session-stored admin identity.
///
/// The session only keeps a reference to the admin (id and email), never the
/// password hash. Its presence under [`keys::CURRENT_ADMIN`] is what makes a
/// session authenticated in the admin realm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminId,
    /// Admin's email address.
    pub email: Email,
}

impl From<&AdminIdentity> for CurrentAdmin {
    fn from(identity: &AdminIdentity) -> Self {
        Self {
            id: identity.id,
            email: identity.email.clone(),
        }
    }
}

/// Session keys for admin authentication data.
pub mod keys {
    /// Key for the identity bound to the session in the admin realm.
    pub const CURRENT_ADMIN: &str = "admin.current_admin";
}
