//! Display-only user records.

use backoffice_core::UserId;

/// A user as shown on the admin listing.
///
/// Owned by the user-management side of the application; the admin panel
/// never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
}
