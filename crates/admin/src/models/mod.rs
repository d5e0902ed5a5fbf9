//! Domain models for admin.
//!
//! - [`AdminIdentity`] - an administrator that can sign in (credential store row)
//! - [`CurrentAdmin`] - the identity reference held in an authenticated session
//! - [`UserRecord`] - a user row shown on the read-only listing

pub mod admin_identity;
pub mod session;
pub mod user;

pub use admin_identity::AdminIdentity;
pub use session::{ADMIN_REALM, CurrentAdmin, keys as session_keys};
pub use user::UserRecord;
