//! Business logic services for admin.
//!
//! # Services
//!
//! - `auth` - Password authentication and the admin-realm session guard

pub mod auth;

pub use auth::{AuthError, SessionGuard};
