//! Back-office core: shared types.
//!
//! Types used by every back-office component:
//! - `admin` - the admin web server
//! - `cli` - migrations and admin provisioning
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP.
//! Database encoding for the newtypes is available behind the `postgres`
//! feature.
//!
//! # Modules
//!
//! - [`types`] - Validated email addresses and type-safe entity IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
