//! Core types for the back-office.

pub mod email;
pub mod id;

pub use email::{Email, EmailError};
pub use id::*;
