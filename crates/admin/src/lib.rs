//! Back-office admin library.
//!
//! Session-based admin authentication, the `/admin` route gate and a
//! read-only user listing, exposed as a library so the router can be driven
//! in-process by the integration tests.
//!
//! The entry point is [`routes::router`], which takes the application state
//! and a tower-sessions store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use config::AdminConfig;
pub use routes::router;
pub use state::AppState;
