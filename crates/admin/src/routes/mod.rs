//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Landing page
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (credential store reachable)
//! GET  /static/*               - Stylesheets
//!
//! # Auth
//! GET  /admin/login            - Login form
//! POST /admin/login            - Login submit
//! POST /admin/logout           - Logout
//!
//! # Admin (gated)
//! GET  /admin                  - Redirect to dashboard
//! GET  /admin/dashboard        - Dashboard
//! GET  /admin/users            - User listing
//! GET  /admin/users/{id}       - User detail
//! ```

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod home;
pub mod users;

use std::time::Duration;

use axum::{
    Router,
    extract::Request,
    http::Response,
    middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tower_sessions::SessionStore;
use tracing::Span;

use crate::error::AppError;
use crate::middleware::{
    LOGIN_PATH, create_session_layer, request_id_middleware, require_admin,
    security_headers_middleware,
};
use crate::state::AppState;

/// Directory holding the admin stylesheets.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Path of the admin dashboard, the target of a successful login.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Build the route table, without middleware.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::welcome))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        // Auth
        .route(LOGIN_PATH, get(auth::show_login).post(auth::login))
        .route("/admin/logout", post(auth::logout))
        // Admin
        .route("/admin", get(dashboard::admin_root))
        .route(DASHBOARD_PATH, get(dashboard::dashboard))
        .route("/admin/users", get(users::index))
        .route("/admin/users/{id}", get(users::show))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(not_found)
}

/// Build the full application: routes, route gate, sessions, request IDs and
/// request tracing.
///
/// The session store is a parameter so production can pass the `PostgreSQL`
/// store and tests an in-memory one.
pub fn router<S>(state: AppState, session_store: S) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = create_session_layer(session_store, state.config());

    routes()
        .layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .layer(session_layer)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(|response: &Response<_>, latency: Duration, span: &Span| {
                    span.record("status", response.status().as_u16());
                    span.record(
                        "latency_ms",
                        u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                    );
                    DefaultOnResponse::default().on_response(response, latency, span);
                }),
        )
        .with_state(state)
}

/// Fallback for unknown paths. Under `/admin` the gate runs first, so only
/// signed-in admins get here.
async fn not_found() -> AppError {
    AppError::NotFound("page".to_string())
}
