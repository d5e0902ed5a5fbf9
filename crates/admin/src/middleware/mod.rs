//! HTTP middleware stack for admin.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (binary only)
//! 2. `TraceLayer` (`http_request` span per request)
//! 3. Request ID (record on span, tag Sentry, echo header)
//! 4. Security headers
//! 5. Session layer (tower-sessions)
//! 6. Route gate (redirect unauthenticated `/admin/*` requests to login)

pub mod auth;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use auth::{LOGIN_PATH, RequireAdminAuth, is_protected_path, require_admin};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use security_headers::security_headers_middleware;
pub use session::{SESSION_COOKIE_NAME, SessionStoreError, create_session_layer, postgres_store};
