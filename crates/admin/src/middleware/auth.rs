//! Route gate and authentication extractor for the admin realm.
//!
//! [`require_admin`] is layered over the whole router and decides by path:
//! everything under `/admin` except the login page needs a signed-in admin.
//! Handlers that want the admin itself use [`RequireAdminAuth`].

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::CurrentAdmin;
use crate::services::SessionGuard;
use crate::state::AppState;

/// Path prefix guarded by the gate.
pub const ADMIN_PREFIX: &str = "/admin";

/// Login form display and submit path; the only unguarded admin path.
pub const LOGIN_PATH: &str = "/admin/login";

/// Whether a request path needs an authenticated admin session.
#[must_use]
pub fn is_protected_path(path: &str) -> bool {
    let under_admin = path
        .strip_prefix(ADMIN_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));

    under_admin && path != LOGIN_PATH
}

/// Gate middleware: redirect to the login page unless the session is bound
/// to an admin. The downstream handler is not invoked on redirect.
pub async fn require_admin(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    if !is_protected_path(request.uri().path()) {
        return next.run(request).await;
    }

    let guard = SessionGuard::new(&session, state.credentials());
    if guard.is_authenticated().await {
        return next.run(request).await;
    }

    tracing::debug!(path = %request.uri().path(), "Unauthenticated admin request redirected");
    Redirect::to(LOGIN_PATH).into_response()
}

/// Extractor that requires admin authentication.
///
/// Goes through the same [`SessionGuard`] check as the gate, so an admin
/// removed from the credential store is rejected here too. Rejects with a
/// redirect to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdminAuth(admin): RequireAdminAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.email)
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

impl FromRequestParts<AppState> for RequireAdminAuth {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or_else(|| Redirect::to(LOGIN_PATH))?;

        SessionGuard::new(session, state.credentials())
            .current()
            .await
            .map(Self)
            .ok_or_else(|| Redirect::to(LOGIN_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_paths() {
        for path in [
            "/admin",
            "/admin/",
            "/admin/dashboard",
            "/admin/users",
            "/admin/users/7",
            "/admin/logout",
            "/admin/login/",
            "/admin/unknown/deep/path",
        ] {
            assert!(is_protected_path(path), "{path} should be gated");
        }
    }

    #[test]
    fn test_public_paths() {
        for path in [
            "/admin/login",
            "/",
            "/health",
            "/health/ready",
            "/static/css/admin.css",
            "/administrator",
            "/adminx/dashboard",
        ] {
            assert!(!is_protected_path(path), "{path} should be public");
        }
    }
}
