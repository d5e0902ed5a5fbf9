//! Authentication route handlers.
//!
//! Login form display and submit, and logout. The handlers only orchestrate:
//! credential checks and session binding live in [`SessionGuard`].

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::LOGIN_PATH;
use crate::routes::DASHBOARD_PATH;
use crate::services::SessionGuard;
use crate::state::AppState;

/// The only message shown for a failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid Credentials";

// =============================================================================
// Form Types
// =============================================================================

/// Login form data. Missing fields deserialize as empty strings.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    /// Email to pre-fill; the password is never echoed.
    pub email: String,
    /// Field-level error for the email input.
    pub error: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the login page.
///
/// Shown to everyone, including admins who are already signed in.
pub async fn show_login() -> LoginTemplate {
    LoginTemplate {
        email: String::new(),
        error: None,
    }
}

/// Handle login form submission.
///
/// Redirects to the dashboard on success. On failure the form is rendered
/// again (200) with the generic error and the submitted email.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let guard = SessionGuard::new(&session, state.credentials());

    if guard.attempt(&form.email, &form.password).await? {
        return Ok(Redirect::to(DASHBOARD_PATH).into_response());
    }

    Ok(LoginTemplate {
        email: form.email,
        error: Some(INVALID_CREDENTIALS.to_string()),
    }
    .into_response())
}

/// Log out and return to the login page.
#[instrument(skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<Redirect, AppError> {
    SessionGuard::new(&session, state.credentials())
        .logout()
        .await?;

    Ok(Redirect::to(LOGIN_PATH))
}
