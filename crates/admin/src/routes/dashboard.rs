//! Dashboard route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::Redirect};
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::models::CurrentAdmin;
use crate::routes::DASHBOARD_PATH;
use crate::state::AppState;

/// Signed-in admin, as shown in the layout header.
#[derive(Debug, Clone)]
pub struct AdminView {
    pub email: String,
}

impl From<&CurrentAdmin> for AdminView {
    fn from(admin: &CurrentAdmin) -> Self {
        Self {
            email: admin.email.to_string(),
        }
    }
}

/// Dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub admin: AdminView,
    pub current_path: String,
    pub user_count: i64,
}

/// `/admin` lands on the dashboard.
pub async fn admin_root() -> Redirect {
    Redirect::to(DASHBOARD_PATH)
}

/// Dashboard page handler.
#[instrument(skip_all)]
pub async fn dashboard(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<DashboardTemplate, AppError> {
    let user_count = state.users().count().await?;

    Ok(DashboardTemplate {
        admin: AdminView::from(&admin),
        current_path: DASHBOARD_PATH.to_string(),
        user_count,
    })
}
