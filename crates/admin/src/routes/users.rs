//! Read-only user listing.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};
use tracing::instrument;

use backoffice_core::UserId;

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdminAuth;
use crate::models::UserRecord;
use crate::routes::dashboard::AdminView;
use crate::state::AppState;

const USERS_PATH: &str = "/admin/users";

/// User row for templates.
#[derive(Debug, Clone)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<UserRecord> for UserView {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
        }
    }
}

/// Users list template.
#[derive(Template, WebTemplate)]
#[template(path = "users/index.html")]
pub struct UsersIndexTemplate {
    pub admin: AdminView,
    pub current_path: String,
    pub users: Vec<UserView>,
}

/// User detail template.
#[derive(Template, WebTemplate)]
#[template(path = "users/show.html")]
pub struct UserShowTemplate {
    pub admin: AdminView,
    pub current_path: String,
    pub user: UserView,
}

/// List all users, ordered by id.
#[instrument(skip_all)]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<UsersIndexTemplate, AppError> {
    let users = state.users().list().await?;

    Ok(UsersIndexTemplate {
        admin: AdminView::from(&admin),
        current_path: USERS_PATH.to_string(),
        users: users.into_iter().map(UserView::from).collect(),
    })
}

/// Show a single user. Unknown and non-numeric ids are 404s.
#[instrument(skip(admin, state))]
pub async fn show(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<UserShowTemplate, AppError> {
    let not_found = || AppError::NotFound(format!("user {id}"));

    let user_id = id.parse::<i32>().map(UserId::new).map_err(|_| not_found())?;
    let user = state.users().find(user_id).await?.ok_or_else(not_found)?;

    Ok(UserShowTemplate {
        admin: AdminView::from(&admin),
        current_path: USERS_PATH.to_string(),
        user: UserView::from(user),
    })
}
