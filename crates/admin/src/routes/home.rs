//! Public landing page.

use askama::Template;
use askama_web::WebTemplate;

use crate::filters;
use crate::middleware::LOGIN_PATH;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "welcome.html")]
pub struct WelcomeTemplate {
    pub login_path: &'static str,
}

/// Display the landing page.
pub async fn welcome() -> WelcomeTemplate {
    WelcomeTemplate {
        login_path: LOGIN_PATH,
    }
}
