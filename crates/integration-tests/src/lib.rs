//! Integration tests for the back-office admin server.
//!
//! The whole router (gate, sessions, templates) is driven in-process with
//! `tower::ServiceExt::oneshot`, backed by in-memory stores. No database or
//! running server is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p backoffice-integration-tests
//! ```

use std::sync::{Arc, LazyLock};

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use tower::ServiceExt;
use tower_sessions::MemoryStore;

use backoffice_admin::db::{
    CredentialStore, InMemoryCredentialStore, InMemoryUserDirectory, UserDirectory,
};
use backoffice_admin::middleware::SESSION_COOKIE_NAME;
use backoffice_admin::models::UserRecord;
use backoffice_admin::services::auth::hash_password;
use backoffice_admin::{AdminConfig, AppState, router};
use backoffice_core::{AdminId, Email, UserId};

/// Seeded admin email.
pub const ADMIN_EMAIL: &str = "a@x.com";

/// Seeded admin password.
pub const ADMIN_PASSWORD: &str = "secret";

static ADMIN_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password(ADMIN_PASSWORD).expect("hash test password"));

/// Configuration for an in-process app; the database URL is never used.
#[must_use]
pub fn test_config() -> AdminConfig {
    AdminConfig::from_lookup(|key| match key {
        "ADMIN_DATABASE_URL" => Some("postgres://unused/backoffice".to_string()),
        "ADMIN_BASE_URL" => Some("http://localhost:3001".to_string()),
        _ => None,
    })
    .expect("valid test configuration")
}

/// Credential store holding the seeded admin.
#[must_use]
pub fn seeded_credentials() -> InMemoryCredentialStore {
    InMemoryCredentialStore::new().with_admin(
        AdminId::new(1),
        Email::parse(ADMIN_EMAIL).expect("valid admin email"),
        ADMIN_HASH.clone(),
    )
}

/// User directory with two users, inserted out of order.
#[must_use]
pub fn seeded_users() -> InMemoryUserDirectory {
    InMemoryUserDirectory::new(vec![
        UserRecord {
            id: UserId::new(2),
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
        },
        UserRecord {
            id: UserId::new(1),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        },
    ])
}

/// A response with its body read into a string.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Assert this is a redirect to `path`.
    ///
    /// # Panics
    ///
    /// Panics if the response is not a 303 to `path`.
    pub fn assert_redirect_to(&self, path: &str) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.location(), Some(path));
    }

    /// The admin session `Set-Cookie` header, if any.
    #[must_use]
    pub fn session_cookie(&self) -> Option<&str> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with(&format!("{SESSION_COOKIE_NAME}=")))
    }
}

/// Browser-like client over one app instance, carrying the session cookie.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl TestClient {
    /// App with the seeded admin and users.
    #[must_use]
    pub fn new() -> Self {
        Self::with_stores(seeded_credentials(), seeded_users())
    }

    /// App over the given stores.
    #[must_use]
    pub fn with_stores(
        credentials: impl CredentialStore + 'static,
        users: impl UserDirectory + 'static,
    ) -> Self {
        let state = AppState::new(test_config(), Arc::new(credentials), Arc::new(users));

        Self {
            app: router(state, MemoryStore::default()),
            cookie: None,
        }
    }

    /// Whether the client currently holds a session cookie.
    #[must_use]
    pub const fn has_session(&self) -> bool {
        self.cookie.is_some()
    }

    /// Send a GET request.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        self.send(Method::GET, path, None).await
    }

    /// Send a POST request with a url-encoded form body.
    pub async fn post_form(&mut self, path: &str, body: &str) -> TestResponse {
        self.send(Method::POST, path, Some(body.to_string())).await
    }

    /// Log in as the seeded admin.
    ///
    /// # Panics
    ///
    /// Panics if the login does not redirect to the dashboard.
    pub async fn login(&mut self) {
        let response = self
            .post_form("/admin/login", "email=a%40x.com&password=secret")
            .await;
        response.assert_redirect_to("/admin/dashboard");
    }

    async fn send(&mut self, method: Method, path: &str, form: Option<String>) -> TestResponse {
        let mut request = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let body = match form {
            Some(form) => {
                request = request.header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                );
                Body::from(form)
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .oneshot(request.body(body).expect("valid request"))
            .await
            .expect("infallible router");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");

        let response = TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        };
        self.store_cookie(&response);
        response
    }

    fn store_cookie(&mut self, response: &TestResponse) {
        let Some(set_cookie) = response.session_cookie() else {
            return;
        };

        let pair = set_cookie.split(';').next().unwrap_or_default().trim();
        let value = pair
            .strip_prefix(&format!("{SESSION_COOKIE_NAME}="))
            .unwrap_or_default();
        let removed = value.is_empty() || set_cookie.contains("Max-Age=0");

        self.cookie = (!removed).then(|| pair.to_string());
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
