//! User listing, dashboard and public endpoints.

use axum::http::{StatusCode, header};

use backoffice_admin::db::{InMemoryCredentialStore, InMemoryUserDirectory};
use backoffice_integration_tests::{TestClient, seeded_credentials};

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_users_index_lists_users_by_id() {
    let mut client = TestClient::new();
    client.login().await;

    let response = client.get("/admin/users").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Users List"));
    for column in ["<th>ID</th>", "<th>Name</th>", "<th>Email</th>"] {
        assert!(response.body.contains(column), "missing {column}");
    }

    let alice = response.body.find("alice@example.com").expect("Alice listed");
    let bob = response.body.find("bob@example.com").expect("Bob listed");
    assert!(alice < bob, "users should be ordered by id");
}

#[tokio::test]
async fn test_users_index_empty_state() {
    let mut client =
        TestClient::with_stores(seeded_credentials(), InMemoryUserDirectory::default());
    client.login().await;

    let response = client.get("/admin/users").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("No users found"));
}

#[tokio::test]
async fn test_users_index_highlights_sidebar_link() {
    let mut client = TestClient::new();
    client.login().await;

    let response = client.get("/admin/users").await;

    assert!(
        response
            .body
            .contains(r#"<a href="/admin/users" class="active">Users</a>"#)
    );
}

#[tokio::test]
async fn test_user_show() {
    let mut client = TestClient::new();
    client.login().await;

    let response = client.get("/admin/users/2").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Bob"));
    assert!(response.body.contains("bob@example.com"));
}

#[tokio::test]
async fn test_user_show_missing_is_not_found() {
    let mut client = TestClient::new();
    client.login().await;

    for path in ["/admin/users/999", "/admin/users/abc", "/admin/users/-1"] {
        let response = client.get(path).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert!(response.body.contains("404"), "{path}");
    }
}

// ============================================================================
// Dashboard and layout
// ============================================================================

#[tokio::test]
async fn test_dashboard_shows_layout() {
    let mut client = TestClient::new();
    client.login().await;

    let response = client.get("/admin/dashboard").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Admin Panel"));
    assert!(response.body.contains(r#"action="/admin/logout""#));
    assert!(response.body.contains("a@x.com"));
    // Two seeded users
    assert!(response.body.contains(r#"<span class="metric-value">2</span>"#));
}

// ============================================================================
// Public endpoints
// ============================================================================

#[tokio::test]
async fn test_welcome_page() {
    let mut client = TestClient::new();

    let response = client.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"href="/admin/login""#));
}

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new();

    let response = client.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_readiness_reflects_credential_store() {
    let mut ready = TestClient::new();
    assert_eq!(ready.get("/health/ready").await.status, StatusCode::OK);

    let mut unavailable = TestClient::with_stores(
        InMemoryCredentialStore::unavailable(),
        InMemoryUserDirectory::default(),
    );
    assert_eq!(
        unavailable.get("/health/ready").await.status,
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let mut client = TestClient::new();

    let response = client.get("/static/css/admin.css").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(".sidebar"));
}

#[tokio::test]
async fn test_unknown_public_path_is_not_found() {
    let mut client = TestClient::new();

    assert_eq!(client.get("/nope").await.status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Response headers
// ============================================================================

#[tokio::test]
async fn test_responses_carry_request_id_and_security_headers() {
    let mut client = TestClient::new();

    let response = client.get("/admin/login").await;

    assert!(response.headers.contains_key("x-request-id"));
    assert_eq!(
        response.headers.get(header::X_FRAME_OPTIONS).map(|v| v.as_bytes()),
        Some(b"DENY".as_slice())
    );
    assert_eq!(
        response.headers.get(header::X_CONTENT_TYPE_OPTIONS).map(|v| v.as_bytes()),
        Some(b"nosniff".as_slice())
    );
}
