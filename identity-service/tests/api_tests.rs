mod common;

use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use common::TOKEN_LIFETIME_SECONDS;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/health")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app.register("a@x.com", "pw123", "Ann").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["data"]["email"], "a@x.com");
    assert_eq!(body["data"]["displayName"], "Ann");
    assert_eq!(body["data"]["emailVerified"], false);
    assert!(body["data"]["userId"].is_string());
    assert!(body["data"]["createdAt"].is_string());
    assert!(body["data"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    let first = app.register("a@x.com", "pw123", "Ann").await;
    assert_eq!(first.status(), StatusCode::CREATED);

    // Different password and display name, same email
    let response = app.register("a@x.com", "pw456", "Ann2").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already in use"));
}

#[tokio::test]
async fn test_register_duplicate_email_differing_case() {
    let app = TestApp::spawn().await;

    app.register("a@x.com", "pw123", "Ann").await;
    let response = app.register("A@X.COM", "pw123", "Ann").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app.register("not-an-email", "pw123", "Ann").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_register_blank_display_name() {
    let app = TestApp::spawn().await;

    let response = app.register("a@x.com", "pw123", "   ").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    let register_body: serde_json::Value = app
        .register("a@x.com", "pw123", "Ann")
        .await
        .json()
        .await
        .expect("Failed to parse response");

    let response = app.login("a@x.com", "pw123").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert_eq!(body["data"]["expiresInSeconds"], TOKEN_LIFETIME_SECONDS);
    assert_eq!(body["data"]["userId"], register_body["data"]["userId"]);
    assert_eq!(body["data"]["email"], "a@x.com");

    assert_eq!(app.token_validator.extract_email(token).unwrap(), "a@x.com");
}

#[tokio::test]
async fn test_login_failures_are_identical() {
    let app = TestApp::spawn().await;

    app.register("a@x.com", "pw123", "Ann").await;

    let wrong_password = app.login("a@x.com", "wrong").await;
    let unknown_email = app.login("nobody@x.com", "pw123").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_email: serde_json::Value = unknown_email.json().await.unwrap();

    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_malformed_email_is_invalid_credentials() {
    let app = TestApp::spawn().await;

    let response = app.login("not-an-email", "pw123").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_me_returns_current_identity() {
    let app = TestApp::spawn().await;

    let token = app.token_for("a@x.com", "pw123", "Ann").await;

    let response = app
        .get_authenticated("/api/auth/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "a@x.com");
    assert_eq!(body["data"]["displayName"], "Ann");
    assert_eq!(body["data"]["emailVerified"], false);
    assert!(body["data"]["userId"].is_string());
}

#[tokio::test]
async fn test_me_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["data"]["message"].is_string());
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/api/auth/me", "invalid")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_altered_signature() {
    let app = TestApp::spawn().await;

    let token = app.token_for("a@x.com", "pw123", "Ann").await;
    let (head, signature) = token.rsplit_once('.').unwrap();
    let replacement = if signature.starts_with('A') { "B" } else { "A" };
    let tampered = format!("{}.{}{}", head, replacement, &signature[1..]);

    let response = app
        .get_authenticated("/api/auth/me", &tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_expired_token() {
    let app = TestApp::spawn().await;

    let register_body: serde_json::Value = app
        .register("a@x.com", "pw123", "Ann")
        .await
        .json()
        .await
        .unwrap();
    let user_id = register_body["data"]["userId"].as_str().unwrap();

    let issued = Utc::now() - Duration::seconds(TOKEN_LIFETIME_SECONDS + 1);
    let expired = app
        .token_issuer
        .issue_at(user_id, "a@x.com", issued)
        .unwrap();

    let response = app
        .get_authenticated("/api/auth/me", &expired)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_token_for_unknown_user() {
    let app = TestApp::spawn().await;

    let token = app
        .token_issuer
        .issue(uuid::Uuid::new_v4(), "ghost@x.com")
        .unwrap();

    let response = app
        .get_authenticated("/api/auth/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_full_credential_workflow() {
    let app = TestApp::spawn().await;

    // 1. Register
    let register_response = app.register("a@x.com", "pw123", "Ann").await;
    assert_eq!(register_response.status(), StatusCode::CREATED);
    let register_body: serde_json::Value = register_response.json().await.unwrap();
    assert_eq!(register_body["data"]["emailVerified"], false);

    // 2. Duplicate registration
    let duplicate = app.register("a@x.com", "pw456", "Ann2").await;
    assert_eq!(duplicate.status(), StatusCode::CONFLICT);

    // 3. Login
    let login_response = app.login("a@x.com", "pw123").await;
    assert_eq!(login_response.status(), StatusCode::OK);
    let login_body: serde_json::Value = login_response.json().await.unwrap();
    assert_eq!(login_body["data"]["expiresInSeconds"], 3600);
    let token = login_body["data"]["token"].as_str().unwrap().to_string();

    // 4. Wrong password
    let rejected = app.login("a@x.com", "wrong").await;
    assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);

    // 5. Current identity
    let me_response = app
        .get_authenticated("/api/auth/me", &token)
        .send()
        .await
        .unwrap();
    assert_eq!(me_response.status(), StatusCode::OK);
    let me_body: serde_json::Value = me_response.json().await.unwrap();
    assert_eq!(me_body["data"]["userId"], register_body["data"]["userId"]);

    // 6. Login without a password is rejected
    let bad_body = app
        .post("/api/auth/login")
        .json(&json!({ "email": "a@x.com" }))
        .send()
        .await
        .unwrap();
    assert!(bad_body.status().is_client_error());
}
