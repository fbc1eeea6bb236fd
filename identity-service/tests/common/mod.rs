use std::sync::Arc;

use auth::JwtHandler;
use auth::PasswordHasher;
use auth::TokenIssuer;
use auth::TokenValidator;
use chrono::Duration;
use identity_service::domain::user::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryUserRepository;
use serde_json::json;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_LIFETIME_SECONDS: i64 = 3600;

/// Test application that spawns a real server backed by the in-memory store
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    /// Shares the server's secret, for minting tokens directly
    pub token_issuer: TokenIssuer,
    pub token_validator: TokenValidator,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let jwt_handler = Arc::new(JwtHandler::new(JWT_SECRET).expect("Weak test secret"));
        let lifetime = Duration::seconds(TOKEN_LIFETIME_SECONDS);

        let auth_service = Arc::new(AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(PasswordHasher::new()),
            Arc::new(TokenIssuer::new(Arc::clone(&jwt_handler), lifetime)),
        ));
        let token_validator = Arc::new(TokenValidator::new(Arc::clone(&jwt_handler)));

        let router = create_router(auth_service, token_validator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            token_issuer: TokenIssuer::new(Arc::clone(&jwt_handler), lifetime),
            token_validator: TokenValidator::new(jwt_handler),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub async fn register(&self, email: &str, password: &str, display_name: &str) -> reqwest::Response {
        self.post("/api/auth/register")
            .json(&json!({
                "email": email,
                "password": password,
                "displayName": display_name
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&json!({
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register then log in, returning the issued token
    pub async fn token_for(&self, email: &str, password: &str, display_name: &str) -> String {
        self.register(email, password, display_name).await;
        let body: serde_json::Value = self
            .login(email, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token")
            .to_string()
    }
}
