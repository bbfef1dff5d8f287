use std::net::SocketAddr;
use std::sync::Arc;

use credentials::PasswordHasher;
use credentials::TokenSigner;
use serde_json::json;
use token_service::auth::clock::SystemClock;
use token_service::auth::service::AuthOptions;
use token_service::auth::service::AuthService;
use token_service::inbound::http::router::create_router;
use token_service::outbound::InMemoryRefreshTokenStore;
use token_service::outbound::InMemoryUserDirectory;

const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
const TEST_ISSUER: &str = "token-service-tests";
const TEST_AUDIENCE: &str = "token-service-test-clients";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// Handles onto the same adapters the running service uses, so tests
    /// can inspect store state after driving the HTTP surface.
    pub store: Arc<InMemoryRefreshTokenStore>,
    pub directory: Arc<InMemoryUserDirectory>,
    pub signer: TokenSigner,
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

        let hasher = PasswordHasher::new();
        let directory = Arc::new(InMemoryUserDirectory::seeded(&hasher));
        let store = Arc::new(InMemoryRefreshTokenStore::new());

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&directory),
            Arc::clone(&store),
            TokenSigner::new(TEST_SECRET, TEST_ISSUER, TEST_AUDIENCE, 5),
            SystemClock,
            AuthOptions::default(),
        ));

        let router = create_router(auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            store,
            directory,
            signer: TokenSigner::new(TEST_SECRET, TEST_ISSUER, TEST_AUDIENCE, 5),
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn refresh(&self, refresh_token: &str) -> reqwest::Response {
        self.post("/api/auth/refresh")
            .json(&json!({
                "refresh_token": refresh_token
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
