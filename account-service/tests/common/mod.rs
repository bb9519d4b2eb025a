use std::sync::Arc;

use account_service::domain::profile::service::ProfileService;
use account_service::domain::user::service::AccountService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::InMemoryProfileRepository;
use account_service::outbound::repositories::InMemoryUserRepository;
use auth::Authenticator;
use serde_json::json;

/// Test application that spawns a real server over in-memory stores
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().expect("no local addr").port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(InMemoryUserRepository::new());
        let profile_repository = Arc::new(InMemoryProfileRepository::new());
        let authenticator = Arc::new(Authenticator::new(b"test_secret_key_at_least_32_bytes!"));

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&user_repository),
            Arc::clone(&authenticator),
            24,
        ));
        let profile_service = Arc::new(ProfileService::new(user_repository, profile_repository));

        let application = create_router(account_service, profile_service, authenticator);

        tokio::spawn(async move { axum::serve(listener, application).await });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Register a fixed test user and log in, returning the bearer token
    pub async fn register_and_login(&self) -> String {
        let response = self
            .post("/api/register")
            .json(&json!({
                "email": "test@example.com",
                "username": "testuser",
                "password": "12345678"
            }))
            .send()
            .await
            .expect("Failed to execute register request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self
            .post("/api/login")
            .json(&json!({
                "email": "test@example.com",
                "password": "12345678"
            }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }
}
