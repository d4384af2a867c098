use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use account_service::domain::ad::errors::AdError;
use account_service::domain::ad::models::Ad;
use account_service::domain::ad::models::AdId;
use account_service::domain::ad::ports::AdRepository;
use account_service::domain::ad::service::AdService;
use account_service::domain::auth::service::AuthService;
use account_service::domain::user::errors::UserError;
use account_service::domain::user::models::User;
use account_service::domain::user::models::UserCredentials;
use account_service::domain::user::models::UserId;
use account_service::domain::user::ports::UserRepository;
use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use uuid::Uuid;

/// Deterministic signing secret shared by the spawned server and the tests.
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory repositories.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

/// In-memory user store with the same contract as the Postgres adapter,
/// unique email index included.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        users.insert(user.id.0, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(&id.0).cloned())
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str() == email)
            .map(|u| UserCredentials {
                id: u.id,
                email: u.email.clone(),
                password_hash: u.password_hash.clone(),
            }))
    }

    async fn update_balance(&self, id: &UserId, balance: f64) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&id.0) {
            Some(user) => {
                user.balance = balance;
                Ok(())
            }
            None => Err(UserError::NotFound(id.to_string())),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.users
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or(UserError::NotFound(id.to_string()))
    }
}

/// In-memory ad store mirroring the Postgres adapter's contract.
#[derive(Default)]
pub struct InMemoryAdRepository {
    ads: Mutex<HashMap<Uuid, Ad>>,
}

#[async_trait]
impl AdRepository for InMemoryAdRepository {
    async fn create(&self, ad: Ad) -> Result<Ad, AdError> {
        self.ads.lock().unwrap().insert(ad.id.0, ad.clone());
        Ok(ad)
    }

    async fn find_by_id(&self, id: &AdId) -> Result<Option<Ad>, AdError> {
        Ok(self.ads.lock().unwrap().get(&id.0).cloned())
    }

    async fn update(&self, ad: Ad) -> Result<Ad, AdError> {
        let mut ads = self.ads.lock().unwrap();
        if !ads.contains_key(&ad.id.0) {
            return Err(AdError::NotFound(ad.id.to_string()));
        }
        ads.insert(ad.id.0, ad.clone());
        Ok(ad)
    }

    async fn delete(&self, id: &AdId) -> Result<(), AdError> {
        self.ads
            .lock()
            .unwrap()
            .remove(&id.0)
            .map(|_| ())
            .ok_or(AdError::NotFound(id.to_string()))
    }
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

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));
        let user_repository = Arc::new(InMemoryUserRepository::default());
        let ad_repository = Arc::new(InMemoryAdRepository::default());

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            Arc::clone(&authenticator),
        ));
        let user_service = Arc::new(UserService::new(user_repository));
        let ad_service = Arc::new(AdService::new(ad_repository));

        let router = create_router(auth_service, user_service, ad_service, authenticator);

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Server task failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn patch(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.patch(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Sign up an account with region US and zero balance.
    pub async fn signup(&self, email: &str, password: &str) {
        let response = self
            .post("/auth/signup")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "region": "US",
                "balance": 0.0,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success(), "Signup failed");
    }

    /// Log in and return the raw session token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/auth/login")
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success(), "Login failed");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token in login response")
            .to_string()
    }

    /// Sign up an account and log in, returning the session token.
    pub async fn signup_and_login(&self, email: &str, password: &str) -> String {
        self.signup(email, password).await;
        self.login(email, password).await
    }
}

/// Format a token as a bearer Authorization header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
