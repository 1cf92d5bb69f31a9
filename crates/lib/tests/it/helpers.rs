#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use aiguide::{
    Clock, FixedClock, FixedRandom, RandomSource,
    auth::{AuthService, TokenSigner},
    catalog::{Catalog, TopicMatcher},
    chat::ChatHandler,
    server::AppState,
    user::CredentialStore,
};
use tokio::task::JoinHandle;

pub const TEST_SECRET: &str = "integration-test-secret";

// ==========================
// CORE TEST FACTORIES
// ==========================

/// Auth service over an empty store, signing with [`TEST_SECRET`] and a [`FixedClock`].
pub fn test_auth() -> (Arc<AuthService>, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::default());
    let auth = test_auth_with(TEST_SECRET, clock.clone());
    (auth, clock)
}

/// Auth service with an explicit secret and clock.
pub fn test_auth_with(secret: &str, clock: Arc<FixedClock>) -> Arc<AuthService> {
    let signer = TokenSigner::from_secret(secret).expect("valid secret");
    Arc::new(AuthService::new(
        Arc::new(CredentialStore::new()),
        signer,
        clock,
    ))
}

/// Matcher over the built-in catalog with a scripted random source.
pub fn fixed_matcher(script: &[usize]) -> Arc<TopicMatcher> {
    matcher_with(Catalog::builtin(), Arc::new(FixedRandom::new(script.to_vec())))
}

pub fn matcher_with(catalog: Catalog, random: Arc<dyn RandomSource>) -> Arc<TopicMatcher> {
    Arc::new(TopicMatcher::new(Arc::new(catalog), random))
}

/// Chat handler plus the auth service it verifies against.
pub fn test_chat(script: &[usize]) -> (ChatHandler, Arc<AuthService>) {
    let (auth, _clock) = test_auth();
    let chat = ChatHandler::new(auth.clone(), fixed_matcher(script));
    (chat, auth)
}

/// Register a user, panicking on failure, and return the issued token.
pub async fn register(auth: &AuthService, username: &str, password: &str) -> String {
    auth.register(username, password)
        .await
        .expect("Failed to register user")
        .token
}

// ==========================
// HTTP SERVER
// ==========================

/// A server running on an ephemeral local port for the duration of a test.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub clock: Arc<FixedClock>,
    task: JoinHandle<()>,
}

impl TestServer {
    /// Start a server using the built-in catalog and a scripted random source.
    pub async fn start(script: &[usize]) -> Self {
        let (auth, clock) = test_auth();
        let state = AppState::new(
            auth,
            fixed_matcher(script),
            clock.clone() as Arc<dyn Clock>,
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let task = tokio::spawn(async move {
            aiguide::server::serve(listener, state, std::future::pending())
                .await
                .expect("Server failed");
        });

        Self {
            addr,
            client: reqwest::Client::new(),
            clock,
            task,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// POST a JSON body, optionally with an `Authorization` header.
    pub async fn post(
        &self,
        path: &str,
        auth_header: Option<&str>,
        body: serde_json::Value,
    ) -> (reqwest::StatusCode, serde_json::Value) {
        let mut request = self.client.post(self.url(path)).json(&body);
        if let Some(value) = auth_header {
            request = request.header("Authorization", value);
        }
        let response = request.send().await.expect("Request failed");
        let status = response.status();
        let body: serde_json::Value = response.json().await.expect("Response was not JSON");
        (status, body)
    }

    /// Register through the API and return the token.
    pub async fn register(&self, username: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/api/auth/register",
                None,
                serde_json::json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(status, reqwest::StatusCode::OK, "register failed: {body}");
        body["token"].as_str().expect("token").to_string()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
