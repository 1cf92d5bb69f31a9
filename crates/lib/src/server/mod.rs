//! HTTP surface
//!
//! Routes:
//! - `GET  /health`            - liveness plus user and category counts
//! - `POST /api/auth/register` - `{username, password}` → `{token, username}`
//! - `POST /api/auth/login`    - `{username, password}` → `{token, username}`
//! - `POST /api/chat`          - bearer token + `{query}` → `{description, videoUrl?, aiTool?}`

pub mod error;
pub mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use crate::Result;
use crate::auth::AuthService;
use crate::catalog::TopicMatcher;
use crate::chat::ChatHandler;
use crate::clock::Clock;

pub use error::ApiError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub matcher: Arc<TopicMatcher>,
    pub chat: ChatHandler,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>, matcher: Arc<TopicMatcher>, clock: Arc<dyn Clock>) -> Self {
        let chat = ChatHandler::new(Arc::clone(&auth), Arc::clone(&matcher));
        Self {
            auth,
            matcher,
            chat,
            clock,
        }
    }
}

/// Build the router with all routes attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::handle_health))
        .route("/api/auth/register", post(handlers::handle_register))
        .route("/api/auth/login", post(handlers::handle_login))
        .route("/api/chat", post(handlers::handle_chat))
        .with_state(state)
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Listening on {addr}");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}
