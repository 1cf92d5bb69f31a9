//! axum handlers for the JSON API.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, header::AUTHORIZATION},
};
use serde::{Deserialize, Serialize};

use super::AppState;
use super::error::ApiError;
use crate::catalog::QueryResponse;
use crate::user::AuthGrant;

const REGISTRATION_FAILED: &str = "Registration failed";
const LOGIN_FAILED: &str = "Login failed";
const CHAT_FAILED: &str = "Failed to process query";

/// Body of the register and login requests.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Body of the chat request.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    pub query: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub users: usize,
    pub categories: usize,
    pub time: String,
}

/// Handler for GET /health
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        users: state.auth.store().len(),
        categories: state.matcher.catalog().len(),
        time: state.clock.now_rfc3339(),
    })
}

/// Handler for POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<AuthGrant>, ApiError> {
    let Json(request) = body.map_err(ApiError::from_rejection)?;
    state
        .auth
        .register(
            request.username.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await
        .map(Json)
        .map_err(|e| ApiError::from_error(e, REGISTRATION_FAILED))
}

/// Handler for POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<AuthGrant>, ApiError> {
    let Json(request) = body.map_err(ApiError::from_rejection)?;
    state
        .auth
        .login(
            request.username.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
        )
        .await
        .map(Json)
        .map_err(|e| ApiError::from_error(e, LOGIN_FAILED))
}

/// Handler for POST /api/chat
///
/// The bearer header is checked before the body is looked at.
pub async fn handle_chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, ApiError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let username = state
        .chat
        .authorize(auth_header)
        .map_err(|e| ApiError::from_error(e, CHAT_FAILED))?;

    let Json(request) = body.map_err(ApiError::from_rejection)?;
    state
        .chat
        .answer(&username, request.query.as_deref())
        .map(Json)
        .map_err(|e| ApiError::from_error(e, CHAT_FAILED))
}
