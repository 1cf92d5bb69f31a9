//! The authenticated chat endpoint's logic, independent of HTTP.
//!
//! A query is answered only for callers presenting `Authorization: Bearer
//! <token>` where the token verifies against the [`AuthService`]. The header
//! is checked before the query, so an unauthenticated caller always sees an
//! authentication failure regardless of what it sent.

use std::sync::Arc;

use thiserror::Error as ThisError;

use crate::Result;
use crate::auth::{AuthError, AuthService};
use crate::catalog::{QueryResponse, TopicMatcher};
use crate::constants::BEARER_PREFIX;

#[derive(Debug, ThisError)]
pub enum ChatError {
    #[error("Query is required")]
    EmptyQuery,
}

impl ChatError {
    pub fn is_validation_error(&self) -> bool {
        matches!(self, ChatError::EmptyQuery)
    }
}

impl From<ChatError> for crate::Error {
    fn from(err: ChatError) -> Self {
        crate::Error::Chat(err)
    }
}

/// Extract the token from a `Bearer <token>` header value.
///
/// The scheme is matched exactly, including case and the single space.
pub fn bearer_token(auth_header: Option<&str>) -> Result<&str> {
    auth_header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| AuthError::MissingBearer.into())
}

#[derive(Debug, Clone)]
pub struct ChatHandler {
    auth: Arc<AuthService>,
    matcher: Arc<TopicMatcher>,
}

impl ChatHandler {
    pub fn new(auth: Arc<AuthService>, matcher: Arc<TopicMatcher>) -> Self {
        Self { auth, matcher }
    }

    /// Check the `Authorization` header and return the caller's username.
    pub fn authorize(&self, auth_header: Option<&str>) -> Result<String> {
        let token = bearer_token(auth_header)?;
        self.auth.verify_token(token)
    }

    /// Answer a query for an already authorized caller.
    pub fn answer(&self, username: &str, query: Option<&str>) -> Result<QueryResponse> {
        let query = query.unwrap_or_default();
        if query.is_empty() {
            return Err(ChatError::EmptyQuery.into());
        }

        tracing::debug!("Answering query for {username}");
        Ok(self.matcher.match_query(query))
    }

    /// Authorize, validate and answer in one step.
    pub fn handle_query(
        &self,
        auth_header: Option<&str>,
        query: Option<&str>,
    ) -> Result<QueryResponse> {
        let username = self.authorize(auth_header)?;
        self.answer(&username, query)
    }
}
