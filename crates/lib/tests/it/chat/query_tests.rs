//! Chat authorization and query validation, without HTTP.

use aiguide::{Error, ErrorKind, auth::AuthError, chat::ChatError};

use crate::helpers::*;

#[tokio::test]
async fn test_authenticated_query_is_answered() {
    let (chat, auth) = test_chat(&[0]);
    let token = register(&auth, "alice", "password").await;

    let response = chat
        .handle_query(Some(&format!("Bearer {token}")), Some("help me save money"))
        .unwrap();
    assert_eq!(response.ai_tool.unwrap().name, "Cleo AI");
    assert!(response.description.starts_with("Great question about money!"));
}

#[tokio::test]
async fn test_authorization_checked_before_query() {
    let (chat, _) = test_chat(&[0]);

    for header in [None, Some("Token abc"), Some("bearer abc")] {
        for query in [None, Some(""), Some("budget")] {
            let err = chat.handle_query(header, query).unwrap_err();
            assert!(
                matches!(err, Error::Auth(AuthError::MissingBearer)),
                "header {header:?} query {query:?} gave {err}"
            );
            assert_eq!(err.kind(), ErrorKind::Authentication);
        }
    }
}

#[tokio::test]
async fn test_forged_token_rejected() {
    let (chat, _) = test_chat(&[0]);
    let err = chat
        .handle_query(Some("Bearer abc.def"), Some("budget"))
        .unwrap_err();
    assert!(err.is_authentication_error());
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let (auth, clock) = test_auth();
    let chat = aiguide::chat::ChatHandler::new(auth.clone(), fixed_matcher(&[0]));
    let token = register(&auth, "alice", "password").await;
    let header = format!("Bearer {token}");

    assert!(chat.authorize(Some(&header)).is_ok());
    clock.advance_secs(8 * 24 * 60 * 60);
    let err = chat.authorize(Some(&header)).unwrap_err();
    assert!(matches!(err, Error::Auth(AuthError::TokenExpired { .. })));
}

#[tokio::test]
async fn test_empty_query_with_valid_token() {
    let (chat, auth) = test_chat(&[0]);
    let token = register(&auth, "alice", "password").await;
    let header = format!("Bearer {token}");

    for query in [None, Some("")] {
        let err = chat.handle_query(Some(&header), query).unwrap_err();
        assert!(matches!(err, Error::Chat(ChatError::EmptyQuery)));
        assert_eq!(err.to_string(), "Query is required");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}

#[tokio::test]
async fn test_authorize_returns_username() {
    let (chat, auth) = test_chat(&[0]);
    let token = register(&auth, "bob", "password").await;
    assert_eq!(chat.authorize(Some(&format!("Bearer {token}"))).unwrap(), "bob");
}
