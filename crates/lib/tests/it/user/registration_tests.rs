//! Registration rules: lengths, duplicates, and concurrent check-then-insert.

use aiguide::{Error, ErrorKind, auth::AuthError, user::UserError};

use crate::helpers::*;

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let (auth, _) = test_auth();
    register(&auth, "alice", "password1").await;

    let err = auth.register("alice", "password2").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(matches!(
        err,
        Error::User(UserError::UsernameAlreadyExists { .. })
    ));

    // The original password still works; the second one was never stored.
    assert!(auth.login("alice", "password1").await.is_ok());
    assert!(auth.login("alice", "password2").await.is_err());
}

#[tokio::test]
async fn test_length_boundaries() {
    let (auth, _) = test_auth();

    let err = auth.register("ab", "123456").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "Username must be at least 3 characters");

    let err = auth.register("abc", "12345").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.to_string(), "Password must be at least 6 characters");

    let grant = auth.register("abc", "123456").await.unwrap();
    assert_eq!(grant.username, "abc");
    assert_eq!(auth.store().len(), 1);
}

#[tokio::test]
async fn test_missing_fields() {
    let (auth, _) = test_auth();
    for (username, password) in [("", "123456"), ("alice", ""), ("", "")] {
        let err = auth.register(username, password).await.unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::MissingCredentials)));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
    assert!(auth.store().is_empty());
}

#[tokio::test]
async fn test_stored_hash_is_not_the_password() {
    let (auth, _) = test_auth();
    register(&auth, "alice", "hunter22").await;

    let user = auth.store().get("alice").unwrap();
    assert_ne!(user.password_hash, "hunter22");
    assert!(user.password_hash.starts_with("$argon2id$"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registration_admits_one() {
    let (auth, _) = test_auth();

    let attempts: Vec<_> = (0..8)
        .map(|i| {
            let auth = auth.clone();
            tokio::spawn(async move { auth.register("racer", &format!("password-{i}")).await })
        })
        .collect();

    let mut successes = 0;
    let mut conflicts = 0;
    for attempt in attempts {
        match attempt.await.unwrap() {
            Ok(_) => successes += 1,
            Err(e) if e.is_conflict() => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(auth.store().usernames(), vec!["racer"]);
}
