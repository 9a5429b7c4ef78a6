//! End-to-end login/session flow over the in-memory adapters.

use chrono::{TimeDelta, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use demo_core::repositories::SessionCache;
use demo_core::services::{CredentialVerifier, SessionConfig, SessionManager};
use demo_core::{AuthError, ManualClock, UserInfo, UserRecord};
use demo_infrastructure::{MemoryCache, StaticUserDirectory};
use demo_security::PasswordService;

const PREFIX: &str = "demo_api:session:";

struct Harness {
    verifier: CredentialVerifier<StaticUserDirectory>,
    sessions: SessionManager<MemoryCache>,
    cache: Arc<MemoryCache>,
    clock: Arc<ManualClock>,
}

fn record(username: &str, password: &str, id: i64, email: &str) -> UserRecord {
    UserRecord {
        username: username.into(),
        password_credential: password.into(),
        id,
        email: email.into(),
    }
}

fn harness(timeout: Duration) -> Harness {
    let directory = StaticUserDirectory::new(vec![
        record("alice", "secret", 1, "a@x.com"),
        record("User1", "T3st1", 1001, "foo@test1.org"),
        record("User2", "T3st2", 1002, "foo2@test2.org"),
        record("User3", "T3st3", 1003, "foo3@test3.org"),
        record("hashed", &PasswordService::hash("h4shed").unwrap(), 7, "h@x.com"),
    ])
    .unwrap();

    let clock = Arc::new(ManualClock::new(Utc::now()));
    let cache = Arc::new(MemoryCache::new(clock.clone()));
    let sessions = SessionManager::new(
        cache.clone(),
        clock.clone(),
        SessionConfig {
            timeout,
            key_prefix: PREFIX.into(),
        },
    );

    Harness {
        verifier: CredentialVerifier::new(Arc::new(directory)),
        sessions,
        cache,
        clock,
    }
}

#[tokio::test]
async fn test_verify_every_registered_user() {
    let h = harness(Duration::from_secs(60));
    let users = [
        ("alice", "secret", 1, "a@x.com"),
        ("User1", "T3st1", 1001, "foo@test1.org"),
        ("User2", "T3st2", 1002, "foo2@test2.org"),
        ("User3", "T3st3", 1003, "foo3@test3.org"),
        ("hashed", "h4shed", 7, "h@x.com"),
    ];

    for (username, password, id, email) in users {
        let info = h.verifier.verify(username, password).await.unwrap();
        assert_eq!(info.id, id);
        assert_eq!(info.email, email);
        assert_eq!(info.username, username);

        assert_eq!(
            h.verifier.verify(username, "wrong-password").await,
            Err(AuthError::WrongCredential)
        );
    }

    assert_eq!(h.verifier.verify("nobody", "secret").await, Err(AuthError::UnknownUser));
}

#[tokio::test]
async fn test_full_session_lifecycle() {
    let h = harness(Duration::from_secs(60));

    let info = h.verifier.verify("alice", "secret").await.unwrap();
    assert_eq!(
        info,
        UserInfo {
            username: "alice".into(),
            id: 1,
            email: "a@x.com".into(),
        }
    );

    let session = h.sessions.create_session(&info).await.unwrap();
    assert_eq!(session.user, "alice");

    let validated = h
        .sessions
        .validate(&session.session_key, &session.api_token)
        .await
        .unwrap();
    assert_eq!(validated, info);

    h.sessions.destroy_session(&session.session_key).await.unwrap();
    assert_eq!(
        h.sessions.validate(&session.session_key, &session.api_token).await,
        Err(AuthError::SessionNotFound)
    );
}

#[tokio::test]
async fn test_wrong_api_token_is_mismatch() {
    let h = harness(Duration::from_secs(60));
    let info = h.verifier.verify("User1", "T3st1").await.unwrap();
    let session = h.sessions.create_session(&info).await.unwrap();

    assert_eq!(
        h.sessions.validate(&session.session_key, "1ANOTHER_RND_TOKEN").await,
        Err(AuthError::TokenMismatch)
    );
    // another session's api token does not fit either
    let other = h.sessions.create_session(&info).await.unwrap();
    assert_eq!(
        h.sessions.validate(&session.session_key, &other.api_token).await,
        Err(AuthError::TokenMismatch)
    );
}

#[tokio::test]
async fn test_unknown_session_key() {
    let h = harness(Duration::from_secs(60));
    assert_eq!(
        h.sessions.validate("1RANDOM_TOKEN", "1ANOTHER_RND_TOKEN").await,
        Err(AuthError::SessionNotFound)
    );
}

#[tokio::test]
async fn test_destroy_twice_is_noop() {
    let h = harness(Duration::from_secs(60));
    let info = h.verifier.verify("User2", "T3st2").await.unwrap();
    let session = h.sessions.create_session(&info).await.unwrap();

    assert_eq!(h.sessions.destroy_session(&session.session_key).await, Ok(()));
    assert_eq!(h.sessions.destroy_session(&session.session_key).await, Ok(()));
    assert_eq!(h.sessions.destroy_session("never-existed").await, Ok(()));
    assert_eq!(
        h.sessions.validate(&session.session_key, &session.api_token).await,
        Err(AuthError::SessionNotFound)
    );
}

#[tokio::test]
async fn test_session_expires_after_ttl() {
    let h = harness(Duration::from_secs(1));
    let info = h.verifier.verify("alice", "secret").await.unwrap();
    let session = h.sessions.create_session(&info).await.unwrap();

    // t = 0
    assert!(h.sessions.validate(&session.session_key, &session.api_token).await.is_ok());

    // t = 2
    h.clock.advance(TimeDelta::seconds(2));
    assert_eq!(
        h.sessions.validate(&session.session_key, &session.api_token).await,
        Err(AuthError::SessionNotFound)
    );
}

#[tokio::test]
async fn test_validate_does_not_extend_expiry() {
    let h = harness(Duration::from_secs(10));
    let info = h.verifier.verify("alice", "secret").await.unwrap();
    let session = h.sessions.create_session(&info).await.unwrap();

    for _ in 0..9 {
        h.clock.advance(TimeDelta::seconds(1));
        assert!(h.sessions.validate(&session.session_key, &session.api_token).await.is_ok());
    }
    h.clock.advance(TimeDelta::seconds(1));
    assert_eq!(
        h.sessions.validate(&session.session_key, &session.api_token).await,
        Err(AuthError::SessionNotFound)
    );
}

#[tokio::test]
async fn test_sessions_for_same_user_never_collide() {
    let h = harness(Duration::from_secs(60));
    let info = h.verifier.verify("alice", "secret").await.unwrap();

    let mut keys = HashSet::new();
    let mut tokens = HashSet::new();
    for _ in 0..1000 {
        let session = h.sessions.create_session(&info).await.unwrap();
        assert!(keys.insert(session.session_key));
        assert!(tokens.insert(session.api_token));
    }
    assert_eq!(h.cache.len(), 1000);
}

#[tokio::test]
async fn test_cache_keys_are_namespaced() {
    let h = harness(Duration::from_secs(60));
    let info = h.verifier.verify("alice", "secret").await.unwrap();
    let session = h.sessions.create_session(&info).await.unwrap();

    let namespaced = format!("{}{}", PREFIX, session.session_key);
    assert!(h.cache.get(&namespaced).await.unwrap().is_some());
    assert!(h.cache.get(&session.session_key).await.unwrap().is_none());

    // an unrelated value under the bare key is not mistaken for a session
    h.cache
        .set(&session.session_key, b"unrelated".to_vec(), Duration::from_secs(60))
        .await
        .unwrap();
    assert_eq!(
        h.sessions.validate(&session.session_key, &session.api_token).await,
        Ok(info)
    );
}
