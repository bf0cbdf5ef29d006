//! Unit tests for the in-memory session store

use crate::domain::entities::{AuthenticationSessionInfo, UserRequest};
use crate::domain::value_objects::AuthenticationHash;
use crate::repositories::session::{InMemorySessionStore, SessionStore};

fn session() -> AuthenticationSessionInfo {
    AuthenticationSessionInfo::new(
        UserRequest::new("+37200000766", "60001019906").unwrap(),
        AuthenticationHash::generate_random_of_default_type(),
    )
}

#[tokio::test]
async fn test_save_and_take_session() {
    let store = InMemorySessionStore::new(300);
    let session = session();

    store.save("token-1", &session).await.unwrap();
    assert_eq!(store.len().await, 1);

    let taken = store.take("token-1").await.unwrap();
    assert_eq!(taken, Some(session));
}

#[tokio::test]
async fn test_take_consumes_session() {
    let store = InMemorySessionStore::new(300);
    store.save("token-1", &session()).await.unwrap();

    assert!(store.take("token-1").await.unwrap().is_some());
    assert!(store.take("token-1").await.unwrap().is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_take_unknown_token() {
    let store = InMemorySessionStore::default();
    assert!(store.take("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_replaces_existing_session() {
    let store = InMemorySessionStore::new(300);
    let first = session();
    let second = session();

    store.save("token-1", &first).await.unwrap();
    store.save("token-1", &second).await.unwrap();

    assert_eq!(store.len().await, 1);
    assert_eq!(store.take("token-1").await.unwrap(), Some(second));
}

#[tokio::test]
async fn test_remove_session() {
    let store = InMemorySessionStore::new(300);
    store.save("token-1", &session()).await.unwrap();

    assert!(store.remove("token-1").await.unwrap());
    assert!(!store.remove("token-1").await.unwrap());
    assert!(store.take("token-1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_expired_session_is_not_returned() {
    let store = InMemorySessionStore::new(0);
    store.save("token-1", &session()).await.unwrap();

    assert!(store.take("token-1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_purge_expired() {
    let expired = InMemorySessionStore::new(0);
    expired.save("a", &session()).await.unwrap();
    expired.save("b", &session()).await.unwrap();
    assert_eq!(expired.purge_expired().await, 2);
    assert!(expired.is_empty().await);

    let live = InMemorySessionStore::new(300);
    live.save("a", &session()).await.unwrap();
    assert_eq!(live.purge_expired().await, 0);
    assert_eq!(live.len().await, 1);
}

#[tokio::test]
async fn test_oversized_ttl_keeps_sessions_reachable() {
    for ttl_seconds in [100_000_000_000_000_000, u64::MAX] {
        let store = InMemorySessionStore::new(ttl_seconds);
        let session = session();

        store.save("token-1", &session).await.unwrap();
        assert_eq!(store.purge_expired().await, 0);
        assert_eq!(store.take("token-1").await.unwrap(), Some(session));
    }
}
