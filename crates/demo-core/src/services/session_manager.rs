//! Session token issuing, validation, and invalidation

use chrono::TimeDelta;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use demo_security::{constant_time_eq, generate_token};

use crate::clock::Clock;
use crate::domain::{Session, StoredSession, UserInfo};
use crate::error::AuthError;
use crate::repositories::SessionCache;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Lifetime of a session; also the TTL handed to the cache.
    pub timeout: Duration,
    /// Namespace prepended to every cache key.
    pub key_prefix: String,
}

/// Issues token pairs into a TTL cache and checks them on later requests.
///
/// Sessions are never refreshed: `validate` is read-only and expiry is fixed
/// at creation.
pub struct SessionManager<C: SessionCache + ?Sized> {
    cache: Arc<C>,
    clock: Arc<dyn Clock>,
    config: SessionConfig,
}

impl<C: SessionCache + ?Sized> SessionManager<C> {
    pub fn new(cache: Arc<C>, clock: Arc<dyn Clock>, config: SessionConfig) -> Self {
        Self { cache, clock, config }
    }

    fn cache_key(&self, session_key: &str) -> String {
        format!("{}{}", self.config.key_prefix, session_key)
    }

    /// Mint a session for an already verified user and store it.
    pub async fn create_session(&self, user: &UserInfo) -> Result<Session, AuthError> {
        let created_at = self.clock.now();
        let lifetime = TimeDelta::from_std(self.config.timeout).unwrap_or(TimeDelta::MAX);
        let expires_at = created_at
            .checked_add_signed(lifetime)
            .unwrap_or(chrono::DateTime::<chrono::Utc>::MAX_UTC);

        let session = Session {
            session_key: generate_token(),
            api_token: generate_token(),
            user: user.username.clone(),
            created_at,
            expires_at,
        };

        let stored = StoredSession {
            api_token: session.api_token.clone(),
            user: user.clone(),
            created_at,
            expires_at,
        };
        let value = serde_json::to_vec(&stored).map_err(|e| {
            error!("Failed to encode session for {}: {}", user.username, e);
            AuthError::CollaboratorUnavailable(format!("session encoding failed: {}", e))
        })?;

        self.cache
            .set(&self.cache_key(&session.session_key), value, self.config.timeout)
            .await?;

        info!("Session created for: {} (expires at {})", user.username, expires_at);
        Ok(session)
    }

    /// Resolve a session key and api token back to the user that owns them.
    pub async fn validate(&self, session_key: &str, api_token: &str) -> Result<UserInfo, AuthError> {
        if session_key.is_empty() {
            return Err(AuthError::SessionNotFound);
        }

        let raw = self
            .cache
            .get(&self.cache_key(session_key))
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        let stored: StoredSession = serde_json::from_slice(&raw).map_err(|e| {
            error!("Undecodable session entry in cache: {}", e);
            AuthError::CollaboratorUnavailable(format!("undecodable session entry: {}", e))
        })?;

        if stored.is_expired(self.clock.now()) {
            debug!("Session for {} is past expiry", stored.user.username);
            return Err(AuthError::SessionNotFound);
        }

        if !constant_time_eq(stored.api_token.as_bytes(), api_token.as_bytes()) {
            warn!("Api token mismatch for session of: {}", stored.user.username);
            return Err(AuthError::TokenMismatch);
        }

        Ok(stored.user)
    }

    /// Remove a session. Absent keys are a logged no-op.
    pub async fn destroy_session(&self, session_key: &str) -> Result<(), AuthError> {
        if session_key.is_empty() {
            debug!("Destroy requested with empty session key, nothing to do");
            return Ok(());
        }

        if self.cache.delete(&self.cache_key(session_key)).await? {
            info!("Session destroyed");
        } else {
            debug!("Destroy requested for a session that is not active");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::CollaboratorError;
    use crate::repositories::MockSessionCache;
    use chrono::Utc;

    fn alice() -> UserInfo {
        UserInfo {
            username: "alice".into(),
            id: 1,
            email: "a@x.com".into(),
        }
    }

    fn config() -> SessionConfig {
        SessionConfig {
            timeout: Duration::from_secs(60),
            key_prefix: "test:session:".into(),
        }
    }

    fn stored_entry(api_token: &str, clock: &ManualClock, lifetime: TimeDelta) -> Vec<u8> {
        let now = clock.now();
        serde_json::to_vec(&StoredSession {
            api_token: api_token.into(),
            user: alice(),
            created_at: now,
            expires_at: now + lifetime,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_writes_prefixed_key_with_timeout() {
        let mut cache = MockSessionCache::new();
        cache
            .expect_set()
            .withf(|key, value, ttl| {
                let stored: StoredSession = serde_json::from_slice(value).unwrap();
                key.starts_with("test:session:")
                    && key.len() == "test:session:".len() + 64
                    && *ttl == Duration::from_secs(60)
                    && stored.user.username == "alice"
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let clock = Arc::new(ManualClock::new(Utc::now()));
        let manager = SessionManager::new(Arc::new(cache), clock.clone(), config());
        let session = manager.create_session(&alice()).await.unwrap();

        assert_eq!(session.user, "alice");
        assert_ne!(session.session_key, session.api_token);
        assert_eq!(session.expires_at - session.created_at, TimeDelta::seconds(60));
        assert_eq!(session.created_at, clock.now());
    }

    #[tokio::test]
    async fn test_create_surfaces_cache_failure() {
        let mut cache = MockSessionCache::new();
        cache
            .expect_set()
            .returning(|_, _, _| Err(CollaboratorError::Connection("refused".into())));

        let manager = SessionManager::new(Arc::new(cache), Arc::new(ManualClock::default()), config());
        let err = manager.create_session(&alice()).await.unwrap_err();
        assert!(matches!(err, AuthError::CollaboratorUnavailable(_)));
    }

    #[tokio::test]
    async fn test_validate_looks_up_prefixed_key() {
        let clock = Arc::new(ManualClock::default());
        let entry = stored_entry("api-token", &clock, TimeDelta::seconds(60));

        let mut cache = MockSessionCache::new();
        cache
            .expect_get()
            .withf(|key| key == "test:session:abc")
            .returning(move |_| Ok(Some(entry.clone())));

        let manager = SessionManager::new(Arc::new(cache), clock, config());
        assert_eq!(manager.validate("abc", "api-token").await, Ok(alice()));
        assert_eq!(manager.validate("abc", "api-tokeN").await, Err(AuthError::TokenMismatch));
        assert_eq!(manager.validate("abc", "").await, Err(AuthError::TokenMismatch));
    }

    #[tokio::test]
    async fn test_validate_empty_key_skips_cache() {
        let mut cache = MockSessionCache::new();
        cache.expect_get().never();

        let manager = SessionManager::new(Arc::new(cache), Arc::new(ManualClock::default()), config());
        assert_eq!(manager.validate("", "anything").await, Err(AuthError::SessionNotFound));
    }

    #[tokio::test]
    async fn test_validate_rejects_entry_past_expiry() {
        // Backing stores with coarse TTL may still return an entry briefly.
        let clock = Arc::new(ManualClock::default());
        let entry = stored_entry("api-token", &clock, TimeDelta::seconds(1));
        clock.advance(TimeDelta::seconds(1));

        let mut cache = MockSessionCache::new();
        cache.expect_get().returning(move |_| Ok(Some(entry.clone())));

        let manager = SessionManager::new(Arc::new(cache), clock, config());
        assert_eq!(manager.validate("abc", "api-token").await, Err(AuthError::SessionNotFound));
    }

    #[tokio::test]
    async fn test_validate_surfaces_cache_failure_and_corrupt_entry() {
        let mut cache = MockSessionCache::new();
        cache
            .expect_get()
            .withf(|key| key.ends_with("down"))
            .returning(|_| Err(CollaboratorError::Connection("timeout".into())));
        cache
            .expect_get()
            .withf(|key| key.ends_with("corrupt"))
            .returning(|_| Ok(Some(b"not json".to_vec())));

        let manager = SessionManager::new(Arc::new(cache), Arc::new(ManualClock::default()), config());
        assert!(matches!(
            manager.validate("down", "t").await,
            Err(AuthError::CollaboratorUnavailable(_))
        ));
        assert!(matches!(
            manager.validate("corrupt", "t").await,
            Err(AuthError::CollaboratorUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_destroy_absent_key_is_ok() {
        let mut cache = MockSessionCache::new();
        cache
            .expect_delete()
            .withf(|key| key == "test:session:gone")
            .times(2)
            .returning(|_| Ok(false));

        let manager = SessionManager::new(Arc::new(cache), Arc::new(ManualClock::default()), config());
        assert_eq!(manager.destroy_session("gone").await, Ok(()));
        assert_eq!(manager.destroy_session("gone").await, Ok(()));
    }

    #[tokio::test]
    async fn test_destroy_surfaces_cache_failure() {
        let mut cache = MockSessionCache::new();
        cache
            .expect_delete()
            .returning(|_| Err(CollaboratorError::Backend("READONLY".into())));

        let manager = SessionManager::new(Arc::new(cache), Arc::new(ManualClock::default()), config());
        assert!(matches!(
            manager.destroy_session("abc").await,
            Err(AuthError::CollaboratorUnavailable(_))
        ));
    }
}
