//! In-process session store

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use mid_shared::config::MAX_SESSION_TTL_SECONDS;

use crate::domain::entities::AuthenticationSessionInfo;
use crate::errors::DomainError;

use super::r#trait::SessionStore;

struct StoredSession {
    session: AuthenticationSessionInfo,
    expires_at: DateTime<Utc>,
}

impl StoredSession {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Session store backed by a `HashMap` behind a tokio `RwLock`
///
/// Suitable for a single server process. Sessions are lost on restart.
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, StoredSession>>>,
    ttl: Duration,
}

impl InMemorySessionStore {
    /// Create a store whose sessions live for `ttl_seconds`
    ///
    /// Lifetimes above `MAX_SESSION_TTL_SECONDS` are capped.
    pub fn new(ttl_seconds: u64) -> Self {
        if ttl_seconds > MAX_SESSION_TTL_SECONDS {
            tracing::warn!(
                ttl_seconds,
                max_ttl_seconds = MAX_SESSION_TTL_SECONDS,
                event = "session_ttl_capped",
                "Session TTL too large, using the maximum"
            );
        }

        let ttl = i64::try_from(ttl_seconds.min(MAX_SESSION_TTL_SECONDS))
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or_else(|| Duration::minutes(5));

        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Drop every expired session, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, stored| !stored.is_expired(now));
        let purged = before - sessions.len();

        if purged > 0 {
            tracing::debug!(purged, event = "session_store_purged", "Purged expired sessions");
        }
        purged
    }

    /// Number of stored sessions, expired ones included
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(300)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(
        &self,
        token: &str,
        session: &AuthenticationSessionInfo,
    ) -> Result<(), DomainError> {
        let stored = StoredSession {
            session: session.clone(),
            expires_at: Utc::now() + self.ttl,
        };
        self.sessions.write().await.insert(token.to_string(), stored);
        Ok(())
    }

    async fn take(&self, token: &str) -> Result<Option<AuthenticationSessionInfo>, DomainError> {
        let stored = self.sessions.write().await.remove(token);
        Ok(stored
            .filter(|stored| !stored.is_expired(Utc::now()))
            .map(|stored| stored.session))
    }

    async fn remove(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.sessions.write().await.remove(token).is_some())
    }
}
