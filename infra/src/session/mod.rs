//! Session storage backends
//!
//! - **memory**: in-process store from the core crate
//! - **redis**: shared store for multi-process deployments (feature `redis-cache`)

#[cfg(feature = "redis-cache")]
pub mod redis_store;

#[cfg(feature = "redis-cache")]
pub use redis_store::RedisSessionStore;

pub use mid_core::repositories::{InMemorySessionStore, SessionStore};

use std::sync::Arc;
use std::time::Duration;

use mid_shared::config::{SessionBackend, SessionStoreConfig};


/// Create a session store based on configuration
///
/// Falls back to the in-memory store when Redis is unavailable or the
/// `redis-cache` feature is disabled.
pub async fn create_session_store(config: &SessionStoreConfig) -> Arc<dyn SessionStore> {
    match config.backend {
        SessionBackend::Memory => create_memory_store(config),
        #[cfg(feature = "redis-cache")]
        SessionBackend::Redis => match RedisSessionStore::connect(config.clone()).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::error!("Failed to initialize Redis session store: {}", e);
                tracing::warn!("Falling back to in-memory session store");
                create_memory_store(config)
            }
        },
        #[cfg(not(feature = "redis-cache"))]
        SessionBackend::Redis => {
            tracing::warn!("Redis session store requires the redis-cache feature, using memory");
            create_memory_store(config)
        }
    }
}

/// In-memory store with a background task dropping expired sessions
fn create_memory_store(config: &SessionStoreConfig) -> Arc<dyn SessionStore> {
    let store = InMemorySessionStore::new(config.ttl_seconds);
    let period = Duration::from_secs(config.ttl_seconds.max(1));

    let purger = store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            purger.purge_expired().await;
        }
    });

    Arc::new(store)
}
