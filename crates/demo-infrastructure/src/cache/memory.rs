//! In-process TTL cache
//!
//! Entries carry an absolute expiry. Expired entries are invisible to reads
//! and removed lazily on access or by `purge_expired`.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use demo_core::repositories::SessionCache;
use demo_core::{Clock, CollaboratorError};

struct Entry {
    value: Vec<u8>,
    expires_at: DateTime<Utc>,
}

impl Entry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

pub struct MemoryCache {
    map: DashMap<String, Entry>,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        info!("Initializing in-memory session cache");
        Self {
            map: DashMap::new(),
            clock,
        }
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let start_len = self.map.len();
        self.map.retain(|_, entry| !entry.is_expired(now));
        let count = start_len.saturating_sub(self.map.len());

        if count > 0 {
            debug!("Purged {} expired cache entries", count);
        }
        count
    }

    /// Run `purge_expired` on a fixed interval until the task is aborted.
    pub fn spawn_sweeper(self: Arc<Self>, every: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                self.purge_expired();
            }
        })
    }
}

#[async_trait]
impl SessionCache for MemoryCache {
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CollaboratorError> {
        let now = self.clock.now();
        let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
        let expires_at = now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.map.insert(key.to_string(), Entry { value, expires_at });
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CollaboratorError> {
        let now = self.clock.now();
        let Some(entry) = self.map.get(key) else {
            return Ok(None);
        };
        if entry.is_expired(now) {
            drop(entry);
            self.map.remove_if(key, |_, e| e.is_expired(now));
            return Ok(None);
        }
        Ok(Some(entry.value.clone()))
    }

    async fn delete(&self, key: &str) -> Result<bool, CollaboratorError> {
        let now = self.clock.now();
        Ok(self
            .map
            .remove(key)
            .map(|(_, entry)| !entry.is_expired(now))
            .unwrap_or(false))
    }
}
