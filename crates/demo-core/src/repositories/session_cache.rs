//! Session cache trait (port)

use async_trait::async_trait;
use std::time::Duration;

use crate::error::CollaboratorError;

/// Key/value store with per-key TTL.
///
/// Implementations must treat an expired key exactly like an absent one.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionCache: Send + Sync {
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CollaboratorError>;

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CollaboratorError>;

    /// Returns whether a live entry was removed.
    async fn delete(&self, key: &str) -> Result<bool, CollaboratorError>;
}
