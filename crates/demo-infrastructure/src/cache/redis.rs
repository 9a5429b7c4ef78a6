//! Redis-backed session cache

use async_trait::async_trait;
use deadpool_redis::{redis::cmd, Config, Connection, Pool, PoolConfig, Runtime};
use std::time::Duration;
use tracing::{debug, error};

use demo_core::repositories::SessionCache;
use demo_core::CollaboratorError;

pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    pub fn new(url: &str, max_connections: usize) -> Result<Self, CollaboratorError> {
        let mut cfg = Config::from_url(url);
        cfg.pool = Some(PoolConfig::new(max_connections));
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| CollaboratorError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    async fn conn(&self) -> Result<Connection, CollaboratorError> {
        self.pool.get().await.map_err(|e| {
            error!("Redis pool unavailable: {}", e);
            CollaboratorError::Connection(e.to_string())
        })
    }
}

#[async_trait]
impl SessionCache for RedisCache {
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CollaboratorError> {
        let mut conn = self.conn().await?;
        // PX rejects 0
        let ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);
        cmd("SET")
            .arg(key)
            .arg(value)
            .arg("PX")
            .arg(ttl_ms)
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| CollaboratorError::Backend(e.to_string()))?;
        debug!("SET {} px={}", key, ttl_ms);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CollaboratorError> {
        let mut conn = self.conn().await?;
        cmd("GET")
            .arg(key)
            .query_async::<Option<Vec<u8>>>(&mut conn)
            .await
            .map_err(|e| CollaboratorError::Backend(e.to_string()))
    }

    async fn delete(&self, key: &str) -> Result<bool, CollaboratorError> {
        let mut conn = self.conn().await?;
        let removed = cmd("DEL")
            .arg(key)
            .query_async::<i64>(&mut conn)
            .await
            .map_err(|e| CollaboratorError::Backend(e.to_string()))?;
        Ok(removed > 0)
    }
}
