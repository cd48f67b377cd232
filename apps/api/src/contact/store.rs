use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use thiserror::Error;
use tracing::info;

const REDIS_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Durable string key-value boundary backing the recovery record.
/// Single-key granularity and allowed to fail; the manager swallows every
/// error this trait surfaces.
#[async_trait]
pub trait RecoveryStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process store used in tests and in deployments without Redis. Recovery
/// records then survive only for the lifetime of the process, which is an
/// accepted degradation.
#[derive(Debug, Default)]
pub struct MemoryRecoveryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryRecoveryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Backend("recovery store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl RecoveryStore for MemoryRecoveryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Redis-backed store on a reused multiplexed connection, so no store call
/// ever blocks a runtime worker thread. The connection is established lazily
/// with a bounded connect timeout and dropped on command failure, to be
/// re-established on the next operation.
#[derive(Debug)]
pub struct RedisRecoveryStore {
    client: redis::Client,
    connection: tokio::sync::Mutex<Option<MultiplexedConnection>>,
}

impl RedisRecoveryStore {
    pub fn open(url: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url).map_err(backend)?;
        info!("Redis recovery store initialized");
        Ok(Self {
            client,
            connection: tokio::sync::Mutex::new(None),
        })
    }

    async fn query<T: redis::FromRedisValue>(&self, cmd: redis::Cmd) -> Result<T, StoreError> {
        let mut guard = self.connection.lock().await;

        if guard.is_none() {
            let connected =
                tokio::time::timeout(REDIS_CONNECT_TIMEOUT, async {
                    self.client.get_multiplexed_async_connection().await
                })
                .await
                .map_err(|_| StoreError::Backend("redis connect timed out".to_string()))?
                .map_err(backend)?;
            *guard = Some(connected);
        }

        let Some(connection) = guard.as_mut() else {
            return Err(StoreError::Backend("redis connection missing".to_string()));
        };

        match cmd.query_async(connection).await {
            Ok(value) => Ok(value),
            Err(e) => {
                // Connection may be broken; rebuild it on the next call.
                *guard = None;
                Err(backend(e))
            }
        }
    }
}

#[async_trait]
impl RecoveryStore for RedisRecoveryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut cmd = redis::cmd("GET");
        cmd.arg(key);
        self.query(cmd).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        self.query(cmd).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut cmd = redis::cmd("DEL");
        cmd.arg(key);
        self.query(cmd).await
    }
}

fn backend(e: redis::RedisError) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = MemoryRecoveryStore::new();
        assert!(store.get("k").await.unwrap().is_none());
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
        store.remove("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn memory_store_remove_is_idempotent() {
        let store = MemoryRecoveryStore::new();
        store.remove("absent").await.unwrap();
        store.remove("absent").await.unwrap();
        assert!(store.get("absent").await.unwrap().is_none());
    }
}
