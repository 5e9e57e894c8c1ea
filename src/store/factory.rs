// ABOUTME: Store factory for URL-based backend selection
// ABOUTME: Wraps the Redis and in-memory backends behind one cloneable store handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{memory::InMemoryStore, redis::RedisStore, FieldMap, KeyValueStore};
use crate::config::environment::{StoreConfig, StoreUrl};
use crate::errors::AppResult;
use tracing::info;

/// Unified store handle
#[derive(Clone)]
pub enum Store {
    /// Redis-backed store
    Redis(RedisStore),
    /// Process-local store
    Memory(InMemoryStore),
}

impl Store {
    /// Create a store from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the Redis backend cannot be reached
    pub async fn connect(config: &StoreConfig) -> AppResult<Self> {
        match &config.url {
            StoreUrl::Redis(url) => {
                info!("Initializing Redis store at {}", config.url.redacted());
                let store = RedisStore::connect(url, &config.redis_connection).await?;
                Ok(Self::Redis(store))
            }
            StoreUrl::Memory => {
                info!("Initializing in-memory store (data is lost on restart)");
                Ok(Self::Memory(InMemoryStore::new()))
            }
        }
    }

    /// Fresh in-memory store
    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(InMemoryStore::new())
    }

    /// Short backend name for logs and health output
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Redis(_) => "redis",
            Self::Memory(_) => "memory",
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for Store {
    async fn exists(&self, key: &str) -> AppResult<bool> {
        match self {
            Self::Redis(store) => store.exists(key).await,
            Self::Memory(store) => store.exists(key).await,
        }
    }

    async fn hset_all(&self, key: &str, fields: &[(&str, String)]) -> AppResult<()> {
        match self {
            Self::Redis(store) => store.hset_all(key, fields).await,
            Self::Memory(store) => store.hset_all(key, fields).await,
        }
    }

    async fn hget_all(&self, key: &str) -> AppResult<FieldMap> {
        match self {
            Self::Redis(store) => store.hget_all(key).await,
            Self::Memory(store) => store.hget_all(key).await,
        }
    }

    async fn hset(&self, key: &str, field: &str, value: &str) -> AppResult<()> {
        match self {
            Self::Redis(store) => store.hset(key, field, value).await,
            Self::Memory(store) => store.hset(key, field, value).await,
        }
    }

    async fn del(&self, key: &str) -> AppResult<()> {
        match self {
            Self::Redis(store) => store.del(key).await,
            Self::Memory(store) => store.del(key).await,
        }
    }

    async fn expire_at(&self, key: &str, epoch_secs: i64) -> AppResult<()> {
        match self {
            Self::Redis(store) => store.expire_at(key, epoch_secs).await,
            Self::Memory(store) => store.expire_at(key, epoch_secs).await,
        }
    }

    async fn health_check(&self) -> AppResult<()> {
        match self {
            Self::Redis(store) => store.health_check().await,
            Self::Memory(store) => store.health_check().await,
        }
    }
}
