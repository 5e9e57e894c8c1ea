// ABOUTME: In-memory store implementation with lazy absolute-expiry handling
// ABOUTME: Backs development runs (memory:// URL) and integration tests without Redis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FieldMap, KeyValueStore};
use crate::errors::AppResult;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Hash stored under one key with its optional absolute expiry
#[derive(Debug, Clone, Default)]
struct StoreEntry {
    fields: FieldMap,
    expires_at: Option<i64>,
}

impl StoreEntry {
    /// Redis semantics: a key is gone once the clock reaches its expiry
    fn is_expired(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// In-memory store with Redis-compatible hash and expiry semantics
///
/// Uses `Arc<RwLock<HashMap>>` so clones share one keyspace. Expired keys are
/// dropped lazily when they are next touched; there is no background sweep.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, StoreEntry>>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute expiry currently set on `key`, if any
    pub async fn expiry_of(&self, key: &str) -> Option<i64> {
        let now = Utc::now().timestamp();
        self.entries
            .read()
            .await
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .and_then(|entry| entry.expires_at)
    }

    /// Number of live keys
    pub async fn len(&self) -> usize {
        let now = Utc::now().timestamp();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| !entry.is_expired(now))
            .count()
    }

    /// Whether the store holds no live keys
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop `key` if it has expired; returns whether a live entry remains
    fn evict_if_expired(entries: &mut HashMap<String, StoreEntry>, key: &str) -> bool {
        let now = Utc::now().timestamp();
        match entries.get(key) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryStore {
    async fn exists(&self, key: &str) -> AppResult<bool> {
        let mut entries = self.entries.write().await;
        Ok(Self::evict_if_expired(&mut entries, key))
    }

    async fn hset_all(&self, key: &str, fields: &[(&str, String)]) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        Self::evict_if_expired(&mut entries, key);

        let entry = entries.entry(key.to_owned()).or_default();
        for (field, value) in fields {
            entry.fields.insert((*field).to_owned(), value.clone());
        }

        Ok(())
    }

    async fn hget_all(&self, key: &str) -> AppResult<FieldMap> {
        let mut entries = self.entries.write().await;
        if !Self::evict_if_expired(&mut entries, key) {
            return Ok(FieldMap::new());
        }

        Ok(entries
            .get(key)
            .map(|entry| entry.fields.clone())
            .unwrap_or_default())
    }

    async fn hset(&self, key: &str, field: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        Self::evict_if_expired(&mut entries, key);

        entries
            .entry(key.to_owned())
            .or_default()
            .fields
            .insert(field.to_owned(), value.to_owned());

        Ok(())
    }

    async fn del(&self, key: &str) -> AppResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn expire_at(&self, key: &str, epoch_secs: i64) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        if !Self::evict_if_expired(&mut entries, key) {
            return Ok(());
        }

        if epoch_secs <= Utc::now().timestamp() {
            // EXPIREAT in the past deletes the key immediately
            entries.remove(key);
        } else if let Some(entry) = entries.get_mut(key) {
            entry.expires_at = Some(epoch_secs);
        }

        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fields(label: &str, value: &str) -> Vec<(&'static str, String)> {
        vec![("label", label.to_owned()), ("value", value.to_owned())]
    }

    #[tokio::test]
    async fn test_hset_all_then_hget_all() {
        let store = InMemoryStore::new();
        store.hset_all("k", &fields("beta", "1")).await.unwrap();

        let read = store.hget_all("k").await.unwrap();
        assert_eq!(read.get("label").map(String::as_str), Some("beta"));
        assert_eq!(read.get("value").map(String::as_str), Some("1"));
        assert!(store.exists("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_hget_all_missing_key_is_empty() {
        let store = InMemoryStore::new();
        assert!(store.hget_all("missing").await.unwrap().is_empty());
        assert!(!store.exists("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_hset_updates_single_field() {
        let store = InMemoryStore::new();
        store.hset_all("k", &fields("beta", "1")).await.unwrap();
        store.hset("k", "value", "0").await.unwrap();

        let read = store.hget_all("k").await.unwrap();
        assert_eq!(read.get("label").map(String::as_str), Some("beta"));
        assert_eq!(read.get("value").map(String::as_str), Some("0"));
    }

    #[tokio::test]
    async fn test_del_absent_key_is_ok() {
        let store = InMemoryStore::new();
        store.del("never-written").await.unwrap();

        store.hset_all("k", &fields("", "0")).await.unwrap();
        store.del("k").await.unwrap();
        assert!(!store.exists("k").await.unwrap());
    }

    #[tokio::test]
    async fn test_expire_at_in_past_removes_key() {
        let store = InMemoryStore::new();
        store.hset_all("k", &fields("", "1")).await.unwrap();
        store
            .expire_at("k", Utc::now().timestamp() - 1)
            .await
            .unwrap();

        assert!(!store.exists("k").await.unwrap());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_expire_at_in_future_keeps_key() {
        let store = InMemoryStore::new();
        let at = Utc::now().timestamp() + 60;
        store.hset_all("k", &fields("", "1")).await.unwrap();
        store.expire_at("k", at).await.unwrap();

        assert!(store.exists("k").await.unwrap());
        assert_eq!(store.expiry_of("k").await, Some(at));
    }

    #[tokio::test]
    async fn test_expired_key_is_absent() {
        let store = InMemoryStore::new();
        store.hset_all("k", &fields("", "1")).await.unwrap();
        store
            .expire_at("k", Utc::now().timestamp() + 1)
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(1_100)).await;

        assert!(!store.exists("k").await.unwrap());
        assert!(store.hget_all("k").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_keyspace() {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.hset_all("k", &fields("shared", "0")).await.unwrap();

        assert!(other.exists("k").await.unwrap());
        assert_eq!(other.len().await, 1);
    }
}
