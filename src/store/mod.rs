// ABOUTME: Key-value store abstraction for per-key hash maps with absolute expiry
// ABOUTME: Pluggable backend support (Redis, in-memory) selected from the store URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Store factory selecting a backend from configuration
pub mod factory;
/// In-memory store implementation
pub mod memory;
/// Redis store implementation
pub mod redis;

pub use factory::Store;

use crate::errors::AppResult;
use std::collections::HashMap;

/// Field name to field value map stored under one key
pub type FieldMap = HashMap<String, String>;

/// Store provider trait for pluggable backend implementations
///
/// The contract is the subset of Redis hash commands the boolean resource
/// needs. Implementations report every failure as an
/// [`ErrorCode::InternalError`](crate::errors::ErrorCode::InternalError)
/// carrying the underlying cause. Dropping a returned future aborts the
/// in-flight call.
///
/// # Examples
///
/// ```rust,no_run
/// use baas_server::store::{memory::InMemoryStore, KeyValueStore};
/// # async fn example() -> Result<(), baas_server::errors::AppError> {
///
/// let store = InMemoryStore::new();
/// store
///     .hset_all("abc", &[("label", "beta".to_owned()), ("value", "1".to_owned())])
///     .await?;
///
/// assert!(store.exists("abc").await?);
/// let fields = store.hget_all("abc").await?;
/// assert_eq!(fields.get("label").map(String::as_str), Some("beta"));
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait KeyValueStore: Send + Sync + Clone {
    /// Check whether a key currently exists
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached
    async fn exists(&self, key: &str) -> AppResult<bool>;

    /// Write several fields of the hash stored at `key`, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    async fn hset_all(&self, key: &str, fields: &[(&str, String)]) -> AppResult<()>;

    /// Read every field of the hash stored at `key`; empty when the key is absent
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails
    async fn hget_all(&self, key: &str) -> AppResult<FieldMap>;

    /// Write a single field of the hash stored at `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    async fn hset(&self, key: &str, field: &str, value: &str) -> AppResult<()>;

    /// Delete a key; deleting an absent key is not an error
    ///
    /// # Errors
    ///
    /// Returns an error if the delete command itself fails
    async fn del(&self, key: &str) -> AppResult<()>;

    /// Expire `key` at an absolute Unix time in seconds
    ///
    /// # Errors
    ///
    /// Returns an error if the expiry cannot be set
    async fn expire_at(&self, key: &str, epoch_secs: i64) -> AppResult<()>;

    /// Verify the store backend is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the health check fails
    async fn health_check(&self) -> AppResult<()>;
}
