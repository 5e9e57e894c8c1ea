// ABOUTME: Redis store implementation with connection manager and absolute-expiry support
// ABOUTME: Maps the key-value contract onto EXISTS, HSET, HGETALL, DEL, EXPIREAT, and PING
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FieldMap, KeyValueStore};
use crate::config::environment::RedisConnectionConfig;
use crate::errors::{AppError, AppResult};
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, RedisError};
use std::time::Duration;
use tracing::{error, info, warn};

/// Redis store backed by a `ConnectionManager`
///
/// The manager reconnects automatically and is cheap to clone; every
/// operation clones it, so a connection handle lives only for the duration
/// of one call.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
}

impl RedisStore {
    /// Connect to Redis at `redis_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or every connection attempt fails
    pub async fn connect(redis_url: &str, conn_config: &RedisConnectionConfig) -> AppResult<Self> {
        info!(
            "Connecting to Redis (timeout={}s, response_timeout={}s, retries={})",
            conn_config.connection_timeout_secs,
            conn_config.response_timeout_secs,
            conn_config.initial_connection_retries
        );

        let client = redis::Client::open(redis_url).map_err(|e| {
            AppError::internal(format!("Failed to create Redis client: {e}")).with_source(e)
        })?;

        let manager = Self::connect_with_retry(&client, conn_config).await?;

        info!("Successfully connected to Redis");

        Ok(Self { manager })
    }

    /// Connect to Redis with exponential backoff retry on failure
    async fn connect_with_retry(
        client: &redis::Client,
        conn_config: &RedisConnectionConfig,
    ) -> AppResult<ConnectionManager> {
        let manager_config = ConnectionManagerConfig::new()
            .set_connection_timeout(Duration::from_secs(conn_config.connection_timeout_secs))
            .set_response_timeout(Duration::from_secs(conn_config.response_timeout_secs))
            .set_number_of_retries(conn_config.reconnection_retries)
            .set_exponent_base(conn_config.retry_exponent_base)
            .set_max_delay(conn_config.max_retry_delay_ms);

        let max_retries = conn_config.initial_connection_retries;
        let mut delay_ms = conn_config.initial_retry_delay_ms;
        let mut last_error = None;

        for attempt in 0..=max_retries {
            match ConnectionManager::new_with_config(client.clone(), manager_config.clone()).await {
                Ok(manager) => {
                    if attempt > 0 {
                        info!("Redis connection established after {} retries", attempt);
                    }
                    return Ok(manager);
                }
                Err(e) => {
                    if attempt < max_retries {
                        warn!(
                            "Redis connection attempt {}/{} failed, retrying in {}ms: {}",
                            attempt + 1,
                            max_retries + 1,
                            delay_ms,
                            e
                        );
                        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                        delay_ms = (delay_ms * 2).min(conn_config.max_retry_delay_ms);
                    }
                    last_error = Some(e);
                }
            }
        }

        let message = format!(
            "Failed to connect to Redis after {} attempts",
            max_retries + 1
        );
        Err(match last_error {
            Some(e) => AppError::internal(message).with_source(e),
            None => AppError::internal(message),
        })
    }

    /// Log a failed command and wrap it as an internal error
    fn command_error(command: &'static str, key: &str, e: RedisError) -> AppError {
        error!(redis.command = command, redis.key = %key, "Redis {} failed: {}", command, e);
        AppError::internal(format!("Redis {command} failed for key {key}")).with_source(e)
    }
}

#[async_trait::async_trait]
impl KeyValueStore for RedisStore {
    async fn exists(&self, key: &str) -> AppResult<bool> {
        let mut conn = self.manager.clone();

        conn.exists(key)
            .await
            .map_err(|e| Self::command_error("EXISTS", key, e))
    }

    async fn hset_all(&self, key: &str, fields: &[(&str, String)]) -> AppResult<()> {
        let mut conn = self.manager.clone();

        conn.hset_multiple::<_, _, _, ()>(key, fields)
            .await
            .map_err(|e| Self::command_error("HSET", key, e))
    }

    async fn hget_all(&self, key: &str) -> AppResult<FieldMap> {
        let mut conn = self.manager.clone();

        conn.hgetall(key)
            .await
            .map_err(|e| Self::command_error("HGETALL", key, e))
    }

    async fn hset(&self, key: &str, field: &str, value: &str) -> AppResult<()> {
        let mut conn = self.manager.clone();

        conn.hset::<_, _, _, ()>(key, field, value)
            .await
            .map_err(|e| Self::command_error("HSET", key, e))
    }

    async fn del(&self, key: &str) -> AppResult<()> {
        let mut conn = self.manager.clone();

        // Integer reply (0 or 1); an absent key is not a failure
        let _removed: i64 = conn
            .del(key)
            .await
            .map_err(|e| Self::command_error("DEL", key, e))?;

        Ok(())
    }

    async fn expire_at(&self, key: &str, epoch_secs: i64) -> AppResult<()> {
        let mut conn = self.manager.clone();

        let applied: i64 = redis::cmd("EXPIREAT")
            .arg(key)
            .arg(epoch_secs)
            .query_async(&mut conn)
            .await
            .map_err(|e| Self::command_error("EXPIREAT", key, e))?;

        if applied == 0 {
            warn!(redis.key = %key, "EXPIREAT applied to no key");
        }

        Ok(())
    }

    async fn health_check(&self) -> AppResult<()> {
        let mut conn = self.manager.clone();

        let response: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| Self::command_error("PING", "-", e))?;

        if response == "PONG" {
            Ok(())
        } else {
            Err(AppError::internal(format!(
                "Store error: unexpected PING response '{response}'"
            )))
        }
    }
}
