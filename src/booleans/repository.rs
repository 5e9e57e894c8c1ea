// ABOUTME: Store adapter mapping booleans to per-key field maps with existence and TTL rules
// ABOUTME: Implements save (create or replace-by-id), get, toggle, and delete over any KeyValueStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    encode_bool, parse_bool, BooleanDraft, Expiry, IdGenerator, Resource, StoredBoolean, Validator,
};
use crate::constants::fields;
use crate::errors::{AppError, AppResult};
use crate::store::{FieldMap, KeyValueStore};
use chrono::Utc;
use tracing::{debug, error, info};

/// Resource name used in not-found messages
const RESOURCE: &str = "Boolean";

/// Boolean persistence over a key-value store
///
/// Each boolean is one key holding a `label`/`value` hash. Existence checks and
/// writes are separate round-trips; concurrent writers to the same key can
/// interleave between them.
#[derive(Clone)]
pub struct BooleanRepository<S: KeyValueStore> {
    store: S,
    validator: Validator,
    ids: IdGenerator,
}

impl<S: KeyValueStore> BooleanRepository<S> {
    /// Create a repository over `store`
    #[must_use]
    pub const fn new(store: S, validator: Validator) -> Self {
        Self {
            store,
            validator,
            ids: IdGenerator::new(),
        }
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Persist a draft
    ///
    /// Without a target id a fresh identifier is generated; with one the key
    /// must already exist. The expiry, if any, is applied after the fields.
    ///
    /// # Errors
    ///
    /// Returns `BAD_REQUEST` on validation failure, `NOT_FOUND` when the target
    /// id does not exist, or `INTERNAL_ERROR` when a store write fails
    pub async fn save(&self, draft: BooleanDraft) -> AppResult<StoredBoolean> {
        self.validator.validate_draft(&draft)?;

        let BooleanDraft { resource, intent } = draft;

        let id = match intent.id.as_deref() {
            Some(id) => {
                self.ensure_exists(id).await?;
                id.to_owned()
            }
            None => self.unused_id().await?,
        };

        self.store
            .hset_all(
                &id,
                &[
                    (fields::LABEL, resource.label.clone()),
                    (fields::VALUE, encode_bool(resource.value).to_owned()),
                ],
            )
            .await?;

        if let Some(at) = Expiry::resolve(&intent, Utc::now().timestamp()) {
            self.store.expire_at(&id, at).await?;
            debug!(boolean.id = %id, expires_at = at, "Expiry applied");
        }

        let stored = StoredBoolean { id, resource };
        info!("Saved boolean {stored}");

        Ok(stored)
    }

    /// Read a boolean by id
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` when the key is absent, or `INTERNAL_ERROR` when the
    /// stored fields cannot be read or decoded
    pub async fn get(&self, id: &str) -> AppResult<StoredBoolean> {
        self.ensure_exists(id).await?;

        let map = self.store.hget_all(id).await?;
        if map.is_empty() {
            // Expired between the existence check and the read
            info!(boolean.id = %id, "Boolean expired before read");
            return Err(AppError::not_found(RESOURCE));
        }

        Ok(StoredBoolean {
            id: id.to_owned(),
            resource: Self::resource_from_fields(id, &map)?,
        })
    }

    /// Flip the value of a boolean, leaving its label untouched
    ///
    /// # Errors
    ///
    /// Returns `NOT_FOUND` when the key is absent, or `INTERNAL_ERROR` when the
    /// write fails
    pub async fn toggle(&self, id: &str) -> AppResult<StoredBoolean> {
        let mut stored = self.get(id).await?;
        stored.resource.value = !stored.resource.value;

        self.store
            .hset(id, fields::VALUE, encode_bool(stored.resource.value))
            .await?;

        info!("Toggled boolean {stored}");
        Ok(stored)
    }

    /// Delete a boolean; deleting an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` when the store rejects the delete
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.store.del(id).await?;
        info!(boolean.id = %id, "Deleted boolean");
        Ok(())
    }

    /// Fail with `NOT_FOUND` unless `id` exists
    ///
    /// A failed existence check is reported as not found, not as an internal
    /// error; the cause is still logged.
    async fn ensure_exists(&self, id: &str) -> AppResult<()> {
        match self.store.exists(id).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                info!(boolean.id = %id, "Boolean with ID {id} not found");
                Err(AppError::not_found(RESOURCE))
            }
            Err(e) => {
                error!(boolean.id = %id, "Existence check failed: {e}");
                Err(AppError::not_found(RESOURCE).with_source(e))
            }
        }
    }

    /// Generate identifiers until one is not taken
    async fn unused_id(&self) -> AppResult<String> {
        loop {
            let candidate = self.ids.generate();
            if !self.store.exists(&candidate).await? {
                return Ok(candidate);
            }
            debug!(boolean.id = %candidate, "Generated identifier collides, retrying");
        }
    }

    fn resource_from_fields(id: &str, map: &FieldMap) -> AppResult<Resource> {
        let label = map.get(fields::LABEL).cloned().unwrap_or_default();

        let value = match map.get(fields::VALUE) {
            None => false,
            Some(raw) => parse_bool(raw).ok_or_else(|| {
                error!(boolean.id = %id, "Stored value '{raw}' is not a boolean");
                AppError::internal(format!("Stored value for {id} is not a boolean"))
            })?,
        };

        Ok(Resource { label, value })
    }
}
