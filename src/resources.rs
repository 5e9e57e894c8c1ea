// ABOUTME: Centralized resource container shared by all HTTP handlers
// ABOUTME: Holds the store handle, the boolean repository, and the request decoder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources
//!
//! Built once at startup and shared behind an `Arc` as router state.

use crate::booleans::{BooleanRepository, RequestDecoder, Validator};
use crate::store::Store;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Store handle, used directly by readiness checks
    pub store: Store,
    /// Boolean persistence
    pub repository: BooleanRepository<Store>,
    /// Query and body decoding for write requests
    pub decoder: RequestDecoder,
}

impl ServerResources {
    /// Wire resources around a connected store
    #[must_use]
    pub fn new(store: Store) -> Self {
        let validator = Validator::new();

        Self {
            repository: BooleanRepository::new(store.clone(), validator),
            decoder: RequestDecoder::new(validator),
            store,
        }
    }
}
