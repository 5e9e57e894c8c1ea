// ABOUTME: Main library entry point for the boolean backend-as-a-service
// ABOUTME: Exposes named boolean flags with optional expiry over HTTP, persisted in a key-value store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # BaaS Server
//!
//! A minimal backend-as-a-service exposing a single resource type: a named
//! boolean flag with optional expiry. Flags are created, read, replaced,
//! toggled, and deleted over HTTP and persisted as per-key hash maps in Redis.
//!
//! ## Request flow
//!
//! ```text
//! request -> RequestDecoder -> Validator -> BooleanRepository -> KeyValueStore
//!                                              |
//!                                        IdGenerator (create only)
//! ```
//!
//! Every failure along the way is translated into one of five
//! [`errors::ErrorCode`] kinds and rendered as the `{"errors": [...]}`
//! envelope.

/// Closed error taxonomy and response envelope (re-exported from `baas-core`)
pub use baas_core::errors;

/// Application constants (re-exported from `baas-core`)
pub use baas_core::constants;

/// Boolean resource model, validation, identifiers, decoding, and persistence
pub mod booleans;

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Shared state handed to HTTP handlers
pub mod resources;

/// HTTP route definitions
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Key-value store abstraction with Redis and in-memory backends
pub mod store;
