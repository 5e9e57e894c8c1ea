// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Identifier alphabet, store field names, routes, media types, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain rather than kept in a single flat list.

/// Resource identifier generation
pub mod ids {
    /// Base58-style alphabet: digits and letters without `0`, `O`, `I`, `l`
    pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

    /// Length of every generated identifier
    pub const LENGTH: usize = 16;
}

/// Field names of the per-key hash map in the store
pub mod fields {
    /// Free-form label, may be empty
    pub const LABEL: &str = "label";
    /// Boolean value, stored as `1` or `0`
    pub const VALUE: &str = "value";
}

/// Query parameter names recognized on write requests
pub mod params {
    /// Absolute expiry in Unix epoch seconds
    pub const EXPIRES_AT: &str = "expires_at";
    /// Relative expiry in seconds from now
    pub const EXPIRES_IN: &str = "expires_in";
}

/// HTTP routes
pub mod routes {
    /// Collection segment name
    pub const COLLECTION: &str = "booleans";
    /// Collection endpoint
    pub const BOOLEANS: &str = "/api/v1/booleans";
    /// Item endpoint without an identifier
    pub const BOOLEAN: &str = "/api/v1/boolean";
    /// Item endpoint with trailing slash and no identifier
    pub const BOOLEAN_SLASH: &str = "/api/v1/boolean/";
    /// Item endpoint with identifier capture
    pub const BOOLEAN_BY_ID: &str = "/api/v1/boolean/:id";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe (pings the store)
    pub const READY: &str = "/ready";
}

/// `Allow` header values for method-not-allowed responses
pub mod allow {
    /// Verbs accepted by the collection endpoint
    pub const COLLECTION: &str = "POST";
    /// Verbs accepted by the item endpoint
    pub const ITEM: &str = "GET, DELETE, PATCH, PUT";
}

/// Request body media types
pub mod media_types {
    /// Structured JSON body
    pub const JSON: &str = "application/json";
    /// Form-urlencoded body
    pub const FORM: &str = "application/x-www-form-urlencoded";
}

/// Environment variable names
pub mod env_config {
    /// Store connection string (required)
    pub const REDIS_URL: &str = "REDIS_URL";
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Redis connection timeout in seconds
    pub const REDIS_CONNECTION_TIMEOUT_SECS: &str = "REDIS_CONNECTION_TIMEOUT_SECS";
    /// Redis response timeout in seconds
    pub const REDIS_RESPONSE_TIMEOUT_SECS: &str = "REDIS_RESPONSE_TIMEOUT_SECS";
    /// Reconnection retries after a dropped connection
    pub const REDIS_RECONNECTION_RETRIES: &str = "REDIS_RECONNECTION_RETRIES";
    /// Retries for the initial connection at startup
    pub const REDIS_INITIAL_CONNECTION_RETRIES: &str = "REDIS_INITIAL_CONNECTION_RETRIES";
    /// First backoff delay in milliseconds
    pub const REDIS_INITIAL_RETRY_DELAY_MS: &str = "REDIS_INITIAL_RETRY_DELAY_MS";
    /// Backoff cap in milliseconds
    pub const REDIS_MAX_RETRY_DELAY_MS: &str = "REDIS_MAX_RETRY_DELAY_MS";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 3000;
}

/// Redis connection defaults
pub mod redis {
    /// Redis connection timeout in seconds
    pub const CONNECTION_TIMEOUT_SECS: u64 = 10;
    /// Redis response timeout in seconds
    pub const RESPONSE_TIMEOUT_SECS: u64 = 5;
    /// Number of reconnection retries
    pub const RECONNECTION_RETRIES: usize = 5;
    /// Exponential backoff base for retry delays
    pub const RETRY_EXPONENT_BASE: u64 = 2;
    /// Maximum retry delay in milliseconds
    pub const MAX_RETRY_DELAY_MS: u64 = 30_000;
    /// Initial connection retry count
    pub const INITIAL_CONNECTION_RETRIES: u32 = 3;
    /// Initial retry delay in milliseconds
    pub const INITIAL_RETRY_DELAY_MS: u64 = 500;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// This server
    pub const BAAS_SERVER: &str = "baas-server";
}
