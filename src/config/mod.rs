// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads the store connection string, HTTP port, and Redis tuning from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All configuration comes from environment variables and is read once at
//! process start. A missing store URL is fatal there, never per request.

/// Environment and server configuration
pub mod environment;

pub use environment::{RedisConnectionConfig, ServerConfig, StoreConfig, StoreUrl};
