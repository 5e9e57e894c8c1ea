// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and an application router over a fresh in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `baas_server`

use baas_server::{resources::ServerResources, server, store::Store};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Shared resources over a fresh in-memory store
pub fn create_test_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(Store::memory()))
}

/// Full application router plus the resources behind it
pub fn create_test_app() -> (axum::Router, Arc<ServerResources>) {
    let resources = create_test_resources();
    (server::router(Arc::clone(&resources)), resources)
}
