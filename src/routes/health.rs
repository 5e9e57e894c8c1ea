// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness always answers; readiness pings the store and reports failures as errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring
//!
//! `/health` reports that the process is up. `/ready` additionally checks the
//! store connection so load balancers stop routing when Redis is unreachable.

use crate::constants::routes;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::store::KeyValueStore;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::handle_health))
            .route(routes::READY, get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Json<serde_json::Value>, AppError> {
        resources.store.health_check().await.inspect_err(|e| {
            warn!(store = resources.store.backend_name(), "Readiness check failed: {e}");
        })?;

        Ok(Json(serde_json::json!({
            "status": "ready",
            "store": resources.store.backend_name(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        })))
    }
}
