// ABOUTME: Route module organization for the BaaS HTTP endpoints
// ABOUTME: Boolean resource routes and health probes, each with thin handlers over shared resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the boolean repository or the store.

/// Boolean collection and item routes
pub mod booleans;
/// Health check and readiness routes
pub mod health;

/// Boolean route handlers
pub use booleans::BooleanRoutes;
/// Health route handlers
pub use health::HealthRoutes;
