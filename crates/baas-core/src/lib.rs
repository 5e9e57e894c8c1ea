// ABOUTME: Core types and constants for the boolean backend-as-a-service
// ABOUTME: Foundation crate with the error taxonomy, response envelope, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # BaaS Core
//!
//! Foundation crate providing the types shared by every layer of the boolean
//! service. It is designed to change infrequently so the server crate keeps
//! incremental compilation benefits.
//!
//! ## Modules
//!
//! - **errors**: Closed error taxonomy with `AppError`, `ErrorCode`, and the
//!   structured `{"errors": [...]}` response envelope
//! - **constants**: Identifier alphabet, store field names, routes, and
//!   environment variable names

/// Closed error taxonomy with HTTP status mapping and response envelope
pub mod errors;

/// Application constants organized by domain
pub mod constants;
