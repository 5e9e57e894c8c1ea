// ABOUTME: Stateless validation of write intents and drafts against expiry rules
// ABOUTME: Reports the failing rule in logs and surfaces a generic bad request to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{BooleanDraft, WriteIntent};
use crate::constants::params;
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Rule a write intent can violate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Absolute expiry must lie strictly in the future
    EpochGtNow,
    /// Relative expiry must be strictly positive
    PositiveDuration,
}

impl ValidationRule {
    /// Short tag used in logs
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EpochGtNow => "epoch-gt-now",
            Self::PositiveDuration => "gt=0",
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// First rule that failed, with the offending field and value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{field}] invalid value \"{value}\" for tag: {rule}")]
pub struct ValidationFailure {
    /// Violated rule
    pub rule: ValidationRule,
    /// Query parameter name
    pub field: &'static str,
    /// Rejected value
    pub value: i64,
}

/// Stateless validator
///
/// Constructed explicitly and copied into the components that need it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Create a validator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Check an intent against `now`, returning the first failing rule
    ///
    /// # Errors
    ///
    /// Returns the failure when `expires_at <= now` or `expires_in <= 0`
    pub fn check_intent(&self, intent: &WriteIntent, now: i64) -> Result<(), ValidationFailure> {
        if let Some(at) = intent.expires_at.filter(|at| *at != 0) {
            if at <= now {
                return Err(ValidationFailure {
                    rule: ValidationRule::EpochGtNow,
                    field: params::EXPIRES_AT,
                    value: at,
                });
            }
        }

        if let Some(secs) = intent.expires_in.filter(|secs| *secs != 0) {
            if secs <= 0 {
                return Err(ValidationFailure {
                    rule: ValidationRule::PositiveDuration,
                    field: params::EXPIRES_IN,
                    value: secs,
                });
            }
        }

        Ok(())
    }

    /// Validate a write intent against the current time
    ///
    /// # Errors
    ///
    /// Returns a bad request error if any rule fails
    pub fn validate_intent(&self, intent: &WriteIntent) -> AppResult<()> {
        self.check_intent(intent, Utc::now().timestamp())
            .map_err(|failure| {
                debug!(rule = %failure.rule, "Validation failed: {failure}");
                let message = failure.to_string();
                AppError::bad_request(message.clone()).with_detail(message)
            })
    }

    /// Validate a draft: its intent plus any field-level rules
    ///
    /// # Errors
    ///
    /// Returns a bad request error if any rule fails
    pub fn validate_draft(&self, draft: &BooleanDraft) -> AppResult<()> {
        // Resource fields carry no rules of their own
        self.validate_intent(&draft.intent)
    }
}
