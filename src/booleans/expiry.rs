// ABOUTME: Resolves absolute and relative expiry directives into one epoch timestamp
// ABOUTME: An absolute expiry wins over a relative one; neither means no expiry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WriteIntent;

/// Expiry arithmetic
pub struct Expiry;

impl Expiry {
    /// Absolute expiry in epoch seconds for `intent`, evaluated at `now`
    #[must_use]
    pub fn resolve(intent: &WriteIntent, now: i64) -> Option<i64> {
        if let Some(at) = intent.expires_at.filter(|at| *at > 0) {
            return Some(at);
        }

        intent
            .expires_in
            .filter(|secs| *secs > 0)
            .map(|secs| now.saturating_add(secs))
    }
}
