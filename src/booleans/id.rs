// ABOUTME: Random identifier generation over a 58-symbol unambiguous alphabet
// ABOUTME: Collision checks against the store are the caller's responsibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::ids::{ALPHABET, LENGTH};
use rand::Rng;

/// Generates 16-character identifiers drawn uniformly from [`ALPHABET`]
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator;

impl IdGenerator {
    /// Create a generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate one candidate identifier
    #[must_use]
    pub fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..LENGTH)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect()
    }
}
