// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

use crate::error::RingError;
use crate::ring::RingBuffer;

/// Default ring capacity in bytes (64 KiB).
pub const DEFAULT_CAPACITY: usize = 64 * 1024;

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Ring buffer sizing.
///
/// Host binaries flatten this into their own clap parser; it also
/// deserializes from config files, where a missing field takes the default.
#[derive(Debug, Clone, PartialEq, Eq, clap::Args, Serialize, Deserialize)]
pub struct RingConfig {
    /// Ring buffer capacity in bytes.
    #[arg(long = "ring-capacity", default_value_t = DEFAULT_CAPACITY, env = "CIRCBUF_CAPACITY")]
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY }
    }
}

impl RingConfig {
    /// Allocate a ring buffer with the configured capacity.
    pub fn build(&self) -> Result<RingBuffer, RingError> {
        RingBuffer::new(self.capacity)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
