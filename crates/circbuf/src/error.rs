// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;

/// Errors raised by [`RingBuffer`](crate::RingBuffer).
///
/// `BufferFull` is advisory: the bytes that fit have already been stored
/// when it is returned, and `written` says how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingError {
    InvalidCapacity,
    BufferFull { written: usize, requested: usize },
}

impl RingError {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCapacity => "INVALID_CAPACITY",
            Self::BufferFull { .. } => "BUFFER_FULL",
        }
    }

    /// Bytes accepted by the call that produced this error.
    pub fn written(&self) -> usize {
        match self {
            Self::InvalidCapacity => 0,
            Self::BufferFull { written, .. } => *written,
        }
    }

    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::InvalidCapacity => io::ErrorKind::InvalidInput,
            Self::BufferFull { .. } => io::ErrorKind::WouldBlock,
        }
    }
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity => {
                write!(f, "{}: capacity must be positive and allocatable", self.as_str())
            }
            Self::BufferFull { written, requested } => {
                write!(f, "{}: accepted {written} of {requested} bytes", self.as_str())
            }
        }
    }
}

impl std::error::Error for RingError {}

impl From<RingError> for io::Error {
    fn from(err: RingError) -> Self {
        io::Error::new(err.io_kind(), err)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
