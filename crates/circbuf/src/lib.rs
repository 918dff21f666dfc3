// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-capacity circular byte buffer with independent read and write
//! cursors.
//!
//! Writes never overwrite bytes that have not been read yet: input that does
//! not fit is truncated and reported as [`RingError::BufferFull`]. Reads never
//! fail; an empty buffer simply yields zero bytes.

pub mod config;
pub mod error;
pub mod ring;
mod stream;
pub mod test_support;

pub use config::{RingConfig, DEFAULT_CAPACITY};
pub use error::RingError;
pub use ring::RingBuffer;
