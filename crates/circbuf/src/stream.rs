// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `std::io` adapters so a [`RingBuffer`] can sit between readers and writers.
//!
//! Short writes surface as `Ok(n)`. A write that stores nothing reports
//! `WouldBlock`, since the caller is expected to drain and poll again.

use std::io;

use crate::error::RingError;
use crate::ring::RingBuffer;

impl io::Write for RingBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match RingBuffer::write(self, buf) {
            Ok(n) => Ok(n),
            Err(RingError::BufferFull { written, .. }) if written > 0 => Ok(written),
            Err(e) => Err(e.into()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for RingBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(RingBuffer::read(self, buf))
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
