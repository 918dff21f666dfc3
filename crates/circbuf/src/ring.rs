// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;

use tracing::{debug, trace};

use crate::error::RingError;

/// Fixed-capacity circular byte buffer that never overwrites unread data.
///
/// Tracks the total number of bytes ever written and read. Their difference
/// is the only measure of occupancy; the cursors are physical copy bounds and
/// are never compared to decide whether the buffer is empty or full.
///
/// A write larger than the free space stores the leading bytes that fit and
/// drops the rest.
#[derive(Debug, Clone)]
pub struct RingBuffer {
    buf: Box<[u8]>,
    capacity: usize,
    write_pos: usize,
    read_pos: usize,
    total_written: u64,
    total_read: u64,
}

impl RingBuffer {
    /// Create a new ring buffer holding up to `capacity` bytes.
    ///
    /// Fails with [`RingError::InvalidCapacity`] for zero, negative, or
    /// unrepresentable capacities, and for capacities the allocator refuses.
    pub fn new(capacity: impl TryInto<usize>) -> Result<Self, RingError> {
        let capacity = match capacity.try_into() {
            Ok(capacity) if capacity > 0 => capacity,
            _ => return Err(RingError::InvalidCapacity),
        };

        let mut buf = Vec::new();
        if let Err(e) = buf.try_reserve_exact(capacity) {
            debug!(capacity, err = %e, "ring buffer allocation refused");
            return Err(RingError::InvalidCapacity);
        }
        buf.resize(capacity, 0u8);
        trace!(capacity, "ring buffer allocated");

        Ok(Self {
            buf: buf.into_boxed_slice(),
            capacity,
            write_pos: 0,
            read_pos: 0,
            total_written: 0,
            total_read: 0,
        })
    }

    /// Append as much of `data` as fits without touching unread bytes.
    ///
    /// Returns `Ok(n)` when all of `data` was stored. Otherwise the leading
    /// `free()` bytes are stored, the remainder is discarded, and
    /// [`RingError::BufferFull`] carries the accepted count. Nothing is
    /// rolled back.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, RingError> {
        let accepted = &data[..data.len().min(self.free())];
        self.copy_in(accepted);

        if accepted.len() == data.len() {
            return Ok(accepted.len());
        }

        if accepted.is_empty() {
            trace!(requested = data.len(), "ring buffer full, write dropped");
        } else {
            debug!(
                requested = data.len(),
                written = accepted.len(),
                capacity = self.capacity,
                "ring buffer full, write truncated"
            );
        }
        Err(RingError::BufferFull { written: accepted.len(), requested: data.len() })
    }

    /// Move up to `out.len()` unread bytes into `out`, oldest first.
    ///
    /// Returns the number of bytes copied; zero when nothing is resident or
    /// `out` is empty.
    pub fn read(&mut self, out: &mut [u8]) -> usize {
        let n = out.len().min(self.len());
        if n == 0 {
            return 0;
        }

        let (head, tail) = self.as_slices();
        let first = n.min(head.len());
        out[..first].copy_from_slice(&head[..first]);
        out[first..n].copy_from_slice(&tail[..n - first]);

        self.advance_read(n);
        n
    }

    /// Discard up to `n` unread bytes without copying them.
    pub fn consume(&mut self, n: usize) -> usize {
        let n = n.min(self.len());
        self.advance_read(n);
        n
    }

    /// Copy of the unread bytes in the order they were written.
    ///
    /// Named `to_vec` rather than `bytes` so it does not collide with
    /// `io::Read::bytes`, which would consume the buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        let (head, tail) = self.as_slices();
        let mut out = Vec::with_capacity(head.len() + tail.len());
        out.extend_from_slice(head);
        out.extend_from_slice(tail);
        out
    }

    /// The unread bytes as up to two storage slices: the run starting at the
    /// read cursor, then the part that wrapped to the front of storage.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        self.window(self.read_pos, self.len())
    }

    /// Peek at unread bytes starting from the given lifetime byte offset.
    ///
    /// Returns `None` if the offset has already been read (too old) or is
    /// beyond the total written (too new). Does not move either cursor.
    pub fn read_from(&self, offset: u64) -> Option<(&[u8], &[u8])> {
        if offset < self.total_read || offset > self.total_written {
            return None;
        }

        let available = (self.total_written - offset) as usize;
        let start = self.position_before(self.write_pos, available);
        Some(self.window(start, available))
    }

    /// How many unread bytes lie at or after the given offset.
    pub fn available_from(&self, offset: u64) -> u64 {
        if offset < self.total_read || offset > self.total_written {
            return 0;
        }
        self.total_written - offset
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes written but not yet read.
    pub fn len(&self) -> usize {
        (self.total_written - self.total_read) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.total_written == self.total_read
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Room left for writes before unread data would be overwritten.
    pub fn free(&self) -> usize {
        self.capacity - self.len()
    }

    /// Total bytes ever accepted by writes.
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    /// Total bytes ever read or consumed.
    pub fn total_read(&self) -> u64 {
        self.total_read
    }

    // Callers guarantee `data.len() <= self.free()`.
    fn copy_in(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        let start = self.write_pos;
        let first = data.len().min(self.capacity - start);
        self.buf[start..start + first].copy_from_slice(&data[..first]);
        self.buf[..data.len() - first].copy_from_slice(&data[first..]);

        self.write_pos = (start + data.len()) % self.capacity;
        self.total_written += data.len() as u64;
        debug_assert!(self.len() <= self.capacity);
    }

    fn advance_read(&mut self, n: usize) {
        self.read_pos = (self.read_pos + n) % self.capacity;
        self.total_read += n as u64;
    }

    fn window(&self, start: usize, len: usize) -> (&[u8], &[u8]) {
        if len == 0 {
            return (&[], &[]);
        }

        if start + len <= self.capacity {
            (&self.buf[start..start + len], &[])
        } else {
            let first = self.capacity - start;
            (&self.buf[start..], &self.buf[..len - first])
        }
    }

    /// Storage index `n` bytes behind `pos`, wrapping below zero.
    fn position_before(&self, pos: usize, n: usize) -> usize {
        (pos as isize - n as isize).rem_euclid(self.capacity as isize) as usize
    }
}

impl fmt::Display for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_vec()))
    }
}

#[cfg(test)]
#[path = "ring_tests.rs"]
mod tests;
