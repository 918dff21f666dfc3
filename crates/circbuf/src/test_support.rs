// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for unit and integration tests.

use crate::ring::RingBuffer;

/// Assert that an expression returns `Err` whose `Display` contains `substr`.
#[macro_export]
macro_rules! assert_err_contains {
    ($expr:expr, $substr:expr) => {{
        let result = $expr;
        let err = result.expect_err(concat!("expected Err for: ", stringify!($expr)));
        let msg = err.to_string();
        assert!(msg.contains($substr), "expected error containing {:?}, got: {msg:?}", $substr);
    }};
}

/// Concatenate the slice pair returned by [`RingBuffer::read_from`].
pub fn collect_from(ring: &RingBuffer, offset: u64) -> Option<Vec<u8>> {
    ring.read_from(offset).map(|(a, b)| {
        let mut v = a.to_vec();
        v.extend_from_slice(b);
        v
    })
}

/// Fill a fresh buffer of `capacity` bytes from a sequence of writes,
/// returning the buffer and the accepted count of each write.
pub fn filled(
    capacity: usize,
    writes: &[&[u8]],
) -> Result<(RingBuffer, Vec<usize>), crate::RingError> {
    let mut ring = RingBuffer::new(capacity)?;
    let accepted = writes
        .iter()
        .map(|data| ring.write(data).unwrap_or_else(|e| e.written()))
        .collect();
    Ok((ring, accepted))
}
