// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Model-based checks: random operation sequences against a `VecDeque` oracle.

use std::collections::VecDeque;

use proptest::prelude::*;

use circbuf::{RingBuffer, RingError};

#[derive(Debug, Clone)]
enum Op {
    Write(Vec<u8>),
    Read(usize),
    Consume(usize),
    Peek(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => proptest::collection::vec(any::<u8>(), 0..48).prop_map(Op::Write),
        2 => (0usize..48).prop_map(Op::Read),
        1 => (0usize..16).prop_map(Op::Consume),
        1 => (0u64..16).prop_map(Op::Peek),
    ]
}

proptest! {
    #[test]
    fn matches_model(capacity in 1usize..40, ops in proptest::collection::vec(op(), 1..64)) {
        let mut ring = RingBuffer::new(capacity)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let mut model: VecDeque<u8> = VecDeque::new();
        let mut model_read = 0u64;

        for op in ops {
            match op {
                Op::Write(data) => {
                    let free = capacity - model.len();
                    let result = ring.write(&data);
                    if data.len() <= free {
                        prop_assert_eq!(result, Ok(data.len()));
                    } else {
                        prop_assert_eq!(
                            result,
                            Err(RingError::BufferFull { written: free, requested: data.len() })
                        );
                    }
                    model.extend(data.iter().take(free));
                }
                Op::Read(len) => {
                    let mut out = vec![0u8; len];
                    let before = ring.total_written() - ring.total_read();
                    let n = ring.read(&mut out);
                    prop_assert!(n as u64 <= before);
                    prop_assert_eq!(n, len.min(model.len()));
                    let expected: Vec<u8> = model.drain(..n).collect();
                    prop_assert_eq!(&out[..n], &expected[..]);
                    model_read += n as u64;
                }
                Op::Consume(len) => {
                    let n = ring.consume(len);
                    prop_assert_eq!(n, len.min(model.len()));
                    model.drain(..n);
                    model_read += n as u64;
                }
                Op::Peek(delta) => {
                    let offset = model_read + delta;
                    let peeked = ring.read_from(offset).map(|(a, b)| [a, b].concat());
                    let expected = (delta as usize <= model.len())
                        .then(|| model.iter().skip(delta as usize).copied().collect::<Vec<u8>>());
                    prop_assert_eq!(peeked, expected);
                }
            }

            prop_assert_eq!(ring.len(), model.len());
            prop_assert_eq!(ring.free(), capacity - model.len());
            prop_assert_eq!(ring.total_read(), model_read);
            prop_assert_eq!(ring.total_written() - ring.total_read(), model.len() as u64);
            prop_assert_eq!(ring.to_vec(), model.iter().copied().collect::<Vec<u8>>());
        }
    }
}
