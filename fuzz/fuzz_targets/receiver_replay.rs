//! Receive loop fuzzer
//!
//! Splits the input into buffers on a length-prefix and replays them through
//! the receiver. The loop must consume every buffer and account for each one.

#![no_main]

use bytes::Bytes;
use libfuzzer_sys::fuzz_target;
use wifistack_core::{Receiver, ReplayCapture};

fuzz_target!(|data: &[u8]| {
    let mut buffers = Vec::new();
    let mut rest = data;
    while let Some((&len, tail)) = rest.split_first() {
        let take = usize::from(len).min(tail.len());
        buffers.push(Bytes::copy_from_slice(&tail[..take]));
        rest = &tail[take..];
    }

    let count = buffers.len() as u64;
    let mut receiver = Receiver::new(ReplayCapture::new(buffers));
    while let Ok(Some(_)) = receiver.recv() {}

    assert_eq!(receiver.stats().total(), count);
    assert_eq!(receiver.into_inner().remaining(), 0);
});
