//! Random-input fuzzer for `Frame::decode`
//!
//! Feeds arbitrary bytes to the decoder twice: once as-is (almost always a
//! checksum failure) and once with a correct FCS appended, which drives the
//! field extraction path.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wifistack_proto::{DecodeError, Frame, checksum};

fuzz_target!(|data: &[u8]| {
    // INVARIANT 1: Raw input never panics and failures are classified
    match Frame::decode(data) {
        Ok(frame) => assert_eq!(frame.payload.len() + Frame::MIN_SIZE, data.len()),
        Err(DecodeError::BufferTooShort { actual, .. }) => assert!(actual < Frame::MIN_SIZE),
        Err(DecodeError::ChecksumMismatch { computed, received }) => {
            assert_ne!(computed, received);
        },
    }

    // INVARIANT 2: Sealed input of sufficient length always decodes
    let mut sealed = data.to_vec();
    sealed.extend_from_slice(&checksum::compute(data).to_le_bytes());

    match Frame::decode(&sealed) {
        Ok(frame) => {
            assert!(data.len() >= 24, "decoded a frame without a full header");

            // INVARIANT 3: Fields come from fixed offsets
            assert_eq!(frame.address1.octets(), data[4..10]);
            assert_eq!(frame.address2.octets(), data[10..16]);
            assert_eq!(frame.address3.octets(), data[16..22]);
            assert_eq!(frame.flags.to_byte(), data[1]);
            assert_eq!(frame.payload.as_ref(), &data[24..]);
        },
        Err(err) => {
            assert!(data.len() < 24, "sealed frame of {} bytes rejected: {err}", data.len());
        },
    }
});
