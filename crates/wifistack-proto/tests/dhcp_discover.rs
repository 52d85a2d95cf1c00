//! End-to-end decode of a captured DHCP discover carried in a data frame.
//!
//! The body is an LLC/SNAP-encapsulated IPv4/UDP/DHCP datagram. The decoder
//! must hand it back byte-for-byte without interpreting it.

use hex_literal::hex;
use wifistack_proto::{DecodeError, Frame, FrameType, MacAddress, checksum};

/// LLC/SNAP + IPv4 + UDP + DHCP discover (367 bytes)
const DHCP_DISCOVER: [u8; 367] = hex!(
    // LLC/SNAP, ethertype 0x0800
    "aaaa030000000800"
    // IPv4 header, 0.0.0.0 -> 255.255.255.255, UDP 68 -> 67
    "4500016785f700004011f38f00000000ffffffff00440043"
    // UDP length/checksum, BOOTP request
    "0153a9c5010106005fb0c25f0000000000000000000000000000000000000000"
    "24f5aa282ee40000000000000000000000000000000000000000000000000000"
    "0000000000000000000000000000000000000000000000000000000000000000"
    "0000000000000000000000000000000000000000000000000000000000000000"
    "0000000000000000000000000000000000000000000000000000000000000000"
    "0000000000000000000000000000000000000000000000000000000000000000"
    "0000000000000000000000000000000000000000000000000000000000000000"
    // magic cookie and options
    "00000000000000000000000000000000638253633501033d070124f5aa282ee4"
    "3204ac1414143604ac141401390205dc3c286468637063642d362e382e323a4c"
    "696e75782d332e382e31313a61726d76376c3a53414d53554e47910101370f01"
    "792103060c0f1a1c33363a3b77fcff"
);

const HEADER: [u8; 24] = hex!(
    "0800"         // data, subtype 0, no DS flags
    "0000"         // duration
    "ffffffffffff" // receiver: broadcast
    "000102030405" // transmitter: client
    "10feed00beef" // BSSID
    "0010"         // sequence control
);

fn dhcp_frame() -> Vec<u8> {
    let mut wire = HEADER.to_vec();
    wire.extend_from_slice(&DHCP_DISCOVER);
    let fcs = checksum::compute(&wire);
    wire.extend_from_slice(&fcs.to_le_bytes());
    wire
}

#[test]
fn decodes_dhcp_discover() {
    let wire = dhcp_frame();
    assert_eq!(wire.len(), 24 + 367 + 4);

    let frame = Frame::decode(&wire).expect("valid capture decodes");

    assert_eq!(frame.frame_type, FrameType::Data);
    assert_eq!(frame.subtype, 0);
    assert!(!frame.from_ds());
    assert!(!frame.to_ds());
    assert!(frame.address1.is_broadcast());
    assert_eq!(frame.address2, MacAddress([0x00, 0x01, 0x02, 0x03, 0x04, 0x05]));
    assert_eq!(frame.address3, "10:fe:ed:00:be:ef".parse().unwrap());
    assert_eq!(frame.sequence_control, 0x0010);
    assert_eq!(frame.payload.as_ref(), &DHCP_DISCOVER[..]);
}

#[test]
fn summary_snapshot() {
    let frame = Frame::decode(&dhcp_frame()).unwrap();
    insta::assert_snapshot!(
        frame.to_string(),
        @"data/0 v0 [-] dur=0 a1=ff:ff:ff:ff:ff:ff a2=00:01:02:03:04:05 a3=10:fe:ed:00:be:ef seq=0x0010 len=367"
    );
}

#[test]
fn source_buffer_can_be_dropped() {
    let frame = {
        let wire = dhcp_frame();
        Frame::decode(&wire).unwrap()
    };
    assert_eq!(frame.payload.len(), DHCP_DISCOVER.len());
}

#[test]
fn any_corrupted_byte_is_rejected() {
    let wire = dhcp_frame();
    for index in 0..wire.len() - 4 {
        let mut corrupted = wire.clone();
        corrupted[index] = corrupted[index].wrapping_add(1);
        assert!(
            matches!(Frame::decode(&corrupted), Err(DecodeError::ChecksumMismatch { .. })),
            "corruption at byte {index} went undetected"
        );
    }
}

#[test]
fn truncated_capture_is_rejected() {
    let wire = dhcp_frame();
    let truncated = &wire[..wire.len() - 1];
    assert!(matches!(Frame::decode(truncated), Err(DecodeError::ChecksumMismatch { .. })));
}
