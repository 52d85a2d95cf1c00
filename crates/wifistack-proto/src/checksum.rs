//! Frame check sequence (FCS).
//!
//! The last four bytes of a captured frame hold a CRC-32 (IEEE 802.3
//! polynomial, reflected, the `CRC_32_ISO_HDLC` catalog entry) over every
//! preceding byte. The trailer is little-endian, unlike the big-endian header
//! fields.

use crc::{CRC_32_ISO_HDLC, Crc};

use crate::errors::{DecodeError, Result};

/// Size of the trailing frame check sequence in bytes
pub const FCS_LEN: usize = 4;

const FCS: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Compute the CRC-32 of `data`.
#[must_use]
pub fn compute(data: &[u8]) -> u32 {
    FCS.checksum(data)
}

/// Verify the trailing FCS of `frame` and return the covered bytes.
///
/// # Errors
///
/// - [`DecodeError::BufferTooShort`] if `frame` cannot hold an FCS at all
/// - [`DecodeError::ChecksumMismatch`] if the trailer disagrees with the
///   computed CRC
pub fn verify(frame: &[u8]) -> Result<&[u8]> {
    let Some((covered, trailer)) = frame.split_last_chunk::<FCS_LEN>() else {
        return Err(DecodeError::BufferTooShort { expected: FCS_LEN, actual: frame.len() });
    };

    let received = u32::from_le_bytes(*trailer);
    let computed = compute(covered);
    if computed != received {
        return Err(DecodeError::ChecksumMismatch { computed, received });
    }

    Ok(covered)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn check_value() {
        // Standard CRC-32 check input
        assert_eq!(compute(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn zero_header() {
        assert_eq!(compute(&[0u8; 24]), 0xA3C1_CA20);
    }

    #[test]
    fn verify_accepts_little_endian_trailer() {
        let mut frame = [0u8; 28];
        frame[24..].copy_from_slice(&hex!("20cac1a3"));
        assert_eq!(verify(&frame), Ok(&frame[..24]));
    }

    #[test]
    fn verify_rejects_big_endian_trailer() {
        let mut frame = [0u8; 28];
        frame[24..].copy_from_slice(&hex!("a3c1ca20"));
        assert_eq!(
            verify(&frame),
            Err(DecodeError::ChecksumMismatch { computed: 0xA3C1_CA20, received: 0x20CA_C1A3 })
        );
    }

    #[test]
    fn verify_rejects_missing_trailer() {
        assert_eq!(verify(&[1, 2, 3]), Err(DecodeError::BufferTooShort { expected: 4, actual: 3 }));
    }

    #[test]
    fn empty_covered_region() {
        // CRC-32 of nothing is zero
        assert_eq!(verify(&[0, 0, 0, 0]), Ok(&[][..]));
    }
}
