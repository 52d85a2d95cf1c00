//! Error types for 802.11 frame decoding.
//!
//! Both variants are terminal for a single decode attempt. Callers are
//! expected to drop the offending buffer and move on to the next one.

use thiserror::Error;

/// Errors that can occur while decoding a captured MAC frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Buffer is shorter than a header plus frame check sequence
    #[error("buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort {
        /// Minimum size in bytes
        expected: usize,
        /// Actual size received
        actual: usize,
    },

    /// Trailing frame check sequence does not match the frame contents
    #[error("checksum mismatch: computed {computed:#010x}, frame carries {received:#010x}")]
    ChecksumMismatch {
        /// CRC-32 computed over the header and body
        computed: u32,
        /// CRC-32 asserted by the sender (little-endian trailer)
        received: u32,
    },
}

impl DecodeError {
    /// Short, stable label for metrics and log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::BufferTooShort { .. } => "buffer_too_short",
            Self::ChecksumMismatch { .. } => "checksum_mismatch",
        }
    }
}

/// Convenient Result type alias for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_sizes() {
        let err = DecodeError::BufferTooShort { expected: 28, actual: 3 };
        assert_eq!(err.to_string(), "buffer too short: expected at least 28 bytes, got 3");
    }

    #[test]
    fn display_formats_checksums_as_hex() {
        let err = DecodeError::ChecksumMismatch { computed: 0xa3c1_ca20, received: 0 };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: computed 0xa3c1ca20, frame carries 0x00000000"
        );
    }
}
