//! Frame control field.
//!
//! The first two header bytes describe what kind of frame follows:
//!
//! - Byte 0: `version` (bits 0-1), `frame_type` (bits 2-3), `subtype`
//!   (bits 4-7)
//! - Byte 1: eight independent flags, see [`FrameControlFlags`]
//!
//! Every one of the 65536 possible byte pairs decodes. Interpreting a
//! subtype (beacon, probe, association, ...) belongs to the dispatch layer.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::FrameControlFlags;

/// Coarse frame class (2 bits)
///
/// The enum is closed over all four 2-bit values, so decoding a frame type
/// can never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum FrameType {
    /// Discovery, authentication and association
    Management = 0,
    /// Medium access (RTS/CTS/ACK)
    Control = 1,
    /// Carries MSDUs
    Data = 2,
    /// Reserved / extension
    Extension = 3,
}

impl FrameType {
    /// Decode from the low two bits of `bits`.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Management,
            1 => Self::Control,
            2 => Self::Data,
            _ => Self::Extension,
        }
    }

    /// Raw 2-bit value
    #[must_use]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }

    /// Lowercase name used in log output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Management => "mgmt",
            Self::Control => "ctrl",
            Self::Data => "data",
            Self::Extension => "ext",
        }
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decoded frame control field (first two header bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameControl {
    /// Protocol version (0-3)
    pub version: u8,
    /// Coarse frame class
    pub frame_type: FrameType,
    /// Frame kind within `frame_type` (0-15)
    pub subtype: u8,
    /// Per-frame flags
    pub flags: FrameControlFlags,
}

impl FrameControl {
    /// Decode both frame control bytes. Infallible.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        let [info, flags] = bytes;
        Self {
            version: info & 0b11,
            frame_type: FrameType::from_bits(info >> 2),
            subtype: (info >> 4) & 0b1111,
            flags: FrameControlFlags::from_byte(flags),
        }
    }

    /// Re-pack into the two wire bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 2] {
        let info = (self.version & 0b11)
            | (self.frame_type.to_bits() << 2)
            | ((self.subtype & 0b1111) << 4);
        [info, self.flags.to_byte()]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn zero_bytes() {
        let fc = FrameControl::from_bytes([0, 0]);
        assert_eq!(fc.version, 0);
        assert_eq!(fc.frame_type, FrameType::Management);
        assert_eq!(fc.subtype, 0);
        assert!(fc.flags.is_empty());
    }

    #[test]
    fn data_frame_byte() {
        // type 2 (data), subtype 0, version 0
        let fc = FrameControl::from_bytes([0x08, 0x00]);
        assert_eq!(fc.frame_type, FrameType::Data);
        assert_eq!(fc.subtype, 0);
    }

    #[test]
    fn beacon_byte() {
        // management, subtype 8
        let fc = FrameControl::from_bytes([0x80, 0x00]);
        assert_eq!(fc.frame_type, FrameType::Management);
        assert_eq!(fc.subtype, 8);
    }

    #[test]
    fn all_bits_set() {
        let fc = FrameControl::from_bytes([0xFF, 0xFF]);
        assert_eq!(fc.version, 3);
        assert_eq!(fc.frame_type, FrameType::Extension);
        assert_eq!(fc.subtype, 15);
        assert_eq!(fc.flags, FrameControlFlags::all());
    }

    proptest! {
        #[test]
        fn lossless(info in any::<u8>(), flags in any::<u8>()) {
            let fc = FrameControl::from_bytes([info, flags]);
            prop_assert_eq!(fc.to_bytes(), [info, flags]);
            prop_assert!(fc.version <= 3);
            prop_assert!(fc.subtype <= 15);
        }
    }
}
