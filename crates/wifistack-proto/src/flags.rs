//! Frame control flags.
//!
//! The second frame-control byte is a bitfield of eight independent flags.
//! Bits map low-to-high in the order the capture layer reports them.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Frame control flags (8 bits, second header byte)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FrameControlFlags: u8 {
        /// Frame comes from the distribution system
        const FROM_DS = 0b0000_0001;

        /// Frame is headed to the distribution system
        const TO_DS = 0b0000_0010;

        /// More fragments of the same MSDU follow
        const MORE_FRAGMENTS = 0b0000_0100;

        /// Frame is a retransmission
        const RETRY = 0b0000_1000;

        /// Sender enters power-save mode after this exchange
        const POWER_MANAGEMENT = 0b0001_0000;

        /// Access point has more buffered frames for the station
        const MORE_DATA = 0b0010_0000;

        /// Body is encrypted (a.k.a. "protected")
        const PROTECTED = 0b0100_0000;

        /// Strictly ordered service class
        const ORDER = 0b1000_0000;
    }
}

impl FrameControlFlags {
    /// Create flags from raw byte value
    ///
    /// This function is **infallible**. Every bit is a defined flag, so all
    /// 256 byte values are legal and no combination is rejected.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        Self::from_bits_retain(byte)
    }

    /// Convert to raw byte value
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        self.bits()
    }
}

impl Default for FrameControlFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for FrameControlFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }

        for (i, (name, _)) in self.iter_names().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
