//! MAC header implementation with zero-copy parsing.
//!
//! The `MacHeader` is the fixed 24-byte prefix shared by every frame this
//! crate decodes. Multi-byte integers are Big Endian on the wire.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{
    FrameControl, MacAddress,
    errors::{DecodeError, Result},
};

/// Fixed 24-byte MAC header (Big Endian network byte order)
///
/// Fields are stored as raw byte arrays to avoid alignment issues with
/// `#[repr(C, packed)]`.
///
/// ```text
///  0      2          4          10         16         22       24
///  +------+----------+----------+----------+----------+--------+
///  |  FC  | duration | address1 | address2 | address3 | seqctl |
///  +------+----------+----------+----------+----------+--------+
/// ```
///
/// # Fourth Address
///
/// Frames with both DS flags set carry a fourth address after `seqctl` in
/// real 802.11. This layout does not model it.
#[repr(C, packed)]
#[derive(Clone, Copy, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct MacHeader {
    frame_control: [u8; 2],    // version/type/subtype + flags
    duration_id: [u8; 2],      // u16 duration or association ID
    address1: [u8; 6],         // receiver
    address2: [u8; 6],         // transmitter
    address3: [u8; 6],         // BSSID / source / destination (per DS flags)
    sequence_control: [u8; 2], // u16 fragment + sequence number
}

impl MacHeader {
    /// Size of the serialized header (24 bytes)
    pub const SIZE: usize = 24;

    /// Parse header from captured bytes (zero-copy, safe)
    ///
    /// Trailing bytes after the header are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::BufferTooShort`] if fewer than 24 bytes are
    /// available. Every 24-byte pattern is otherwise a valid header.
    pub fn from_bytes(bytes: &[u8]) -> Result<&Self> {
        let (header, _) = Self::ref_from_prefix(bytes).map_err(|_| {
            DecodeError::BufferTooShort { expected: Self::SIZE, actual: bytes.len() }
        })?;
        Ok(header)
    }

    /// Raw header bytes
    #[must_use]
    pub fn as_wire_bytes(&self) -> &[u8] {
        IntoBytes::as_bytes(self)
    }

    /// Get the decoded frame control field
    #[must_use]
    pub fn frame_control(&self) -> FrameControl {
        FrameControl::from_bytes(self.frame_control)
    }

    /// Get the duration / association ID
    #[must_use]
    pub fn duration_id(&self) -> u16 {
        u16::from_be_bytes(self.duration_id)
    }

    /// Get the first address (receiver)
    #[must_use]
    pub fn address1(&self) -> MacAddress {
        MacAddress(self.address1)
    }

    /// Get the second address (transmitter)
    #[must_use]
    pub fn address2(&self) -> MacAddress {
        MacAddress(self.address2)
    }

    /// Get the third address
    #[must_use]
    pub fn address3(&self) -> MacAddress {
        MacAddress(self.address3)
    }

    /// Get the raw sequence control field
    #[must_use]
    pub fn sequence_control(&self) -> u16 {
        u16::from_be_bytes(self.sequence_control)
    }
}

// Manual Debug implementation (can't derive due to packed repr)
impl std::fmt::Debug for MacHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacHeader")
            .field("frame_control", &self.frame_control())
            .field("duration_id", &self.duration_id())
            .field("address1", &self.address1())
            .field("address2", &self.address2())
            .field("address3", &self.address3())
            .field("sequence_control", &format!("{:#06x}", self.sequence_control()))
            .finish()
    }
}

// Manual PartialEq implementation (can't derive due to packed repr)
impl PartialEq for MacHeader {
    fn eq(&self, other: &Self) -> bool {
        self.as_wire_bytes() == other.as_wire_bytes()
    }
}

impl Eq for MacHeader {}
