//! Decoded MAC frame.
//!
//! A captured frame on the wire:
//! `[MacHeader: 24 bytes] + [body: variable] + [FCS: 4 bytes, little-endian]`
//!
//! [`Frame::decode`] is the only constructor. It checks the length, then the
//! FCS, and only then extracts fields, so a `Frame` value always comes from a
//! buffer that passed both checks.

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{
    FrameControlFlags, FrameType, MacAddress, MacHeader, checksum,
    errors::{DecodeError, Result},
};

/// Decoded 802.11 MAC frame
///
/// # Invariants
///
/// - **Integrity**: Only built from buffers of at least [`Frame::MIN_SIZE`]
///   bytes whose trailing FCS matches the CRC-32 of the preceding bytes.
///
/// - **Payload Range**: `payload` is exactly bytes `[24, len - 4)` of the
///   source buffer. It may be empty.
///
/// - **Ownership**: All fields are copied out of the source buffer. The
///   caller may reuse or drop the buffer once decoding returns.
///
/// # Fourth Address
///
/// WDS frames (both `from_ds` and `to_ds` set) carry a fourth address that is
/// not modeled. Those frames decode with the fixed layout, so the first six
/// payload bytes are really the fourth address. Check
/// [`Frame::carries_fourth_address`] before trusting the payload boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Protocol version (0-3)
    pub version: u8,

    /// Coarse frame class
    pub frame_type: FrameType,

    /// Frame kind within `frame_type` (0-15)
    pub subtype: u8,

    /// Frame control flags (second header byte)
    pub flags: FrameControlFlags,

    /// Duration / association ID
    pub duration_id: u16,

    /// Receiver address
    pub address1: MacAddress,

    /// Transmitter address
    pub address2: MacAddress,

    /// Third address (meaning depends on the DS flags)
    pub address3: MacAddress,

    /// Fragment number and sequence number, packed
    pub sequence_control: u16,

    /// Opaque frame body
    pub payload: Bytes,
}

impl Frame {
    /// Smallest decodable buffer: full header, empty body, FCS
    pub const MIN_SIZE: usize = MacHeader::SIZE + checksum::FCS_LEN;

    /// Decode a captured frame
    ///
    /// `bytes` must hold exactly one frame, FCS included. Any byte sequence
    /// is accepted as input; nothing is assumed about its origin.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::BufferTooShort`] if `bytes` is shorter than
    ///   [`Frame::MIN_SIZE`]
    /// - [`DecodeError::ChecksumMismatch`] if the trailing FCS does not match
    ///
    /// # Security
    ///
    /// - **Validation Order**: The length check runs before the checksum, and
    ///   the checksum before any field is read. Short buffers are never
    ///   hashed or sliced.
    ///
    /// - **No Flag Validation**: Every frame-control bit pattern is legal, so
    ///   attacker-chosen flag combinations cannot make decoding fail.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::MIN_SIZE {
            return Err(DecodeError::BufferTooShort {
                expected: Self::MIN_SIZE,
                actual: bytes.len(),
            });
        }

        let covered = checksum::verify(bytes)?;
        let header = MacHeader::from_bytes(covered)?;
        let control = header.frame_control();

        Ok(Self {
            version: control.version,
            frame_type: control.frame_type,
            subtype: control.subtype,
            flags: control.flags,
            duration_id: header.duration_id(),
            address1: header.address1(),
            address2: header.address2(),
            address3: header.address3(),
            sequence_control: header.sequence_control(),
            payload: Bytes::copy_from_slice(&covered[MacHeader::SIZE..]),
        })
    }

    /// Frame comes from the distribution system
    #[must_use]
    pub const fn from_ds(&self) -> bool {
        self.flags.contains(FrameControlFlags::FROM_DS)
    }

    /// Frame is headed to the distribution system
    #[must_use]
    pub const fn to_ds(&self) -> bool {
        self.flags.contains(FrameControlFlags::TO_DS)
    }

    /// More fragments of this MSDU follow
    #[must_use]
    pub const fn more_fragments(&self) -> bool {
        self.flags.contains(FrameControlFlags::MORE_FRAGMENTS)
    }

    /// Frame is a retransmission
    #[must_use]
    pub const fn retry(&self) -> bool {
        self.flags.contains(FrameControlFlags::RETRY)
    }

    /// Sender is entering power-save mode
    #[must_use]
    pub const fn power_management(&self) -> bool {
        self.flags.contains(FrameControlFlags::POWER_MANAGEMENT)
    }

    /// More buffered frames are waiting
    #[must_use]
    pub const fn more_data(&self) -> bool {
        self.flags.contains(FrameControlFlags::MORE_DATA)
    }

    /// Body is encrypted (protected)
    #[must_use]
    pub const fn encrypted(&self) -> bool {
        self.flags.contains(FrameControlFlags::PROTECTED)
    }

    /// Strictly ordered
    #[must_use]
    pub const fn order(&self) -> bool {
        self.flags.contains(FrameControlFlags::ORDER)
    }

    /// Both DS flags set: the true layout has a fourth address that this
    /// decoder leaves inside `payload`.
    #[must_use]
    pub const fn carries_fourth_address(&self) -> bool {
        self.flags.contains(FrameControlFlags::FROM_DS.union(FrameControlFlags::TO_DS))
    }

    /// Management frame
    #[must_use]
    pub fn is_management(&self) -> bool {
        self.frame_type == FrameType::Management
    }

    /// Control frame
    #[must_use]
    pub fn is_control(&self) -> bool {
        self.frame_type == FrameType::Control
    }

    /// Data frame
    #[must_use]
    pub fn is_data(&self) -> bool {
        self.frame_type == FrameType::Data
    }

    /// The three header addresses in wire order
    #[must_use]
    pub const fn addresses(&self) -> [MacAddress; 3] {
        [self.address1, self.address2, self.address3]
    }
}

/// One-line summary for logs:
/// `data/0 v0 [TO_DS] dur=0 a1=.. a2=.. a3=.. seq=0x0000 len=0`
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} v{} [{}] dur={} a1={} a2={} a3={} seq={:#06x} len={}",
            self.frame_type,
            self.subtype,
            self.version,
            self.flags,
            self.duration_id,
            self.address1,
            self.address2,
            self.address3,
            self.sequence_control,
            self.payload.len(),
        )
    }
}
