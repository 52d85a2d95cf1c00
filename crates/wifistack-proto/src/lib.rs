//! Wire format for IEEE 802.11 MAC frames.
//!
//! A captured frame is a fixed 24-byte MAC header (frame control, duration,
//! three addresses, sequence control), a variable-length opaque body, and a
//! trailing 4-byte frame check sequence (CRC-32, little-endian).
//!
//! [`Frame::decode`] validates the length and the checksum before any header
//! field is trusted, then copies every field out of the source buffer. The
//! resulting [`Frame`] owns its data, so capture buffers can be recycled as
//! soon as decoding returns.
//!
//! # Security
//!
//! Header parsing uses a compile-time verified layout via `zerocopy`. Every
//! bit pattern of the frame-control bytes is legal, so the only rejections are
//! a short buffer and a checksum mismatch. No "fast paths" that skip the
//! checksum.
//!
//! # Limitations
//!
//! Frames with both `from_ds` and `to_ds` set carry a fourth address in real
//! 802.11. It is not modeled: such frames decode with the fixed 24-byte layout.
//! See [`Frame::carries_fourth_address`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod address;
pub mod checksum;
pub mod errors;
pub mod flags;
pub mod frame;
pub mod frame_control;
pub mod header;

pub use address::{AddressParseError, MacAddress};
pub use errors::{DecodeError, Result};
pub use flags::FrameControlFlags;
pub use frame::Frame;
pub use frame_control::{FrameControl, FrameType};
pub use header::MacHeader;
