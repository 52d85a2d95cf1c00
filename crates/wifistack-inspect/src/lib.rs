//! Offline inspector for 802.11 frame captures.
//!
//! Replays a hex capture through the [`wifistack_core::Receiver`] and logs
//! every frame that decodes. Corrupt lines and frames are reported and
//! skipped, never fatal.
//!
//! # Capture Format
//!
//! One frame per line, FCS included, as hex digits. Whitespace and `:`
//! separators inside a line are ignored, blank lines and `#` comments are
//! skipped:
//!
//! ```text
//! # beacon
//! 80 00 00 00 ff ff ff ff ff ff ...
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod hex_capture;
pub mod inspect;

pub use config::{Args, Input};
pub use error::InspectError;
pub use hex_capture::HexCapture;
pub use inspect::{Report, exit_code, inspect, run};
