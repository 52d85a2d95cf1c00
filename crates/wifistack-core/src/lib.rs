//! wifistack receive pipeline
//!
//! Glue between a capture source and the frame decoder. Nothing here touches
//! a radio: captures are abstracted behind [`Capture`], so the same receive
//! loop runs against live interfaces, replayed files and in-memory test
//! fixtures.
//!
//! # Components
//!
//! - [`capture`]: Capture abstraction (one delimited buffer per call)
//! - [`receiver`]: Receive loop (decode, drop bad buffers, count)
//! - [`error`]: Receive error types

pub mod capture;
pub mod error;
pub mod receiver;

pub use capture::{Capture, ReplayCapture};
pub use error::ReceiveError;
pub use receiver::{ReceiveStats, Receiver};
