//! Receive loop.
//!
//! Pulls buffers from a [`Capture`], decodes each one and hands back only
//! frames that pass the length and checksum checks. A bad buffer is logged,
//! counted and skipped; it never ends the session.

use tracing::{debug, warn};
use wifistack_proto::{DecodeError, Frame};

use crate::{Capture, ReceiveError};

/// Running counters for a receive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReceiveStats {
    /// Buffers that decoded into a frame
    pub decoded: u64,
    /// Buffers dropped for being shorter than a header plus FCS
    pub too_short: u64,
    /// Buffers dropped for a bad FCS
    pub bad_checksum: u64,
}

impl ReceiveStats {
    /// Total buffers pulled from the capture.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.decoded + self.too_short + self.bad_checksum
    }

    /// Total buffers dropped.
    #[must_use]
    pub const fn dropped(&self) -> u64 {
        self.too_short + self.bad_checksum
    }

    fn record(&mut self, error: &DecodeError) {
        match error {
            DecodeError::BufferTooShort { .. } => self.too_short += 1,
            DecodeError::ChecksumMismatch { .. } => self.bad_checksum += 1,
        }
    }
}

/// Decodes frames from a capture source, skipping corrupt buffers.
#[derive(Debug)]
pub struct Receiver<C> {
    capture: C,
    stats: ReceiveStats,
}

impl<C: Capture> Receiver<C> {
    /// Wrap a capture source.
    pub fn new(capture: C) -> Self {
        Self { capture, stats: ReceiveStats::default() }
    }

    /// Receive the next valid frame.
    ///
    /// Buffers that fail to decode are dropped and counted, then the next
    /// buffer is pulled. Returns `Ok(None)` once the capture is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiveError::Capture`] if the capture source fails.
    pub fn recv(&mut self) -> Result<Option<Frame>, ReceiveError<C::Error>> {
        loop {
            let Some(buffer) = self.capture.next_buffer().map_err(ReceiveError::Capture)? else {
                return Ok(None);
            };

            match Frame::decode(&buffer) {
                Ok(frame) => {
                    self.stats.decoded += 1;
                    debug!(
                        frame_type = %frame.frame_type,
                        subtype = frame.subtype,
                        len = buffer.len(),
                        "decoded frame"
                    );
                    return Ok(Some(frame));
                },
                Err(error) => {
                    self.stats.record(&error);
                    warn!(kind = error.kind(), len = buffer.len(), %error, "dropping captured buffer");
                },
            }
        }
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> ReceiveStats {
        self.stats
    }

    /// Borrow the capture source.
    pub fn capture(&self) -> &C {
        &self.capture
    }

    /// Stop receiving and return the capture source.
    pub fn into_inner(self) -> C {
        self.capture
    }
}

impl<C: Capture> Iterator for Receiver<C> {
    type Item = Result<Frame, ReceiveError<C::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv().transpose()
    }
}
