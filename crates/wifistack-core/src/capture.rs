//! Capture abstraction for raw frame sources.
//!
//! Abstracts over anything that yields already-delimited frame buffers:
//! monitor-mode interfaces, replayed capture files, in-memory fixtures.

use std::{collections::VecDeque, convert::Infallible};

use bytes::Bytes;

/// Source of captured frame buffers.
///
/// Each call yields exactly one frame, FCS included. Framing within a byte
/// stream is the implementation's job; the receive loop never splits or joins
/// buffers.
pub trait Capture {
    /// Capture-specific error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Pull the next captured buffer.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source fails. The receive loop
    /// surfaces it to its caller; it is not treated as a bad frame.
    fn next_buffer(&mut self) -> Result<Option<Bytes>, Self::Error>;
}

impl<C: Capture + ?Sized> Capture for &mut C {
    type Error = C::Error;

    fn next_buffer(&mut self) -> Result<Option<Bytes>, Self::Error> {
        (**self).next_buffer()
    }
}

/// In-memory capture that replays a fixed queue of buffers.
#[derive(Debug, Clone, Default)]
pub struct ReplayCapture {
    buffers: VecDeque<Bytes>,
}

impl ReplayCapture {
    /// Create a replay of `buffers`, yielded in order.
    pub fn new<I, B>(buffers: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        Self { buffers: buffers.into_iter().map(Into::into).collect() }
    }

    /// Queue another buffer at the end of the replay.
    pub fn push(&mut self, buffer: impl Into<Bytes>) {
        self.buffers.push_back(buffer.into());
    }

    /// Number of buffers not yet yielded.
    pub fn remaining(&self) -> usize {
        self.buffers.len()
    }
}

impl Capture for ReplayCapture {
    type Error = Infallible;

    fn next_buffer(&mut self) -> Result<Option<Bytes>, Self::Error> {
        Ok(self.buffers.pop_front())
    }
}
