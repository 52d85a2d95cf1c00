//! Receive loop errors.
//!
//! Decode failures are not errors at this level: the receive loop drops the
//! buffer, counts it and moves on. Only a failing capture source stops it.

use thiserror::Error;

/// Errors surfaced by [`crate::Receiver`].
#[derive(Error, Debug)]
pub enum ReceiveError<E>
where
    E: std::error::Error + 'static,
{
    /// Capture source failed
    #[error("capture failed: {0}")]
    Capture(#[source] E),
}
