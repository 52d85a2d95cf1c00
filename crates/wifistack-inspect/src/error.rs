//! Inspector errors.

use std::{io, path::PathBuf};

use thiserror::Error;
use wifistack_core::ReceiveError;

/// Failures that stop an inspection run.
///
/// Malformed lines and corrupt frames are not errors; they are logged and
/// counted.
#[derive(Error, Debug)]
pub enum InspectError {
    /// Capture file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// CBOR output file could not be created
    #[error("failed to create {}: {source}", path.display())]
    Create {
        /// Path given on the command line
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Reading the capture failed
    #[error(transparent)]
    Receive(#[from] ReceiveError<io::Error>),

    /// Failed to encode a frame as CBOR
    #[error("failed to encode CBOR: {0}")]
    CborEncode(String),

    /// Failed to flush CBOR output
    #[error("failed to flush output: {0}")]
    Flush(#[source] io::Error),
}
