//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use wifistack_proto::MacAddress;

/// Decode a hex capture of 802.11 frames
#[derive(Debug, Clone, Parser)]
#[command(name = "wifistack-inspect", version, about)]
pub struct Args {
    /// Hex capture file, one frame per line (`-` reads stdin)
    pub input: PathBuf,

    /// Only report frames with this address in any header address slot
    #[arg(long, value_name = "MAC")]
    pub address: Option<MacAddress>,

    /// Write every reported frame to this file as a CBOR sequence
    #[arg(long, value_name = "PATH")]
    pub cbor_out: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Where the capture is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Standard input
    Stdin,
    /// A capture file
    File(PathBuf),
}

impl Args {
    /// Resolve the positional input argument.
    #[must_use]
    pub fn input(&self) -> Input {
        if self.input.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(self.input.clone())
        }
    }
}
