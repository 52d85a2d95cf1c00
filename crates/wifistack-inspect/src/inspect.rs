//! Inspection run: replay, filter, log, optionally export.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
};

use tracing::{info, warn};
use wifistack_core::{ReceiveStats, Receiver};
use wifistack_proto::{Frame, MacAddress};

use crate::{Args, HexCapture, Input, InspectError};

/// Outcome of an inspection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Receive loop counters
    pub stats: ReceiveStats,
    /// Frames that passed the address filter
    pub reported: u64,
    /// Capture lines skipped as malformed hex
    pub malformed_lines: u64,
}

impl Report {
    /// Process exit status: 0 when nothing was dropped, 2 when any buffer or
    /// capture line was dropped.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.stats.dropped() > 0 || self.malformed_lines > 0 { 2 } else { 0 }
    }
}

/// Exit status for a finished run. Failed runs exit with 1.
#[must_use]
pub fn exit_code(result: &Result<Report, InspectError>) -> u8 {
    match result {
        Ok(report) => report.exit_code(),
        Err(_) => 1,
    }
}

/// Run an inspection as configured on the command line.
///
/// # Errors
///
/// Returns an error if the input or output file cannot be opened, or if
/// reading the capture or writing CBOR fails.
pub fn run(args: &Args) -> Result<Report, InspectError> {
    let reader: Box<dyn BufRead> = match args.input() {
        Input::Stdin => Box::new(io::stdin().lock()),
        Input::File(path) => {
            let file = File::open(&path).map_err(|source| InspectError::Open { path, source })?;
            Box::new(BufReader::new(file))
        },
    };

    let output = match &args.cbor_out {
        Some(path) => {
            let file = File::create(path)
                .map_err(|source| InspectError::Create { path: path.clone(), source })?;
            Some(BufWriter::new(file))
        },
        None => None,
    };

    inspect(reader, args.address, output)
}

/// Replay `reader` through the receive loop.
///
/// Frames that mention `filter` in any address slot (or every frame, when no
/// filter is given) are logged and, if `output` is set, appended to it as a
/// CBOR sequence.
///
/// # Errors
///
/// Returns an error if reading the capture or writing CBOR fails.
pub fn inspect<R, W>(
    reader: R,
    filter: Option<MacAddress>,
    mut output: Option<W>,
) -> Result<Report, InspectError>
where
    R: BufRead,
    W: Write,
{
    let mut capture = HexCapture::new(reader);
    let mut receiver = Receiver::new(&mut capture);
    let mut reported = 0u64;

    while let Some(frame) = receiver.recv()? {
        if !matches_filter(&frame, filter) {
            continue;
        }
        reported += 1;

        if frame.carries_fourth_address() {
            warn!(%frame, "four-address frame, payload starts with the unmodeled address");
        } else {
            info!(%frame, "frame");
        }

        if let Some(out) = output.as_mut() {
            ciborium::into_writer(&frame, out)
                .map_err(|e| InspectError::CborEncode(e.to_string()))?;
        }
    }

    let stats = receiver.stats();
    if let Some(out) = output.as_mut() {
        out.flush().map_err(InspectError::Flush)?;
    }

    let report = Report { stats, reported, malformed_lines: capture.skipped() };
    info!(
        decoded = report.stats.decoded,
        too_short = report.stats.too_short,
        bad_checksum = report.stats.bad_checksum,
        malformed_lines = report.malformed_lines,
        reported = report.reported,
        "capture complete"
    );

    Ok(report)
}

fn matches_filter(frame: &Frame, filter: Option<MacAddress>) -> bool {
    filter.is_none_or(|address| frame.addresses().contains(&address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_capture_reports_nothing() {
        let report = inspect("".as_bytes(), None, None::<Vec<u8>>).unwrap();
        assert_eq!(report, Report::default());
    }

    #[test]
    fn garbage_lines_are_counted_not_fatal() {
        let report = inspect("not hex\n00\n".as_bytes(), None, None::<Vec<u8>>).unwrap();
        assert_eq!(report.malformed_lines, 1);
        assert_eq!(report.stats.too_short, 1);
        assert_eq!(report.reported, 0);
        assert_eq!(report.exit_code(), 2);
    }

    #[test]
    fn clean_run_exits_zero() {
        let report = Report {
            stats: ReceiveStats { decoded: 3, too_short: 0, bad_checksum: 0 },
            reported: 3,
            malformed_lines: 0,
        };
        assert_eq!(exit_code(&Ok(report)), 0);
    }

    #[test]
    fn dropped_buffers_exit_two() {
        let bad_checksum = Report {
            stats: ReceiveStats { decoded: 1, too_short: 0, bad_checksum: 1 },
            ..Report::default()
        };
        let malformed = Report { malformed_lines: 1, ..Report::default() };

        assert_eq!(exit_code(&Ok(bad_checksum)), 2);
        assert_eq!(exit_code(&Ok(malformed)), 2);
    }

    #[test]
    fn failed_run_exits_one() {
        let err = InspectError::Flush(io::Error::new(io::ErrorKind::WriteZero, "disk full"));
        assert_eq!(exit_code(&Err(err)), 1);
    }
}
