//! Line-oriented hex capture source.

use std::io::{self, BufRead};

use bytes::Bytes;
use tracing::warn;
use wifistack_core::Capture;

/// [`Capture`] over a hex dump with one frame per line.
///
/// Lines that are not valid hex (or not even UTF-8) are logged and skipped so
/// that one damaged line cannot end a replay. Only I/O failures are returned
/// as errors.
#[derive(Debug)]
pub struct HexCapture<R> {
    reader: R,
    line: Vec<u8>,
    line_number: u64,
    skipped: u64,
}

impl<R: BufRead> HexCapture<R> {
    /// Read frames from `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader, line: Vec::new(), line_number: 0, skipped: 0 }
    }

    /// Number of lines skipped as malformed so far.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

/// Strip comments and separators. Returns `None` for lines with no content.
fn frame_digits(line: &str) -> Option<String> {
    let content = line.split_once('#').map_or(line, |(before, _)| before);
    let digits: String =
        content.chars().filter(|c| !c.is_ascii_whitespace() && *c != ':').collect();

    if digits.is_empty() { None } else { Some(digits) }
}

impl<R: BufRead> Capture for HexCapture<R> {
    type Error = io::Error;

    fn next_buffer(&mut self) -> Result<Option<Bytes>, Self::Error> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let text = match std::str::from_utf8(&self.line) {
                Ok(text) => text,
                Err(error) => {
                    self.skipped += 1;
                    warn!(line = self.line_number, %error, "skipping non-UTF-8 capture line");
                    continue;
                },
            };

            let Some(digits) = frame_digits(text) else {
                continue;
            };

            match hex::decode(&digits) {
                Ok(bytes) => return Ok(Some(Bytes::from(bytes))),
                Err(error) => {
                    self.skipped += 1;
                    warn!(line = self.line_number, %error, "skipping malformed capture line");
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_ignore_separators_and_comments() {
        assert_eq!(frame_digits("aa bb:cc\tdd # trailing note\n").as_deref(), Some("aabbccdd"));
        assert_eq!(frame_digits("   \n"), None);
        assert_eq!(frame_digits("# only a comment"), None);
    }

    #[test]
    fn yields_one_buffer_per_line() {
        let input = "# header\n0102\n\nzz\n03 04 05\n";
        let mut capture = HexCapture::new(input.as_bytes());

        assert_eq!(capture.next_buffer().unwrap().as_deref(), Some(&[1u8, 2][..]));
        assert_eq!(capture.next_buffer().unwrap().as_deref(), Some(&[3u8, 4, 5][..]));
        assert_eq!(capture.next_buffer().unwrap(), None);
        assert_eq!(capture.skipped(), 1);
    }

    #[test]
    fn odd_digit_count_is_skipped() {
        let mut capture = HexCapture::new("abc\n".as_bytes());
        assert_eq!(capture.next_buffer().unwrap(), None);
        assert_eq!(capture.skipped(), 1);
    }

    #[test]
    fn non_utf8_line_is_skipped() {
        let mut capture = HexCapture::new(&b"\xff\xfe garbage\n0102\n"[..]);

        assert_eq!(capture.next_buffer().unwrap().as_deref(), Some(&[1u8, 2][..]));
        assert_eq!(capture.next_buffer().unwrap(), None);
        assert_eq!(capture.skipped(), 1);
    }
}
