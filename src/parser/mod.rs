// src/parser/mod.rs

//! os-release parsing
//!
//! The pipeline is split, parse each line, fold the fields into an
//! [`OsRelease`]. Every stage is total: malformed lines are skipped and
//! unreadable input degrades to an empty record, so callers never see a
//! parse error. Use [`parse_with_report`] to find out which lines were
//! ignored.
//!
//! ```
//! let release = osrelease::parse("ID=ubuntu\nID_LIKE=debian\nVERSION_ID=\"20.04\"\n");
//! assert_eq!(release.id(), "ubuntu");
//! assert_eq!(release.version_id(), "20.04");
//! assert!(release.is_debian_family());
//! ```

mod line;
mod lines;

pub use line::{parse_line, strip_quotes, unescape, Field, LineOutcome, SkipReason};
pub use lines::{split_lines, Lines};

use crate::release::OsRelease;
use std::io::Read;
use tracing::{trace, warn};

/// A line that contributed no field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based position in the input
    pub line_number: usize,
    pub reason: SkipReason,
}

/// Parse result together with the lines that were ignored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub release: OsRelease,
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    /// Skipped lines other than blanks and comments
    pub fn malformed(&self) -> impl Iterator<Item = &SkippedLine> {
        self.skipped
            .iter()
            .filter(|s| s.reason == SkipReason::MissingSeparator)
    }
}

/// Parse os-release content into a record
pub fn parse(content: &str) -> OsRelease {
    OsRelease::from_fields(split_lines(content).filter_map(|line| parse_line(line).into_field()))
}

/// Parse os-release content, recording every skipped line
pub fn parse_with_report(content: &str) -> ParseReport {
    let mut skipped = Vec::new();
    let mut fields = Vec::new();

    for (index, line) in split_lines(content).enumerate() {
        match parse_line(line) {
            LineOutcome::Field(field) => fields.push(field),
            LineOutcome::Skipped(reason) => {
                trace!("Skipping line {}: {}", index + 1, reason);
                skipped.push(SkippedLine {
                    line_number: index + 1,
                    reason,
                });
            }
        }
    }

    ParseReport {
        release: OsRelease::from_fields(fields),
        skipped,
    }
}

/// Parse os-release content from a reader
///
/// A read failure yields an empty record instead of an error. Invalid UTF-8
/// is replaced rather than rejected.
pub fn parse_reader<R: Read>(mut reader: R) -> OsRelease {
    let mut buf = Vec::new();
    if let Err(e) = reader.read_to_end(&mut buf) {
        warn!("Failed to read os-release content: {}", e);
        return OsRelease::default();
    }
    parse(&String::from_utf8_lossy(&buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("connection reset"))
        }
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), OsRelease::default());
    }

    #[test]
    fn test_comments_and_blanks_do_not_change_record() {
        let plain = parse("ID=arch\nNAME=\"Arch Linux\"\n");
        let noisy = parse("# header\n\nID=arch\n\n# NAME=ignored\nNAME=\"Arch Linux\"\n");
        assert_eq!(plain, noisy);
    }

    #[test]
    fn test_report_line_numbers() {
        let report = parse_with_report("# comment\nID=alpine\n\nbroken line\nVERSION_ID=3.19.1");

        assert_eq!(report.release.id(), "alpine");
        assert_eq!(report.release.version_id(), "3.19.1");
        assert_eq!(
            report.skipped,
            vec![
                SkippedLine { line_number: 1, reason: SkipReason::Comment },
                SkippedLine { line_number: 3, reason: SkipReason::Empty },
                SkippedLine { line_number: 4, reason: SkipReason::MissingSeparator },
            ]
        );
        let malformed: Vec<usize> = report.malformed().map(|s| s.line_number).collect();
        assert_eq!(malformed, vec![4]);
    }

    #[test]
    fn test_report_matches_parse() {
        let content = "ID=debian\nID=ubuntu\nnonsense\n";
        assert_eq!(parse_with_report(content).release, parse(content));
    }

    #[test]
    fn test_parse_reader() {
        let release = parse_reader("ID=fedora\r\nVERSION_ID=40\r\n".as_bytes());
        assert_eq!(release.id(), "fedora");
        assert_eq!(release.version_id(), "40");
    }

    #[test]
    fn test_parse_reader_failure_degrades_to_empty() {
        assert_eq!(parse_reader(FailingReader), OsRelease::default());
    }

    #[test]
    fn test_parse_reader_invalid_utf8() {
        let release = parse_reader(&b"ID=gentoo\nNAME=\xff\n"[..]);
        assert_eq!(release.id(), "gentoo");
        assert_eq!(release.name(), "\u{fffd}");
    }
}
