// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{Trip, TripParseError, TripSequence};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripListParseError {
    pub line_no: usize,
    pub line: String,
    pub reason: TripParseError,
}

impl fmt::Display for TripListParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line_no, self.reason, self.line)
    }
}

impl std::error::Error for TripListParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

pub fn parse_trip_list(input: &str) -> Result<TripSequence, TripListParseError> {
    let mut sequence = TripSequence::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.split_once('#').map_or(raw, |(before, _)| before).trim();
        if line.is_empty() {
            continue;
        }

        let trip = line.parse::<Trip>().map_err(|reason| TripListParseError {
            line_no: idx + 1,
            line: raw.to_owned(),
            reason,
        })?;
        sequence.push(trip);
    }
    Ok(sequence)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripListExportError {
    pub index: usize,
    pub trip: Trip,
}

impl fmt::Display for TripListExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "trip {} ({:?} -> {:?}) cannot be written as FROM-TO text",
            self.index,
            self.trip.from().as_str(),
            self.trip.to().as_str()
        )
    }
}

impl std::error::Error for TripListExportError {}

/// Writes one `FROM-TO` line per trip. Fails on the first trip whose codes would read back
/// differently (reserved characters or surrounding whitespace).
pub fn export_trip_list(sequence: &TripSequence) -> Result<String, TripListExportError> {
    let mut out = String::new();
    for (index, trip) in sequence.iter().enumerate() {
        if !trip.is_text_safe() {
            return Err(TripListExportError { index, trip: trip.clone() });
        }
        out.push_str(&trip.to_string());
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{export_trip_list, parse_trip_list, TripListExportError, TripListParseError};
    use crate::model::{CodeError, Trip, TripParseError, TripSequence};

    #[test]
    fn parses_lines_skipping_comments_and_blanks() {
        let input = "# summer\nfra-jfk\n\n  jfk>lax  # red-eye\nlax sfo\n";
        let sequence = parse_trip_list(input).expect("parse");
        assert_eq!(
            export_trip_list(&sequence).expect("export"),
            "FRA-JFK\nJFK-LAX\nLAX-SFO\n"
        );
    }

    #[test]
    fn export_reads_back_as_the_same_sequence() {
        let mut sequence = TripSequence::new();
        sequence.add_trip("frankfurt", "new york").expect("add");
        sequence.add_trip("a b", "ßx").expect("add");
        sequence.add_trip("x", "y").expect("add");

        let text = export_trip_list(&sequence).expect("export");
        assert_eq!(text, "FRA-NEW\nA B-SSX\nX-Y\n");
        assert_eq!(parse_trip_list(&text).expect("parse"), sequence);
    }

    #[rstest]
    #[case("a-b", "xyz")]
    #[case("x#y", "abc")]
    #[case("abc", "d>e")]
    #[case(" la", "xyz")]
    #[case("abc", "x ")]
    fn export_refuses_codes_that_read_back_differently(#[case] from: &str, #[case] to: &str) {
        let mut sequence = TripSequence::new();
        sequence.add_trip("fra", "jfk").expect("add");
        sequence.add_trip(from, to).expect("add");

        let expected = Trip::parse(from, to).expect("trip");
        assert_eq!(
            export_trip_list(&sequence),
            Err(TripListExportError { index: 1, trip: expected })
        );
    }

    #[test]
    fn comment_marker_inside_a_trip_is_not_a_code() {
        let err = parse_trip_list("x#y-abc\n").unwrap_err();
        assert_eq!(err.reason, TripParseError::MissingSeparator { input: "x".to_owned() });
    }

    #[test]
    fn reports_offending_line() {
        let err = parse_trip_list("fra-jfk\njfk\n").unwrap_err();
        assert_eq!(
            err,
            TripListParseError {
                line_no: 2,
                line: "jfk".to_owned(),
                reason: TripParseError::MissingSeparator { input: "jfk".to_owned() },
            }
        );

        let err = parse_trip_list("fra-\n").unwrap_err();
        assert_eq!(err.reason, TripParseError::InvalidTo { source: CodeError::Empty });
        assert_eq!(err.line_no, 1);
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        assert!(parse_trip_list("\n# nothing\n").expect("parse").is_empty());
    }
}
