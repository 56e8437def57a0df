// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::code::{Code, CodeError};

/// One leg of travel: an origin/destination pair of normalized codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trip {
    from: Code,
    to: Code,
}

impl Trip {
    pub fn new(from: Code, to: Code) -> Self {
        Self { from, to }
    }

    /// Normalizes both ends of a free-text trip.
    pub fn parse(from: &str, to: &str) -> Result<Self, TripParseError> {
        let from = Code::normalize(from).map_err(|source| TripParseError::InvalidFrom { source })?;
        let to = Code::normalize(to).map_err(|source| TripParseError::InvalidTo { source })?;
        Ok(Self { from, to })
    }

    pub fn from(&self) -> &Code {
        &self.from
    }

    pub fn to(&self) -> &Code {
        &self.to
    }

    /// `true` when `earlier` has the same origin and destination.
    pub fn is_repeat_of(&self, earlier: &Trip) -> bool {
        self.from == earlier.from && self.to == earlier.to
    }

    /// `true` when this trip departs from where `earlier` arrived.
    pub fn continues(&self, earlier: &Trip) -> bool {
        earlier.to == self.from
    }

    /// `true` when the `FROM-TO` form of this trip parses back to the same trip.
    pub fn is_text_safe(&self) -> bool {
        is_text_safe_code(&self.from) && is_text_safe_code(&self.to)
    }
}

/// Characters with a meaning in the `FROM-TO` text form: separators and the comment marker.
pub const RESERVED_CHARS: [char; 3] = ['-', '>', '#'];

fn is_text_safe_code(code: &Code) -> bool {
    let s = code.as_str();
    s.trim() == s && !s.contains(RESERVED_CHARS)
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Parses `FROM-TO`, `FROM>TO` or `FROM TO`.
///
/// Whitespace around each side is padding. Trips whose codes would not survive a
/// `Display`/`FromStr` round trip are rejected.
impl FromStr for Trip {
    type Err = TripParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (from, to) = trimmed
            .split_once(['-', '>'])
            .or_else(|| trimmed.split_once(char::is_whitespace))
            .ok_or_else(|| TripParseError::MissingSeparator { input: trimmed.to_owned() })?;

        let trip = Self::parse(from.trim(), to.trim())?;
        let ambiguous = [&trip.from, &trip.to]
            .into_iter()
            .find(|code| !is_text_safe_code(code))
            .map(ToString::to_string);
        if let Some(code) = ambiguous {
            return Err(TripParseError::AmbiguousCode { input: trimmed.to_owned(), code });
        }
        Ok(trip)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripParseError {
    MissingSeparator { input: String },
    /// A normalized code that reads differently when written back as text.
    AmbiguousCode { input: String, code: String },
    InvalidFrom { source: CodeError },
    InvalidTo { source: CodeError },
}

impl fmt::Display for TripParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator { input } => {
                write!(f, "trip '{input}' must look like FROM-TO")
            }
            Self::AmbiguousCode { input, code } => {
                write!(f, "trip '{input}' yields code {code:?}, which cannot be written as FROM-TO")
            }
            Self::InvalidFrom { source } => write!(f, "invalid origin: {source}"),
            Self::InvalidTo { source } => write!(f, "invalid destination: {source}"),
        }
    }
}

impl std::error::Error for TripParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingSeparator { .. } | Self::AmbiguousCode { .. } => None,
            Self::InvalidFrom { source } | Self::InvalidTo { source } => Some(source),
        }
    }
}
