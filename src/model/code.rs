// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Number of characters kept from a raw location string.
pub const CODE_LEN: usize = 3;

/// A normalized location code (e.g. `FRA`).
///
/// Codes are uppercased and truncated to [`CODE_LEN`] characters on construction, so equality
/// between two codes is exactly the equality the chain resolver relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(SmolStr);

impl Code {
    /// Normalizes free text into a code: uppercase, keep the first [`CODE_LEN`] chars.
    ///
    /// Whitespace is kept as entered; only the empty string is rejected. Text formats that use
    /// whitespace as padding trim before calling this.
    pub fn normalize(raw: &str) -> Result<Self, CodeError> {
        if raw.is_empty() {
            return Err(CodeError::Empty);
        }

        // Uppercasing can expand a char (`ß` -> `SS`); truncate afterwards.
        let normalized = raw.chars().flat_map(char::to_uppercase).take(CODE_LEN).collect();
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Code {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl TryFrom<String> for Code {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::normalize(&value)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.0.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    Empty,
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("location code must not be empty"),
        }
    }
}

impl std::error::Error for CodeError {}
