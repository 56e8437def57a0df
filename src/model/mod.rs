// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: location codes, trips and trip sequences.

pub mod code;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod sequence;
pub mod trip;

pub use code::{Code, CodeError, CODE_LEN};
pub use sequence::TripSequence;
pub use trip::{Trip, TripParseError, RESERVED_CHARS};
