// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plain-text trip lists.
//!
//! One trip per line as `FROM-TO`; blank lines and `#` comments are ignored.

pub mod trip_list;

pub use trip_list::{export_trip_list, parse_trip_list, TripListExportError, TripListParseError};
