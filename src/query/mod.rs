// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only views over a resolved trip sequence.

pub mod report;

pub use report::{diagram_report, lanes, ConnectorReport, DiagramReport, TripReport};
