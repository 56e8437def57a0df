// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tripline: lane and connector layout for sequential trip diagrams.
//!
//! Trips are origin/destination pairs in chronological order. For every trip the layout
//! resolves which earlier trip it attaches to (an exact repeat or a continuation), the lane it
//! is drawn on, and how the connector into it is styled. Rendering is a separate consumer.

pub mod format;
pub mod layout;
pub mod model;
pub mod ops;
pub mod query;
pub mod render;
