// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout for trip diagrams.
//!
//! `chain` resolves each trip's predecessor and lane, `connector` classifies the line drawn into
//! each trip, and `grid` turns lanes into absolute box positions. `connector_set` tracks the connectors handed
//! out last so callers can apply only what changed.

pub mod chain;
pub mod connector;
pub mod connector_set;
pub mod grid;

pub use chain::{
    resolve_chain, resolve_chains, resolve_level, ChainLayout, SourceLink, TripPlacement,
    TripSource,
};
pub use connector::{
    classify, connectors, ConnectionKind, Connector, ConnectorStyle, EndPlug, PathShape,
};
pub use connector_set::{ConnectorDiff, ConnectorSet};
pub use grid::{place_boxes, BoxGeometry, BoxPlacement};
