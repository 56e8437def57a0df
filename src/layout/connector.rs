// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use super::chain::ChainLayout;
use crate::model::Trip;

/// Relationship between a trip and the earlier trip its connector starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    Repeated,
    Continued,
    Disconnected,
}

impl ConnectionKind {
    pub fn style(self) -> ConnectorStyle {
        match self {
            Self::Repeated => ConnectorStyle {
                path: PathShape::Straight,
                color: "gray",
                size: CONNECTOR_SIZE,
                dashed: true,
                end_plug: EndPlug::Arrow,
                drop_shadow: true,
            },
            Self::Continued => ConnectorStyle {
                path: PathShape::Straight,
                color: "blue",
                size: CONNECTOR_SIZE,
                dashed: false,
                end_plug: EndPlug::Behind,
                drop_shadow: true,
            },
            Self::Disconnected => ConnectorStyle {
                path: PathShape::Fluid,
                color: "orange",
                size: CONNECTOR_SIZE,
                dashed: false,
                end_plug: EndPlug::Arrow,
                drop_shadow: true,
            },
        }
    }
}

const CONNECTOR_SIZE: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathShape {
    Straight,
    /// Curved arc between the two boxes.
    Fluid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndPlug {
    Arrow,
    /// Line ends under the target box; no visible arrowhead.
    Behind,
}

/// Presentation hints a renderer applies to a connector.
///
/// Connectors always leave the right side of the source box and enter the left side of the
/// target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectorStyle {
    pub path: PathShape,
    pub color: &'static str,
    pub size: u8,
    pub dashed: bool,
    pub end_plug: EndPlug,
    pub drop_shadow: bool,
}

/// `Repeated` when both codes match, else `Continued` when `curr` departs from `prev`'s
/// destination, else `Disconnected`.
pub fn classify(prev: &Trip, curr: &Trip) -> ConnectionKind {
    if curr.is_repeat_of(prev) {
        ConnectionKind::Repeated
    } else if curr.continues(prev) {
        ConnectionKind::Continued
    } else {
        ConnectionKind::Disconnected
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Connector {
    from_index: usize,
    to_index: usize,
    kind: ConnectionKind,
}

impl Connector {
    pub fn new(from_index: usize, to_index: usize, kind: ConnectionKind) -> Self {
        Self { from_index, to_index, kind }
    }

    pub fn from_index(&self) -> usize {
        self.from_index
    }

    pub fn to_index(&self) -> usize {
        self.to_index
    }

    pub fn kind(&self) -> ConnectionKind {
        self.kind
    }

    pub fn style(&self) -> ConnectorStyle {
        self.kind.style()
    }
}

/// One connector into every trip after the first.
///
/// A trip repeating its immediate neighbour gets a stacked `Repeated` connector from that
/// neighbour. Otherwise the connector starts at the trip's resolved predecessor (or the
/// immediate neighbour when it has none) and is `Continued` when the trip departs from that
/// predecessor's destination, `Disconnected` otherwise.
///
/// `layout` must have been resolved from `trips`.
pub fn connectors(trips: &[Trip], layout: &ChainLayout) -> Vec<Connector> {
    assert_eq!(trips.len(), layout.len(), "layout was resolved for a different sequence");

    let mut out = Vec::with_capacity(trips.len().saturating_sub(1));
    for (index, curr) in trips.iter().enumerate().skip(1) {
        let prev_index = index - 1;
        if classify(&trips[prev_index], curr) == ConnectionKind::Repeated {
            out.push(Connector::new(prev_index, index, ConnectionKind::Repeated));
            continue;
        }

        let from_index = layout.placement(index).source().map_or(prev_index, |s| s.index());
        let kind = if curr.continues(&trips[from_index]) {
            ConnectionKind::Continued
        } else {
            ConnectionKind::Disconnected
        };
        out.push(Connector::new(from_index, index, kind));
    }

    tracing::debug!(connectors = out.len(), "classified connectors");
    out
}
