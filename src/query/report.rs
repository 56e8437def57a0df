// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::layout::{
    place_boxes, BoxGeometry, BoxPlacement, ChainLayout, ConnectionKind, Connector, ConnectorStyle,
    TripSource,
};
use crate::model::{Code, Trip};

/// Everything a front-end needs to draw a trip diagram, in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramReport {
    pub lanes: usize,
    pub trips: Vec<TripReport>,
    pub connectors: Vec<ConnectorReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripReport {
    pub index: usize,
    pub from: Code,
    pub to: Code,
    pub level: usize,
    pub chain: usize,
    pub source: Option<TripSource>,
    #[serde(rename = "box")]
    pub placement: BoxPlacement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectorReport {
    pub from_index: usize,
    pub to_index: usize,
    pub kind: ConnectionKind,
    pub style: ConnectorStyle,
}

/// `layout` must have been resolved from `trips`.
pub fn diagram_report(
    trips: &[Trip],
    layout: &ChainLayout,
    connectors: &[Connector],
    geometry: &BoxGeometry,
) -> DiagramReport {
    let trips = trips
        .iter()
        .zip(layout.placements())
        .zip(place_boxes(layout, geometry))
        .enumerate()
        .map(|(index, ((trip, placement), placement_box))| TripReport {
            index,
            from: trip.from().clone(),
            to: trip.to().clone(),
            level: placement.level(),
            chain: placement.chain(),
            source: placement.source(),
            placement: placement_box,
        })
        .collect();

    let connectors = connectors
        .iter()
        .map(|c| ConnectorReport {
            from_index: c.from_index(),
            to_index: c.to_index(),
            kind: c.kind(),
            style: c.style(),
        })
        .collect();

    DiagramReport { lanes: layout.max_level(), trips, connectors }
}

/// Trip indices grouped by level; element 0 holds level 1.
pub fn lanes(layout: &ChainLayout) -> Vec<Vec<usize>> {
    let mut lanes = vec![Vec::new(); layout.max_level()];
    for (index, placement) in layout.placements().iter().enumerate() {
        lanes[placement.level() - 1].push(index);
    }
    lanes
}
