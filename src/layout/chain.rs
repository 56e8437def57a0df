// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Code, Trip};

/// Which backward scan found a trip's predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLink {
    /// Nearest earlier trip with the same origin and destination.
    Repeat,
    /// Nearest earlier trip arriving where this one departs.
    Continuation,
}

/// The earlier trip a trip connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TripSource {
    index: usize,
    link: SourceLink,
}

impl TripSource {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn link(&self) -> SourceLink {
        self.link
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TripPlacement {
    level: usize,
    chain: usize,
    source: Option<TripSource>,
}

impl TripPlacement {
    /// Vertical lane, starting at 1.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Connectivity group, starting at 0. Always `level - 1`.
    pub fn chain(&self) -> usize {
        self.chain
    }

    pub fn source(&self) -> Option<TripSource> {
        self.source
    }
}

/// Levels and chains for every trip of one sequence snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChainLayout {
    placements: Vec<TripPlacement>,
    max_level: usize,
}

impl ChainLayout {
    pub fn placements(&self) -> &[TripPlacement] {
        &self.placements
    }

    /// Placement of the trip at `index`.
    ///
    /// Panics when `index` is not a trip of the resolved sequence.
    pub fn placement(&self, index: usize) -> &TripPlacement {
        let len = self.placements.len();
        self.placements
            .get(index)
            .unwrap_or_else(|| panic!("trip index {index} out of range for {len} trips"))
    }

    /// Highest lane in use; 0 for an empty sequence.
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Resolves the predecessor, level and chain of every trip in one forward pass.
///
/// For trip `i` the predecessor is the nearest earlier repeat of the same trip; failing that,
/// the nearest earlier trip whose destination is trip `i`'s origin. A connected trip shares its
/// predecessor's level. An unconnected trip opens a new lane one above every lane used so far.
/// The first trip is always level 1, chain 0.
///
/// Every index is resolved exactly once and the "nearest earlier" lookups are kept in maps keyed
/// by trip and by destination, so the pass is linear in the number of trips.
pub fn resolve_chains(trips: &[Trip]) -> ChainLayout {
    let mut placements = Vec::<TripPlacement>::with_capacity(trips.len());
    let mut last_occurrence = HashMap::<&Trip, usize>::with_capacity(trips.len());
    let mut last_arrival = HashMap::<&Code, usize>::with_capacity(trips.len());
    let mut max_level = 0usize;

    for (index, trip) in trips.iter().enumerate() {
        let source = last_occurrence
            .get(trip)
            .map(|&earlier| TripSource { index: earlier, link: SourceLink::Repeat })
            .or_else(|| {
                last_arrival
                    .get(trip.from())
                    .map(|&earlier| TripSource { index: earlier, link: SourceLink::Continuation })
            });

        let level = match source {
            Some(source) => placements[source.index].level,
            None => max_level + 1,
        };
        max_level = max_level.max(level);

        tracing::trace!(index, %trip, level, ?source, "placed trip");
        placements.push(TripPlacement { level, chain: level - 1, source });

        last_occurrence.insert(trip, index);
        last_arrival.insert(trip.to(), index);
    }

    tracing::debug!(trips = trips.len(), lanes = max_level, "resolved trip chains");
    ChainLayout { placements, max_level }
}

/// Level of the trip at `index`; only `trips[..=index]` is consulted.
///
/// Panics when `index >= trips.len()`.
pub fn resolve_level(trips: &[Trip], index: usize) -> usize {
    resolve_prefix(trips, index).level
}

/// Chain of the trip at `index`; only `trips[..=index]` is consulted.
///
/// Panics when `index >= trips.len()`.
pub fn resolve_chain(trips: &[Trip], index: usize) -> usize {
    resolve_prefix(trips, index).chain
}

fn resolve_prefix(trips: &[Trip], index: usize) -> TripPlacement {
    assert!(index < trips.len(), "trip index {index} out of range for {} trips", trips.len());
    *resolve_chains(&trips[..=index]).placement(index)
}
