// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::trip::{Trip, TripParseError};

/// Ordered list of trips; insertion order is chronological.
///
/// Derived data (levels, chains, connectors) is never stored here; it is recomputed from the
/// current slice by [`crate::layout::resolve_chains`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripSequence {
    trips: Vec<Trip>,
}

impl TripSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Normalizes and appends a trip entered as free text.
    pub fn add_trip(&mut self, from: &str, to: &str) -> Result<&Trip, TripParseError> {
        let trip = Trip::parse(from, to)?;
        self.trips.push(trip);
        Ok(&self.trips[self.trips.len() - 1])
    }

    /// Removes the trip at `index`, shifting later trips left.
    pub fn remove(&mut self, index: usize) -> Option<Trip> {
        if index < self.trips.len() {
            Some(self.trips.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.trips.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Trip> {
        self.trips.get(index)
    }

    pub fn as_slice(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }
}

impl FromIterator<Trip> for TripSequence {
    fn from_iter<I: IntoIterator<Item = Trip>>(iter: I) -> Self {
        Self { trips: iter.into_iter().collect() }
    }
}

impl Extend<Trip> for TripSequence {
    fn extend<I: IntoIterator<Item = Trip>>(&mut self, iter: I) {
        self.trips.extend(iter);
    }
}

impl<'a> IntoIterator for &'a TripSequence {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.trips.iter()
    }
}
