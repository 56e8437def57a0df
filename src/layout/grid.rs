// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::chain::ChainLayout;

/// Pixel geometry for placing trip boxes.
///
/// Every field is optional when deserialized; missing fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoxGeometry {
    pub origin_x: u32,
    pub origin_y: u32,
    /// Horizontal distance between consecutive trips.
    pub column_pitch: u32,
    /// Vertical distance between lanes.
    pub lane_pitch: u32,
}

impl Default for BoxGeometry {
    fn default() -> Self {
        Self { origin_x: 100, origin_y: 100, column_pitch: 200, lane_pitch: 100 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoxPlacement {
    pub index: usize,
    pub level: usize,
    pub x: u64,
    pub y: u64,
}

/// Absolute box positions: one column per trip, level 1 on the bottom lane.
pub fn place_boxes(layout: &ChainLayout, geometry: &BoxGeometry) -> Vec<BoxPlacement> {
    let max_level = layout.max_level();
    layout
        .placements()
        .iter()
        .enumerate()
        .map(|(index, placement)| {
            let level = placement.level();
            let lanes_above = (max_level - level) as u64;
            BoxPlacement {
                index,
                level,
                x: u64::from(geometry.origin_x) + index as u64 * u64::from(geometry.column_pitch),
                y: u64::from(geometry.origin_y) + lanes_above * u64::from(geometry.lane_pitch),
            }
        })
        .collect()
}
