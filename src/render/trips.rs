// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use crate::layout::{ChainLayout, ConnectionKind, Connector, EndPlug, PathShape};
use crate::model::Trip;

use super::text::{canvas_to_string_trimmed, text_len};
use super::{Canvas, CanvasError, ARROW_HEAD, LINE_DASHED};

const BOX_HEIGHT: usize = 3;
const LANE_GAP: usize = 2;
const COL_GAP: usize = 7;
const TOP_MARGIN: usize = 1;
const LABEL_PAD: usize = 1;
// Offsets inside the gap columns where routed connectors turn.
const EXIT_OFFSET: usize = 2;
const ENTER_OFFSET: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TripRenderError {
    Canvas(CanvasError),
    LayoutMismatch { trips: usize, placements: usize },
    UnknownTrip { index: usize },
    BackwardConnector { from_index: usize, to_index: usize },
}

impl fmt::Display for TripRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
            Self::LayoutMismatch { trips, placements } => {
                write!(f, "layout has {placements} placements for {trips} trips")
            }
            Self::UnknownTrip { index } => write!(f, "connector references unknown trip {index}"),
            Self::BackwardConnector { from_index, to_index } => {
                write!(f, "connector must point forward (from={from_index}, to={to_index})")
            }
        }
    }
}

impl std::error::Error for TripRenderError {}

impl From<CanvasError> for TripRenderError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

/// Cell bounds of one trip box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TripBox {
    x0: usize,
    x1: usize,
    top: usize,
    level: usize,
}

impl TripBox {
    fn mid(&self) -> usize {
        self.top + 1
    }

    fn bottom(&self) -> usize {
        self.top + BOX_HEIGHT - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Horizontal { x0: usize, x1: usize, y: usize },
    Vertical { x: usize, y0: usize, y1: usize },
}

/// Renders trips as boxes on lanes (highest level on top) joined by their connectors.
///
/// Straight connectors join neighbouring boxes on one lane: `╌` with an arrowhead for repeats,
/// a solid line merged into both box edges for continuations. Every other connector leaves
/// through the gap after its source box, runs along the empty row next to the target lane and
/// enters the target from the left.
pub fn render_trips_unicode(
    trips: &[Trip],
    layout: &ChainLayout,
    connectors: &[Connector],
) -> Result<String, TripRenderError> {
    if trips.len() != layout.len() {
        return Err(TripRenderError::LayoutMismatch {
            trips: trips.len(),
            placements: layout.len(),
        });
    }
    if trips.is_empty() {
        return Ok(String::new());
    }

    let labels = trips.iter().map(ToString::to_string).collect::<Vec<_>>();
    let inner_width = labels.iter().map(|label| text_len(label)).max().unwrap_or(0) + 2 * LABEL_PAD;
    let box_width = inner_width + 2;
    let max_level = layout.max_level();

    let boxes = layout
        .placements()
        .iter()
        .enumerate()
        .map(|(index, placement)| {
            let x0 = index * (box_width + COL_GAP);
            TripBox {
                x0,
                x1: x0 + box_width - 1,
                top: TOP_MARGIN + (max_level - placement.level()) * (BOX_HEIGHT + LANE_GAP),
                level: placement.level(),
            }
        })
        .collect::<Vec<_>>();

    let width = trips.len() * (box_width + COL_GAP) - COL_GAP;
    let height = TOP_MARGIN + max_level * (BOX_HEIGHT + LANE_GAP) - LANE_GAP + 1;
    let mut canvas = Canvas::new(width, height)?;

    for (trip_box, label) in boxes.iter().zip(&labels) {
        canvas.draw_box(trip_box.x0, trip_box.top, trip_box.x1, trip_box.bottom())?;
        canvas.write_str(trip_box.x0 + 1 + LABEL_PAD, trip_box.mid(), label)?;
    }

    for connector in connectors {
        let (from_index, to_index) = (connector.from_index(), connector.to_index());
        if from_index >= to_index {
            return Err(TripRenderError::BackwardConnector { from_index, to_index });
        }
        let src = *boxes.get(from_index).ok_or(TripRenderError::UnknownTrip { index: from_index })?;
        let dst = *boxes.get(to_index).ok_or(TripRenderError::UnknownTrip { index: to_index })?;
        draw_connector(&mut canvas, src, dst, connector.kind())?;
    }

    Ok(canvas_to_string_trimmed(&canvas))
}

fn draw_connector(
    canvas: &mut Canvas,
    src: TripBox,
    dst: TripBox,
    kind: ConnectionKind,
) -> Result<(), CanvasError> {
    let style = kind.style();
    let arrow = style.end_plug == EndPlug::Arrow;
    let adjacent = dst.x0 == src.x1 + 1 + COL_GAP;

    if style.dashed && adjacent && src.level == dst.level {
        let y = src.mid();
        for x in (src.x1 + 1)..(dst.x0 - 1) {
            canvas.set(x, y, LINE_DASHED)?;
        }
        return canvas.set(dst.x0 - 1, y, ARROW_HEAD);
    }

    let segments = if style.path == PathShape::Straight && adjacent && src.level == dst.level {
        let mut segments = SmallVec::<[Segment; 5]>::new();
        let end = if arrow { dst.x0 - 2 } else { dst.x0 };
        segments.push(Segment::Horizontal { x0: src.x1, x1: end, y: src.mid() });
        segments
    } else {
        route(src, dst, arrow)
    };

    for segment in segments {
        match segment {
            Segment::Horizontal { x0, x1, y } => canvas.draw_hline(x0, x1, y)?,
            Segment::Vertical { x, y0, y1 } => canvas.draw_vline(x, y0, y1)?,
        }
    }

    if arrow {
        canvas.set(dst.x0 - 1, dst.mid(), ARROW_HEAD)?;
    }
    Ok(())
}

/// Five-leg route: out of `src`, along the gap to the gutter row beside the target lane, across,
/// and into `dst` from the left.
fn route(src: TripBox, dst: TripBox, arrow: bool) -> SmallVec<[Segment; 5]> {
    let exit_x = src.x1 + EXIT_OFFSET;
    let enter_x = dst.x0 - ENTER_OFFSET;
    let gutter_y = if dst.level > src.level { dst.bottom() + 1 } else { dst.top - 1 };
    let end_x = if arrow { dst.x0 - 2 } else { dst.x0 };

    let mut segments = SmallVec::new();
    segments.push(Segment::Horizontal { x0: src.x1, x1: exit_x, y: src.mid() });
    segments.push(Segment::Vertical { x: exit_x, y0: src.mid(), y1: gutter_y });
    segments.push(Segment::Horizontal { x0: exit_x, x1: enter_x, y: gutter_y });
    segments.push(Segment::Vertical { x: enter_x, y0: gutter_y, y1: dst.mid() });
    segments.push(Segment::Horizontal { x0: enter_x, x1: end_x, y: dst.mid() });
    segments
}
