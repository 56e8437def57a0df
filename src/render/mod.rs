// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tripline and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering for trip diagrams.
//!
//! The renderer is a consumer of the layout: it places one box per trip at `(index, level)` and
//! draws each classified connector.

use std::fmt;

mod text;
pub mod trips;

pub use trips::{render_trips_unicode, TripRenderError};

pub const LINE_HORIZONTAL: char = '─';
pub const LINE_VERTICAL: char = '│';
pub const LINE_DASHED: char = '╌';
pub const ARROW_HEAD: char = '▶';

/// Which neighbours a line cell reaches towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Links(u8);

impl Links {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 2;
    const UP: u8 = 4;
    const DOWN: u8 = 8;

    const HORIZONTAL: Self = Self(Self::LEFT | Self::RIGHT);
    const VERTICAL: Self = Self(Self::UP | Self::DOWN);

    fn has(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    fn glyph(self) -> char {
        match self.0 {
            0 => ' ',
            1..=3 => '─',
            4 | 8 | 12 => '│',
            10 => '┌',
            9 => '┐',
            6 => '└',
            5 => '┘',
            14 => '├',
            13 => '┤',
            11 => '┬',
            7 => '┴',
            _ => '┼',
        }
    }
}

fn links_of(ch: char) -> Option<Links> {
    let bits = match ch {
        '─' => Links::LEFT | Links::RIGHT,
        '│' => Links::UP | Links::DOWN,
        '┌' => Links::RIGHT | Links::DOWN,
        '┐' => Links::LEFT | Links::DOWN,
        '└' => Links::RIGHT | Links::UP,
        '┘' => Links::LEFT | Links::UP,
        '├' => Links::UP | Links::DOWN | Links::RIGHT,
        '┤' => Links::UP | Links::DOWN | Links::LEFT,
        '┬' => Links::LEFT | Links::RIGHT | Links::DOWN,
        '┴' => Links::LEFT | Links::RIGHT | Links::UP,
        '┼' => Links::LEFT | Links::RIGHT | Links::UP | Links::DOWN,
        _ => return None,
    };
    Some(Links(bits))
}

/// Bounds-checked character grid.
///
/// Line glyphs merge: crossing or touching lines render as the junction of the directions that
/// actually meet a neighbouring line. Any other character overwrites the cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    chars: Vec<char>,
    links: Vec<Links>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width.checked_mul(height).ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self { width, height, chars: vec![' '; len], links: vec![Links::default(); len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.glyph_at(x, y, idx))
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        match links_of(ch) {
            Some(links) => self.links[idx] = self.links[idx].with(links),
            None => {
                self.chars[idx] = ch;
                self.links[idx] = Links::default();
            }
        }
        Ok(())
    }

    /// Writes `text` from `(x, y)` rightwards, clipping at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        self.index_of(0, y)?;
        for (x, ch) in (x..self.width).zip(text.chars()) {
            self.set(x, y, ch)?;
        }
        Ok(())
    }

    /// Horizontal line over `x0..=x1` (either order) on row `y`.
    pub fn draw_hline(&mut self, x0: usize, x1: usize, y: usize) -> Result<(), CanvasError> {
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        self.index_of(lo, y)?;
        self.index_of(hi, y)?;
        for x in lo..=hi {
            self.set(x, y, LINE_HORIZONTAL)?;
        }
        Ok(())
    }

    /// Vertical line over `y0..=y1` (either order) in column `x`.
    pub fn draw_vline(&mut self, x: usize, y0: usize, y1: usize) -> Result<(), CanvasError> {
        let (lo, hi) = (y0.min(y1), y0.max(y1));
        self.index_of(x, lo)?;
        self.index_of(x, hi)?;
        for y in lo..=hi {
            self.set(x, y, LINE_VERTICAL)?;
        }
        Ok(())
    }

    /// Rectangle outline with corners `(x0, y0)` and `(x1, y1)`; nothing is drawn when either
    /// corner is out of bounds.
    pub fn draw_box(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) -> Result<(), CanvasError> {
        let (left, right) = (x0.min(x1), x0.max(x1));
        let (top, bottom) = (y0.min(y1), y0.max(y1));
        self.index_of(left, top)?;
        self.index_of(right, bottom)?;

        self.draw_hline(left, right, top)?;
        self.draw_hline(left, right, bottom)?;
        self.draw_vline(left, top, bottom)?;
        self.draw_vline(right, top, bottom)
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(y * self.width + x)
    }

    fn glyph_at(&self, x: usize, y: usize, idx: usize) -> char {
        let own = self.links[idx];
        if own == Links::default() {
            return self.chars[idx];
        }

        let neighbour = |dx: isize, dy: isize| -> Links {
            let nx = x.checked_add_signed(dx).filter(|&nx| nx < self.width);
            let ny = y.checked_add_signed(dy).filter(|&ny| ny < self.height);
            match (nx, ny) {
                (Some(nx), Some(ny)) => self.links[ny * self.width + nx],
                _ => Links::default(),
            }
        };

        let mut met = 0u8;
        if own.has(Links::LEFT) && neighbour(-1, 0).has(Links::RIGHT) {
            met |= Links::LEFT;
        }
        if own.has(Links::RIGHT) && neighbour(1, 0).has(Links::LEFT) {
            met |= Links::RIGHT;
        }
        if own.has(Links::UP) && neighbour(0, -1).has(Links::DOWN) {
            met |= Links::UP;
        }
        if own.has(Links::DOWN) && neighbour(0, 1).has(Links::UP) {
            met |= Links::DOWN;
        }

        // An isolated stroke keeps its own shape.
        if met == 0 {
            own.glyph()
        } else {
            Links(met).glyph()
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width {
                f.write_char(self.glyph_at(x, y, y * self.width + x))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
