// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid topology: a row-major matrix wrapped at a runtime column count.

use crate::topology::{Direction, Topology};

/// The 2D strategy used by grid views.
///
/// The entry list is read as a row-major matrix of [`columns`](Self::columns)
/// cells per row. An arrow move derives the pivot's `(x, y)` cell, adjusts it
/// by the direction, and rejects the move when `x` leaves `[0, columns)` —
/// horizontal moves never wrap across row edges — or when the target cell has
/// no entry (the last row may be partial).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
}

impl Grid {
    /// Creates a grid strategy with the given column count, clamped to ≥ 1.
    #[must_use]
    pub const fn new(columns: usize) -> Self {
        Self {
            columns: if columns == 0 { 1 } else { columns },
        }
    }

    /// Creates a grid strategy sized from an available width.
    #[must_use]
    pub fn from_width(available_width: f64, metrics: &GridMetrics) -> Self {
        Self::new(column_count(available_width, metrics))
    }

    /// Returns the column count. Always ≥ 1.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Topology for Grid {
    fn step(&self, pivot: Option<usize>, direction: Direction, len: usize) -> Option<usize> {
        let Some(pivot) = pivot else {
            // Forward directions enter an unvisited grid at its first entry.
            return match direction {
                Direction::Down | Direction::Right => (len > 0).then_some(0),
                Direction::Up | Direction::Left => None,
            };
        };

        let columns = self.columns;
        let x = pivot % columns;
        let y = pivot / columns;

        let (x, y) = match direction {
            Direction::Up => (x, y.checked_sub(1)?),
            Direction::Down => (x, y.checked_add(1)?),
            Direction::Left => (x.checked_sub(1)?, y),
            Direction::Right => {
                let x = x + 1;
                if x >= columns {
                    return None;
                }
                (x, y)
            }
        };

        let next = y.checked_mul(columns)?.checked_add(x)?;
        (next < len).then_some(next)
    }
}

/// Layout metrics a grid derives its column count from.
///
/// Widths and gaps are in the host's logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    /// Width of one grid item.
    pub item_width: f64,
    /// Horizontal gap between adjacent items.
    pub gap: f64,
}

impl GridMetrics {
    /// Creates metrics with an explicit item width and gap.
    #[must_use]
    pub const fn new(item_width: f64, gap: f64) -> Self {
        Self { item_width, gap }
    }
}

impl Default for GridMetrics {
    /// The stock browser item footprint: 100px items with 10px gaps.
    fn default() -> Self {
        Self::new(100.0, 10.0)
    }
}

/// Computes how many columns fit in `available_width`.
///
/// The first item costs `item_width`; each further one costs
/// `item_width + gap`, giving
/// `floor((available_width − item_width) / (item_width + gap) + 1)`.
/// The result is clamped to ≥ 1 — a grid always has at least one column —
/// and degenerate input (non-finite widths, a zero or negative footprint)
/// also resolves to 1.
#[must_use]
pub fn column_count(available_width: f64, metrics: &GridMetrics) -> usize {
    let span = metrics.item_width + metrics.gap;
    if !available_width.is_finite() || !span.is_finite() || span <= 0.0 {
        return 1;
    }

    let columns = (available_width - metrics.item_width) / span + 1.0;
    if columns < 1.0 {
        return 1;
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "truncation towards zero is the floor for a value checked to be >= 1"
    )]
    {
        columns as usize
    }
}
