// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The topology seam: mapping a pivot index to an arrow-key neighbor.

use entryway_input::Key;

/// An arrow-key direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the previous row.
    Up,
    /// Towards the next row.
    Down,
    /// Towards the previous column.
    Left,
    /// Towards the next column.
    Right,
}

impl Direction {
    /// Maps an arrow key to its direction; other keys have none.
    #[must_use]
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowUp => Some(Self::Up),
            Key::ArrowDown => Some(Self::Down),
            Key::ArrowLeft => Some(Self::Left),
            Key::ArrowRight => Some(Self::Right),
            _ => None,
        }
    }
}

/// A spatial interpretation of a linear entry list.
///
/// Implementations translate "the entry adjacent to `pivot` in `direction`"
/// into an index, or `None` when no such entry exists: the move would leave
/// the layout (the top row, a row edge) or land past the end of the list.
/// Returned indices are always `< len`.
///
/// The pivot is optional because a freshly-bound view has no pivot yet;
/// strategies decide whether a direction can enter the list from nothing
/// (both shipped strategies enter at index 0 for forward directions).
pub trait Topology {
    /// Steps from `pivot` in `direction` within a list of `len` entries.
    fn step(&self, pivot: Option<usize>, direction: Direction, len: usize) -> Option<usize>;
}
