// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The table topology: a single column of rows.

use crate::topology::{Direction, Topology};

/// The 1D strategy used by table views.
///
/// `Up` and `Down` step the list; `Left` and `Right` are rejected — a table
/// has no horizontal adjacency. `Down` with no pivot enters the list at its
/// first entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Linear;

impl Topology for Linear {
    fn step(&self, pivot: Option<usize>, direction: Direction, len: usize) -> Option<usize> {
        match direction {
            Direction::Up => pivot
                .and_then(|i| i.checked_sub(1))
                .filter(|&prev| prev < len),
            Direction::Down => {
                let next = match pivot {
                    Some(i) => i.checked_add(1)?,
                    None => 0,
                };
                (next < len).then_some(next)
            }
            Direction::Left | Direction::Right => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_steps_forward_and_stops_at_the_end() {
        assert_eq!(Linear.step(Some(0), Direction::Down, 3), Some(1));
        assert_eq!(Linear.step(Some(1), Direction::Down, 3), Some(2));
        assert_eq!(Linear.step(Some(2), Direction::Down, 3), None);
    }

    #[test]
    fn up_steps_back_and_stops_at_the_start() {
        assert_eq!(Linear.step(Some(2), Direction::Up, 3), Some(1));
        assert_eq!(Linear.step(Some(1), Direction::Up, 3), Some(0));
        assert_eq!(Linear.step(Some(0), Direction::Up, 3), None);
    }

    #[test]
    fn down_enters_an_unvisited_list_at_zero() {
        assert_eq!(Linear.step(None, Direction::Down, 3), Some(0));
        assert_eq!(Linear.step(None, Direction::Down, 0), None);
        assert_eq!(Linear.step(None, Direction::Up, 3), None);
    }

    #[test]
    fn horizontal_moves_are_rejected() {
        assert_eq!(Linear.step(Some(1), Direction::Left, 3), None);
        assert_eq!(Linear.step(Some(1), Direction::Right, 3), None);
    }

    #[test]
    fn stale_pivot_past_the_list_is_tolerated() {
        // The list shrank to 2 entries while the pivot sat at 5.
        assert_eq!(Linear.step(Some(5), Direction::Down, 2), None);
        assert_eq!(Linear.step(Some(5), Direction::Up, 2), None);
    }
}
