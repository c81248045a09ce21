// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=entryway_nav --heading-base-level=0

//! Entryway Nav: spatial navigation over ordered entry lists.
//!
//! A browser view lays its entries out either as a table (one column of
//! rows) or as a grid (rows wrapped at a runtime-computed column count).
//! Both views share one selection engine and one keyboard routine; the only
//! thing that differs is how an arrow key maps a pivot index to a neighbor
//! index. That mapping is the [`Topology`] trait, with two strategies:
//!
//! - [`Linear`]: `Up`/`Down` step the 1D list; `Left`/`Right` do nothing.
//! - [`Grid`]: the list is reinterpreted as a row-major matrix. Arrows move
//!   in 2D, horizontal moves never wrap across row edges, and moves onto a
//!   cell with no entry are rejected.
//!
//! [`handle_key`] is the shared routine: it translates `Escape`, the
//! select-all chord, `Space`, and the arrows into selection-engine calls,
//! and reports what the host still has to do (move real focus, show a
//! preview) as a [`KeyOutcome`].
//!
//! For the grid, [`column_count`] derives the column count from the
//! available width and the item metrics; hosts recompute it on every resize
//! observation and rebuild the [`Grid`] strategy from it.
//!
//! ## Minimal example
//!
//! ```rust
//! use entryway_nav::{Direction, Grid, Linear, Topology};
//!
//! // 9 entries in 3 columns:  0 1 2 / 3 4 5 / 6 7 8
//! let grid = Grid::new(3);
//! assert_eq!(grid.step(Some(4), Direction::Right, 9), Some(5));
//! assert_eq!(grid.step(Some(5), Direction::Down, 9), Some(8));
//! // One more row down would fall off the list.
//! assert_eq!(grid.step(Some(8), Direction::Down, 9), None);
//! // No wrapping across the row edge.
//! assert_eq!(grid.step(Some(5), Direction::Right, 9), None);
//!
//! // The same list as a table only knows up and down.
//! assert_eq!(Linear.step(Some(4), Direction::Down, 9), Some(5));
//! assert_eq!(Linear.step(Some(4), Direction::Left, 9), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod linear;
mod route;
mod topology;

pub use grid::{Grid, GridMetrics, column_count};
pub use linear::Linear;
pub use route::{KeyOutcome, handle_key};
pub use topology::{Direction, Topology};
