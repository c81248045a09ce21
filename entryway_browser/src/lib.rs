// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=entryway_browser --heading-base-level=0

//! Entryway Browser: the composition layer over the selection engine.
//!
//! A [`Browser`] wires one entry list, one
//! [`Selection`](entryway_selection::Selection) engine, and one topology
//! (grid or table, per [`ViewMode`]) together with the interaction state
//! around them: the grid's resize-derived column count, the
//! focus-suppression token, drag-and-drop acceptance feedback, and
//! context-menu open/dismiss tracking.
//!
//! The browser renders nothing and stores no callbacks. Hosts translate
//! their native events into `entryway_input` types, feed them in, and honor
//! the returned outcomes — "move real focus to entry 4", "advertise the
//! copy drop effect" — while application hooks (activation, preview, drop
//! handling, menu notification) travel in a [`BrowserHost`] reference
//! passed into each call that can produce an effect.
//!
//! ## Minimal example
//!
//! ```rust
//! use entryway_browser::{Browser, BrowserHost, KeyAction, ViewMode};
//! use entryway_input::kurbo::Point;
//! use entryway_input::{Key, KeyInput, PointerInput};
//! use entryway_selection::Identify;
//!
//! #[derive(Clone)]
//! struct File {
//!     name: &'static str,
//! }
//!
//! impl Identify for File {
//!     type Id = &'static str;
//!
//!     fn id(&self) -> &'static str {
//!         self.name
//!     }
//! }
//!
//! struct Host {
//!     opened: Vec<&'static str>,
//! }
//!
//! impl BrowserHost<File> for Host {
//!     type Drag = ();
//!
//!     fn activate(&mut self, entry: &File) {
//!         self.opened.push(entry.name);
//!     }
//! }
//!
//! let files = vec![
//!     File { name: "a.txt" },
//!     File { name: "b.txt" },
//!     File { name: "c.txt" },
//! ];
//! let mut host = Host { opened: Vec::new() };
//! let mut browser = Browser::new(files).with_view(ViewMode::Table);
//!
//! // Click the first row; the host is told to move focus there.
//! let focus = browser.pointer_down(0, &PointerInput::primary(Point::ZERO));
//! assert_eq!(focus, Some(0));
//! browser.entry_focused(0);
//!
//! // Arrow down to the second row and open it.
//! let action = browser.key_down(&mut host, &KeyInput::plain(Key::ArrowDown));
//! assert_eq!(action, KeyAction::Focus(1));
//! browser.double_click(&mut host, 1);
//! assert_eq!(host.opened, vec!["b.txt"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod browser;
mod drop_zone;
mod host;
mod menu;

pub use browser::{Browser, KeyAction, RenderSite, RowContext, ViewMode};
pub use drop_zone::{DropEffect, DropHover, DropZone};
pub use host::BrowserHost;
pub use menu::MenuState;
