// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=entryway_input --heading-base-level=0

//! Entryway Input: input contracts shared by the Entryway browser crates.
//!
//! This crate defines the small set of value types the selection engine and
//! navigators consume: keyboard keys, pointer buttons, modifier sets, and the
//! event payloads that carry them. It does **not** read any input devices;
//! host frameworks translate their own native events into these types and
//! feed them to the higher layers.
//!
//! The types are deliberately minimal:
//!
//! - [`Modifiers`] is a bitflags set with an [`accel`](Modifiers::accel)
//!   helper that collapses the platform command key (Ctrl on most systems,
//!   Cmd on macOS) into one test.
//! - [`Key`] names only the keys the browser core reacts to; everything else
//!   maps to [`Key::Other`] and is ignored downstream.
//! - [`Handled`] reports whether an operation consumed the event, so the
//!   host knows to suppress its default action (scrolling, native
//!   text-search, and similar).
//!
//! ## Minimal example
//!
//! ```rust
//! use entryway_input::{Key, KeyInput, Modifiers};
//!
//! // Ctrl+A without Shift or Alt is the select-all chord.
//! let chord = KeyInput::new(Key::Char('a'), Modifiers::CTRL);
//! assert!(chord.is_select_all());
//!
//! // Shift disqualifies it.
//! let shifted = KeyInput::new(Key::Char('a'), Modifiers::CTRL | Modifiers::SHIFT);
//! assert!(!shifted.is_select_all());
//! ```
//!
//! This crate is fully `no_std`.

#![no_std]

pub use kurbo;

use kurbo::Point;

bitflags::bitflags! {
    /// Keyboard modifier state attached to pointer and key events.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// The Control key.
        const CTRL  = 0b0000_0001;
        /// The Alt (Option) key.
        const ALT   = 0b0000_0010;
        /// The Shift key.
        const SHIFT = 0b0000_0100;
        /// The Meta (Command, Windows) key.
        const META  = 0b0000_1000;
    }
}

impl Modifiers {
    /// Returns `true` if the platform accelerator key is held.
    ///
    /// Ctrl and Meta are treated interchangeably so callers do not need to
    /// branch on the platform convention.
    #[must_use]
    pub fn accel(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}

/// The pointer button that produced a press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button (usually left).
    #[default]
    Primary,
    /// The secondary button (usually right); drives context-menu gestures.
    Secondary,
    /// Any other button (middle, back, forward).
    Auxiliary,
}

/// A pointer press delivered to an entry or a browser region.
///
/// `position` is in the host's viewport coordinates; the browser core only
/// forwards it (for example as a context-menu anchor) and never interprets
/// it spatially.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Which button went down.
    pub button: PointerButton,
    /// Modifier state at press time.
    pub modifiers: Modifiers,
    /// Viewport position of the press.
    pub position: Point,
}

impl PointerInput {
    /// Creates a press with an explicit button and modifier state.
    #[must_use]
    pub const fn new(button: PointerButton, modifiers: Modifiers, position: Point) -> Self {
        Self {
            button,
            modifiers,
            position,
        }
    }

    /// A plain primary-button press with no modifiers.
    #[must_use]
    pub const fn primary(position: Point) -> Self {
        Self::new(PointerButton::Primary, Modifiers::empty(), position)
    }

    /// A secondary-button press with no modifiers (context-menu gesture).
    #[must_use]
    pub const fn secondary(position: Point) -> Self {
        Self::new(PointerButton::Secondary, Modifiers::empty(), position)
    }

    /// Returns a copy with the given modifier state.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A keyboard key, reduced to the set the browser core reacts to.
///
/// Hosts map anything without a dedicated variant to [`Key::Other`]; the
/// navigators treat those events as unhandled and leave the host's default
/// action alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The up arrow.
    ArrowUp,
    /// The down arrow.
    ArrowDown,
    /// The left arrow.
    ArrowLeft,
    /// The right arrow.
    ArrowRight,
    /// Escape; clears selections and dismisses menus.
    Escape,
    /// The space bar; previews the selection in grid mode.
    Space,
    /// A printable character, as produced by the host keymap.
    Char(char),
    /// Any key this core does not react to.
    Other,
}

/// A key press with its modifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyInput {
    /// The pressed key.
    pub key: Key,
    /// Modifier state at press time.
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// Creates a key press with an explicit modifier state.
    #[must_use]
    pub const fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key press with no modifiers held.
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::empty())
    }

    /// A key press with Shift held.
    #[must_use]
    pub const fn shifted(key: Key) -> Self {
        Self::new(key, Modifiers::SHIFT)
    }

    /// Returns `true` for the select-all chord: accel+`a` without Shift or Alt.
    ///
    /// Shift and Alt disqualify the chord so hosts keep their own bindings
    /// (for example "deselect all" or window management) working.
    #[must_use]
    pub fn is_select_all(&self) -> bool {
        self.key == Key::Char('a')
            && self.modifiers.accel()
            && !self.modifiers.intersects(Modifiers::SHIFT | Modifiers::ALT)
    }
}

/// Whether an operation consumed the event it was handed.
///
/// When an operation returns [`Handled::Yes`], the host must suppress its
/// default action for the event — the equivalent of `preventDefault`. This
/// mirrors the `default_prevented` flag convention used by event
/// dispatchers: the flag travels with the return value instead of living on
/// a shared event object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Handled {
    /// The event was consumed; suppress the default action.
    Yes,
    /// The event was not consumed.
    #[default]
    No,
}

impl Handled {
    /// Returns `true` if the event was consumed.
    #[must_use]
    pub fn is_handled(self) -> bool {
        self == Self::Yes
    }

    /// Combines two outcomes; consumed wins.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        if self.is_handled() || other.is_handled() {
            Self::Yes
        } else {
            Self::No
        }
    }
}
