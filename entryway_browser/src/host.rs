// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between a browser and the application embedding it.

use kurbo::Point;

/// Hooks a host application supplies to a [`Browser`](crate::Browser).
///
/// The browser never stores a host; callers pass one into each operation
/// that can produce an effect, and the browser invokes the relevant hooks
/// synchronously before returning. Every hook defaults to a no-op (and
/// [`accept_drop`](Self::accept_drop) to rejection), so hosts implement only
/// what their surface supports. A hook that panics is the host's problem;
/// the browser neither catches nor retries.
pub trait BrowserHost<T> {
    /// The host's drag-payload descriptor. The browser only signals
    /// acceptance; it never looks inside.
    type Drag;

    /// An entry was activated (double-click).
    fn activate(&mut self, entry: &T) {
        let _ = entry;
    }

    /// The space bar asked for a preview of the current selection
    /// (grid views only). Must not alter the selection.
    fn preview(&mut self, selected: &[&T]) {
        let _ = selected;
    }

    /// Whether a drag hovering the browser would be accepted if dropped.
    ///
    /// Queried continuously during drag-over so the visual accept/reject
    /// state can track payload and modifier changes mid-drag.
    fn accept_drop(&mut self, payload: &Self::Drag) -> bool {
        let _ = payload;
        false
    }

    /// A payload was dropped and [`accept_drop`](Self::accept_drop) still
    /// accepted it.
    fn commit_drop(&mut self, payload: &Self::Drag) {
        let _ = payload;
    }

    /// A context menu should open for `selected` at the viewport position
    /// `at`. Menu content is the host's business; the browser only tracks
    /// open/dismissed state.
    fn menu_opened(&mut self, selected: &[&T], at: Point) {
        let _ = (selected, at);
    }

    /// The open context menu was dismissed.
    fn menu_closed(&mut self) {}
}
