// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-zone state: track accept/reject hover feedback across a drag.

/// The visual state a drop zone is in while a drag hovers it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropHover {
    /// No drag is over the zone.
    #[default]
    Idle,
    /// A drag is over the zone and would be accepted.
    Accepted,
    /// A drag is over the zone and would be rejected.
    Rejected,
}

/// The drop effect the host should advertise to its drag runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropEffect {
    /// Show the copy affordance; a drop here will land.
    Copy,
    /// Show the no-drop affordance.
    None,
}

/// A small state machine tracking drag hover over one drop region.
///
/// The zone does not evaluate payloads itself; callers feed it the result of
/// the host's acceptance predicate on every drag-over and it keeps the
/// current [`DropHover`] for styling. Leaving the region or finishing a drop
/// resets to idle.
#[derive(Clone, Copy, Debug, Default)]
pub struct DropZone {
    hover: DropHover,
}

impl DropZone {
    /// Creates an idle drop zone.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hover: DropHover::Idle,
        }
    }

    /// Returns the current hover state.
    #[must_use]
    pub fn hover(&self) -> DropHover {
        self.hover
    }

    /// Records a drag-over with the predicate's current verdict and returns
    /// the effect the host should advertise.
    pub fn drag_over(&mut self, accepted: bool) -> DropEffect {
        if accepted {
            self.hover = DropHover::Accepted;
            DropEffect::Copy
        } else {
            self.hover = DropHover::Rejected;
            DropEffect::None
        }
    }

    /// The drag left the region without dropping.
    pub fn drag_leave(&mut self) {
        self.hover = DropHover::Idle;
    }

    /// A drop finished (accepted or not); hover feedback resets.
    pub fn finish(&mut self) {
        self.hover = DropHover::Idle;
    }
}
