// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=entryway_selection --heading-base-level=0

//! Entryway Selection: the selection engine behind Entryway browsers.
//!
//! This crate owns the _semantics_ of selecting entries in a file-manager
//! style view: which ids are selected, where the pivot (the most recently
//! acted-upon index) sits, and where the anchor for shift-extension sits. It
//! reconciles three input modalities — pointer clicks, keyboard stepping, and
//! focus transfer — into one coherent state machine.
//!
//! The engine never stores the entry list. Every operation takes the current
//! `entries: &[T]` slice, which defines the index space used for range fill
//! and arrow adjacency; callers re-supply it on each event. Entries only need
//! to implement [`Identify`], which asks for a cloneable, equality-comparable
//! id — no `Hash` or `Ord` bounds are imposed.
//!
//! ## Gesture semantics
//!
//! - Plain click: the selection becomes exactly the clicked entry; pivot and
//!   anchor move to it.
//! - Accel (Ctrl/Cmd) click: toggles the clicked entry without touching the
//!   rest; pivot and anchor move to it.
//! - Shift click or shift arrow, with an anchor set: unions the inclusive
//!   index range between anchor and target into the selection. The pivot
//!   moves to the target; the anchor stays put, so repeated shift gestures
//!   keep extending from the original anchor.
//! - Secondary-button click on an already-selected entry: a no-op, so a
//!   context-menu gesture never collapses a multi-selection.
//! - Focus arriving on an entry (by tabbing, not by a click the engine
//!   already processed): the selection becomes that entry alone.
//!
//! One policy applies uniformly: range fill is additive and the anchor is
//! distinct from the pivot. Operations on entries absent from the supplied
//! list, and steps past either end of it, are silent no-ops.
//!
//! ## Minimal example
//!
//! ```rust
//! use entryway_input::kurbo::Point;
//! use entryway_input::{Modifiers, PointerInput};
//! use entryway_selection::{Identify, Selection};
//!
//! #[derive(Clone)]
//! struct Entry {
//!     id: u32,
//! }
//!
//! impl Identify for Entry {
//!     type Id = u32;
//!
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//! }
//!
//! let entries: Vec<Entry> = (0..6).map(|id| Entry { id }).collect();
//! let mut selection = Selection::new();
//!
//! // Plain click on index 1.
//! selection.select_with_click(&entries, &entries[1], &PointerInput::primary(Point::ZERO));
//! assert_eq!(selection.len(), 1);
//! assert_eq!(selection.last_index(), Some(1));
//!
//! // Shift-click index 4: the range 1..=4 joins the selection.
//! let shift_click = PointerInput::primary(Point::ZERO).with_modifiers(Modifiers::SHIFT);
//! selection.select_with_click(&entries, &entries[4], &shift_click);
//! assert_eq!(selection.len(), 4);
//! assert_eq!(selection.anchor_index(), Some(1));
//! assert_eq!(selection.last_index(), Some(4));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use entryway_input::{Handled, KeyInput, Modifiers, PointerButton, PointerInput};

/// An entry with a stable, unique identity.
///
/// Ids must be unique within one entry list and stable across re-renders; an
/// entry whose id changes is a different entry, even if its payload is equal.
/// Only `Clone` and `PartialEq` are required of the id type, which keeps
/// application id types (interned strings, generational handles) easy to
/// plug in.
pub trait Identify {
    /// The id type.
    type Id: Clone + PartialEq;

    /// Returns this entry's id.
    fn id(&self) -> Self::Id;
}

/// The selection engine: selected ids plus pivot and anchor indices.
///
/// One `Selection` is scoped to one entry list. The engine tolerates the
/// list changing shape underneath it — stale ids are inert and out-of-range
/// indices no-op — but hosts that swap the list should call
/// [`Selection::rebind`] so stale state is purged eagerly.
#[derive(Clone, Debug, Default)]
pub struct Selection<I> {
    selected: Vec<I>,
    last_index: Option<usize>,
    anchor_index: Option<usize>,
    revision: u64,
}

impl<I> Selection<I> {
    /// Creates an empty selection with no pivot or anchor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: Vec::new(),
            last_index: None,
            anchor_index: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns the number of selected entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns the pivot: the index most recently acted upon.
    ///
    /// Arrow-key stepping starts from here. `None` until the first gesture.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    /// Returns the anchor: the index a shift gesture extends from.
    #[must_use]
    pub fn anchor_index(&self) -> Option<usize> {
        self.anchor_index
    }

    /// Returns the current revision counter.
    ///
    /// A monotonically increasing counter local to this instance, bumped only
    /// when a mutation changes the semantic state: selected ids, pivot, or
    /// anchor. No-op calls leave it unchanged. Observers can use it as a
    /// cheap "did anything actually change?" marker.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Empties the selection.
    ///
    /// Pivot and anchor are retained so arrow navigation resumes from the
    /// last touched position. Calling this on an empty selection is a no-op.
    pub fn clear(&mut self) {
        if self.selected.is_empty() {
            return;
        }

        self.selected.clear();
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<I> Selection<I>
where
    I: Clone + PartialEq,
{
    /// Returns `true` if the given id is currently selected.
    #[must_use]
    pub fn contains_id(&self, id: &I) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    /// Returns `true` if the given entry is currently selected.
    #[must_use]
    pub fn is_selected<T>(&self, item: &T) -> bool
    where
        T: Identify<Id = I>,
    {
        self.contains_id(&item.id())
    }

    /// Returns the selected entries in entry-list order.
    ///
    /// Stale ids — left over from a list that has since changed shape — are
    /// skipped, never an error.
    #[must_use]
    pub fn selected<'a, T>(&self, entries: &'a [T]) -> Vec<&'a T>
    where
        T: Identify<Id = I>,
    {
        entries
            .iter()
            .filter(|entry| self.contains_id(&entry.id()))
            .collect()
    }

    /// Applies a pointer press on `item`.
    ///
    /// - A non-primary press on an already-selected entry is a no-op, so the
    ///   context-menu gesture preserves multi-selections.
    /// - Accel toggles the entry; plain replaces the selection with it; both
    ///   move pivot and anchor to its index.
    /// - Shift (with an anchor set) unions the anchor-to-entry index range
    ///   into the selection and moves only the pivot.
    /// - An `item` absent from `entries` is a no-op.
    pub fn select_with_click<T>(&mut self, entries: &[T], item: &T, click: &PointerInput)
    where
        T: Identify<Id = I>,
    {
        let id = item.id();
        if click.button != PointerButton::Primary && self.contains_id(&id) {
            return;
        }
        let Some(index) = position_of(entries, &id) else {
            return;
        };

        if click.modifiers.accel() {
            self.toggle_id(id);
            self.move_pivot_and_anchor(index);
        } else if click.modifiers.contains(Modifiers::SHIFT) && self.anchor_index.is_some() {
            self.fill_range_to(entries, index);
        } else {
            self.replace_with_only(id);
            self.move_pivot_and_anchor(index);
        }
    }

    /// Applies a key-driven selection of `item` (the target of an arrow step).
    ///
    /// Modifier semantics match [`Selection::select_with_click`] except that
    /// accel _adds_ the entry rather than toggling it — stepping onto an
    /// entry with the accelerator held never deselects it. Always reports the
    /// event as handled so the host suppresses its default scroll behavior.
    pub fn select_with_key<T>(&mut self, entries: &[T], item: &T, key: &KeyInput) -> Handled
    where
        T: Identify<Id = I>,
    {
        let id = item.id();
        let Some(index) = position_of(entries, &id) else {
            return Handled::Yes;
        };

        if key.modifiers.accel() {
            self.add_id(id);
            self.move_pivot_and_anchor(index);
        } else if key.modifiers.contains(Modifiers::SHIFT) && self.anchor_index.is_some() {
            self.fill_range_to(entries, index);
        } else {
            self.replace_with_only(id);
            self.move_pivot_and_anchor(index);
        }

        Handled::Yes
    }

    /// Steps the pivot back by one entry and selects there.
    ///
    /// A no-op (unhandled) when the pivot is unset, already at the first
    /// entry, or stale beyond the current list.
    pub fn select_previous_with_key<T>(&mut self, entries: &[T], key: &KeyInput) -> Handled
    where
        T: Identify<Id = I>,
    {
        let Some(last) = self.last_index else {
            return Handled::No;
        };
        if last < 1 {
            return Handled::No;
        }
        let Some(item) = entries.get(last - 1) else {
            return Handled::No;
        };
        self.select_with_key(entries, item, key)
    }

    /// Steps the pivot forward by one entry and selects there.
    ///
    /// With no pivot yet, enters the list at index 0. A no-op (unhandled) at
    /// the last entry.
    pub fn select_next_with_key<T>(&mut self, entries: &[T], key: &KeyInput) -> Handled
    where
        T: Identify<Id = I>,
    {
        let next = match self.last_index {
            Some(last) => last + 1,
            None => 0,
        };
        let Some(item) = entries.get(next) else {
            return Handled::No;
        };
        self.select_with_key(entries, item, key)
    }

    /// Replaces the selection with `item` in response to a focus transfer.
    ///
    /// This is the path for focus arriving by a mechanism other than a click
    /// or arrow step the engine already processed — typically the user
    /// tabbing onto an entry. Pivot and anchor follow the focused entry.
    /// Suppressing redundant calls during programmatic focus moves is the
    /// caller's job; see `entryway_browser`.
    pub fn select_with_focus<T>(&mut self, entries: &[T], item: &T)
    where
        T: Identify<Id = I>,
    {
        let id = item.id();
        let Some(index) = position_of(entries, &id) else {
            return;
        };
        self.replace_with_only(id);
        self.move_pivot_and_anchor(index);
    }

    /// Selects every entry in the list, in list order.
    ///
    /// Pivot and anchor are left unchanged.
    pub fn select_all<T>(&mut self, entries: &[T])
    where
        T: Identify<Id = I>,
    {
        let all: Vec<I> = entries.iter().map(Identify::id).collect();
        if all == self.selected {
            return;
        }
        self.selected = all;
        self.bump_revision();
    }

    /// Rebinds the selection to a list that has changed shape.
    ///
    /// Ids no longer present are purged and indices past the end of the new
    /// list clamp to `None`. Surviving indices are kept as-is; after a
    /// reorder the old positions are meaningless and the next gesture
    /// re-establishes them.
    pub fn rebind<T>(&mut self, entries: &[T])
    where
        T: Identify<Id = I>,
    {
        let before = self.selected.len();
        self.selected
            .retain(|id| entries.iter().any(|entry| &entry.id() == id));
        let mut changed = self.selected.len() != before;

        changed |= clamp_index(&mut self.last_index, entries.len());
        changed |= clamp_index(&mut self.anchor_index, entries.len());

        if changed {
            self.bump_revision();
        }
    }

    /// Adds `id` if absent. Returns without bumping when already present.
    fn add_id(&mut self, id: I) {
        if !self.contains_id(&id) {
            self.selected.push(id);
            self.bump_revision();
        }
    }

    /// Toggles membership of `id`.
    fn toggle_id(&mut self, id: I) {
        if let Some(pos) = self.selected.iter().position(|s| s == &id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
        self.bump_revision();
    }

    /// Replaces the selection with the single `id`.
    fn replace_with_only(&mut self, id: I) {
        if self.selected.len() == 1 && self.selected.first() == Some(&id) {
            return;
        }
        self.selected.clear();
        self.selected.push(id);
        self.bump_revision();
    }

    /// Unions the inclusive index range between the anchor and `index` into
    /// the selection, moving only the pivot.
    fn fill_range_to<T>(&mut self, entries: &[T], index: usize)
    where
        T: Identify<Id = I>,
    {
        debug_assert!(self.anchor_index.is_some(), "range fill requires an anchor");
        let Some(anchor) = self.anchor_index else {
            return;
        };

        let start = anchor.min(index);
        let end = anchor.max(index);
        let mut changed = false;
        // The range is clipped by `entries.len()`: if the list shrank since
        // the anchor was set, the surviving prefix fills and the rest is
        // silently skipped.
        for entry in entries.iter().take(end + 1).skip(start) {
            let id = entry.id();
            if !self.contains_id(&id) {
                self.selected.push(id);
                changed = true;
            }
        }

        changed |= self.last_index != Some(index);
        self.last_index = Some(index);
        if changed {
            self.bump_revision();
        }
    }

    fn move_pivot_and_anchor(&mut self, index: usize) {
        if self.last_index != Some(index) || self.anchor_index != Some(index) {
            self.last_index = Some(index);
            self.anchor_index = Some(index);
            self.bump_revision();
        }
    }
}

#[cfg(feature = "hashbrown")]
impl<I> Selection<I>
where
    I: Clone + core::hash::Hash + Eq,
{
    /// Rebinds to a new list using a hashed id set.
    ///
    /// Behaves exactly like [`Selection::rebind`] but builds a hash set of
    /// the current ids first, turning the quadratic purge scan into a linear
    /// one. Worth it when lists and selections both run large (a select-all
    /// over a big directory that then refreshes).
    pub fn rebind_hashed<T>(&mut self, entries: &[T])
    where
        T: Identify<Id = I>,
    {
        use hashbrown::HashSet;

        let live: HashSet<I> = entries.iter().map(Identify::id).collect();
        let before = self.selected.len();
        self.selected.retain(|id| live.contains(id));
        let mut changed = self.selected.len() != before;

        changed |= clamp_index(&mut self.last_index, entries.len());
        changed |= clamp_index(&mut self.anchor_index, entries.len());

        if changed {
            self.bump_revision();
        }
    }
}

/// Finds the index of `id` within `entries`.
fn position_of<T>(entries: &[T], id: &T::Id) -> Option<usize>
where
    T: Identify,
{
    entries.iter().position(|entry| &entry.id() == id)
}

/// Clamps an optional index to `len`, returning `true` if it changed.
fn clamp_index(slot: &mut Option<usize>, len: usize) -> bool {
    match *slot {
        Some(index) if index >= len => {
            *slot = None;
            true
        }
        _ => false,
    }
}
