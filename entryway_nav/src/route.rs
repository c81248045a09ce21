// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared keyboard routine both view topologies run through.

use entryway_input::{Handled, Key, KeyInput};
use entryway_selection::{Identify, Selection};

use crate::topology::{Direction, Topology};

/// What a key press did, and what the host still has to do about it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key is not one this routine reacts to; the host's default action
    /// stands.
    Ignored,
    /// `Escape`: the selection was emptied.
    Cleared,
    /// The select-all chord: every entry is now selected; suppress the
    /// host's default binding.
    SelectedAll,
    /// An arrow stepped the pivot to this index and selection followed; the
    /// host must move real input focus there and suppress scrolling.
    Moved(usize),
    /// `Space`: the host should preview the current selection. Selection
    /// state is untouched; views without a preview surface ignore this.
    Preview,
}

impl KeyOutcome {
    /// Whether the host must suppress its default action for the event.
    #[must_use]
    pub fn handled(self) -> Handled {
        match self {
            Self::SelectedAll | Self::Moved(_) | Self::Preview => Handled::Yes,
            Self::Ignored | Self::Cleared => Handled::No,
        }
    }
}

/// Routes one key press into the selection engine via a topology strategy.
///
/// - The select-all chord selects everything.
/// - `Escape` clears the selection (pivot and anchor survive).
/// - Arrows ask `topology` for the neighbor of the current pivot and select
///   it with the press's modifier semantics; boundary presses fall out as
///   [`KeyOutcome::Ignored`].
/// - A plain `Space` requests a preview.
///
/// The routine never touches real input focus — that is a host resource.
/// A [`KeyOutcome::Moved`] tells the caller which entry must receive focus.
pub fn handle_key<I, T, P>(
    selection: &mut Selection<I>,
    entries: &[T],
    topology: &P,
    key: &KeyInput,
) -> KeyOutcome
where
    I: Clone + PartialEq,
    T: Identify<Id = I>,
    P: Topology,
{
    if key.is_select_all() {
        selection.select_all(entries);
        return KeyOutcome::SelectedAll;
    }

    if key.key == Key::Escape {
        selection.clear();
        return KeyOutcome::Cleared;
    }

    if key.key == Key::Space && key.modifiers.is_empty() {
        return KeyOutcome::Preview;
    }

    let Some(direction) = Direction::from_key(key.key) else {
        return KeyOutcome::Ignored;
    };
    let Some(next) = topology.step(selection.last_index(), direction, entries.len()) else {
        return KeyOutcome::Ignored;
    };
    let Some(item) = entries.get(next) else {
        return KeyOutcome::Ignored;
    };

    selection.select_with_key(entries, item, key);
    KeyOutcome::Moved(next)
}
