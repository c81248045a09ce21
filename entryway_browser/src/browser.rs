// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The browser: one selection engine, two topologies, and the host wiring.

use alloc::vec::Vec;

use entryway_input::{Handled, Key, KeyInput, PointerInput};
use entryway_nav::{Grid, GridMetrics, KeyOutcome, Linear, handle_key};
use entryway_selection::{Identify, Selection};
use kurbo::Point;

use crate::drop_zone::{DropEffect, DropHover, DropZone};
use crate::host::BrowserHost;
use crate::menu::MenuState;

/// How the browser lays out its entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// A wrapped grid of items, navigated in 2D.
    #[default]
    Grid,
    /// A table of rows, navigated in 1D.
    Table,
}

/// Where a table column component is being rendered.
///
/// Hosts pass this explicitly when asking for a [`RowContext`]; there is no
/// ambient "where am I" state to consult.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderSite {
    /// The column's header cell.
    Header,
    /// A body cell for one entry row.
    Body,
}

/// What a column component should render at a given site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RowContext<'a, T> {
    /// Render the column's header; no entry is involved.
    Header,
    /// Render the cell for `entry`, highlighted when `selected`.
    Body {
        /// The row's entry.
        entry: &'a T,
        /// Whether the row is part of the current selection.
        selected: bool,
    },
}

/// What a key press did at the browser level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Nothing; the host's default action stands.
    Ignored,
    /// `Escape` dismissed the open context menu (selection untouched).
    MenuDismissed,
    /// `Escape` emptied the selection.
    Cleared,
    /// The select-all chord selected every entry.
    SelectedAll,
    /// The pivot moved; the host must move real input focus to this entry.
    Focus(usize),
    /// The preview hook was invoked with the current selection.
    Previewed,
}

impl KeyAction {
    /// Whether the host must suppress its default action for the event.
    #[must_use]
    pub fn handled(self) -> Handled {
        match self {
            Self::MenuDismissed | Self::SelectedAll | Self::Focus(_) | Self::Previewed => {
                Handled::Yes
            }
            Self::Ignored | Self::Cleared => Handled::No,
        }
    }
}

/// A browser over one ordered list of identifiable entries.
///
/// The browser owns the entry list, a [`Selection`] scoped to it, the view
/// mode, and the interaction state around them: the grid's column count, the
/// focus-suppression token, drop-zone hover, and context-menu state. Hosts
/// feed it translated input events and honor the outcomes (move focus, show
/// a menu, advertise a drop effect); host callbacks travel in per-call
/// [`BrowserHost`] references rather than being stored.
#[derive(Clone, Debug)]
pub struct Browser<T: Identify> {
    entries: Vec<T>,
    selection: Selection<T::Id>,
    view: ViewMode,
    metrics: GridMetrics,
    grid: Grid,
    /// Armed when the browser itself asks the host to move focus; the next
    /// focus event consumes it so a programmatic transfer does not clobber
    /// the richer selection a click or arrow already produced.
    focus_token: Option<usize>,
    drop_zone: DropZone,
    menu: MenuState,
}

impl<T: Identify> Browser<T> {
    /// Creates a browser over `entries` in the default grid view.
    ///
    /// The grid starts at one column; call [`Browser::resize`] once the
    /// host knows its available width.
    #[must_use]
    pub fn new(entries: Vec<T>) -> Self {
        Self {
            entries,
            selection: Selection::new(),
            view: ViewMode::default(),
            metrics: GridMetrics::default(),
            grid: Grid::new(1),
            focus_token: None,
            drop_zone: DropZone::new(),
            menu: MenuState::new(),
        }
    }

    /// Sets the view mode.
    #[must_use]
    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    /// Sets the grid item metrics used to derive the column count.
    #[must_use]
    pub fn with_metrics(mut self, metrics: GridMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// The current entry list, in index order.
    #[must_use]
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// The selection engine, for reads (highlighting, toolbars).
    #[must_use]
    pub fn selection(&self) -> &Selection<T::Id> {
        &self.selection
    }

    /// The selected entries, in entry-list order.
    #[must_use]
    pub fn selected(&self) -> Vec<&T> {
        self.selection.selected(&self.entries)
    }

    /// The current view mode.
    #[must_use]
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// The grid's current column count.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    /// The drop zone's hover state, for styling.
    #[must_use]
    pub fn drop_hover(&self) -> DropHover {
        self.drop_zone.hover()
    }

    /// The context-menu state.
    #[must_use]
    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    /// Replaces the entry list, purging selection state that no longer
    /// applies: stale ids are dropped and out-of-range pivot/anchor reset.
    pub fn set_entries(&mut self, entries: Vec<T>) {
        self.entries = entries;
        self.selection.rebind(&self.entries);
        self.focus_token = None;
    }

    /// Switches the view mode. Selection carries over between views.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Recomputes the grid column count from a new available width.
    ///
    /// Typically driven by the host's resize observation. A key press that
    /// raced the resize navigates against the previously committed count;
    /// the next press sees the fresh one.
    pub fn resize(&mut self, available_width: f64) {
        self.grid = Grid::from_width(available_width, &self.metrics);
    }

    /// A pointer went down on the entry at `index`.
    ///
    /// Applies click-selection semantics and returns the index the host must
    /// move real input focus to (arming the suppression token so the focus
    /// event that follows is not double-processed). Returns `None` for an
    /// out-of-range index.
    pub fn pointer_down(&mut self, index: usize, click: &PointerInput) -> Option<usize> {
        let entry = self.entries.get(index)?;
        self.selection.select_with_click(&self.entries, entry, click);
        self.focus_token = Some(index);
        Some(index)
    }

    /// A pointer went down on the view's background (grid padding, empty
    /// table space): the selection empties.
    pub fn blank_pointer_down(&mut self) {
        self.selection.clear();
    }

    /// Real input focus arrived on the entry at `index`.
    ///
    /// If the browser itself requested this transfer (the token matches),
    /// the event is swallowed — the click or arrow that triggered it already
    /// set richer selection state. Any other focus arrival is user-driven
    /// (tabbing) and replaces the selection with the focused entry.
    pub fn entry_focused(&mut self, index: usize) {
        if self.focus_token.take() == Some(index) {
            return;
        }
        if let Some(entry) = self.entries.get(index) {
            self.selection.select_with_focus(&self.entries, entry);
        }
    }

    /// The entry at `index` was double-clicked.
    pub fn double_click<H>(&mut self, host: &mut H, index: usize)
    where
        H: BrowserHost<T>,
    {
        if let Some(entry) = self.entries.get(index) {
            host.activate(entry);
        }
    }

    /// Routes a key press through the active topology.
    ///
    /// An open context menu captures `Escape` first; otherwise the press
    /// runs the shared keyboard routine with the [`Linear`] or [`Grid`]
    /// strategy per the view mode. A resulting focus move arms the
    /// suppression token. `Space` previews only in grid view.
    pub fn key_down<H>(&mut self, host: &mut H, key: &KeyInput) -> KeyAction
    where
        H: BrowserHost<T>,
    {
        if self.menu.is_open() && key.key == Key::Escape {
            self.menu.dismiss();
            host.menu_closed();
            return KeyAction::MenuDismissed;
        }

        let outcome = match self.view {
            ViewMode::Table => handle_key(&mut self.selection, &self.entries, &Linear, key),
            ViewMode::Grid => handle_key(&mut self.selection, &self.entries, &self.grid, key),
        };

        match outcome {
            KeyOutcome::Ignored => KeyAction::Ignored,
            KeyOutcome::Cleared => KeyAction::Cleared,
            KeyOutcome::SelectedAll => KeyAction::SelectedAll,
            KeyOutcome::Moved(index) => {
                self.focus_token = Some(index);
                KeyAction::Focus(index)
            }
            KeyOutcome::Preview => match self.view {
                ViewMode::Grid => {
                    let selected = self.selection.selected(&self.entries);
                    host.preview(&selected);
                    KeyAction::Previewed
                }
                ViewMode::Table => KeyAction::Ignored,
            },
        }
    }

    /// A context-menu gesture happened at `position` (viewport coordinates).
    ///
    /// The selected-entry list is built lazily, only now, and handed to the
    /// host; the browser records the menu as open at that position.
    pub fn menu_gesture<H>(&mut self, host: &mut H, position: Point)
    where
        H: BrowserHost<T>,
    {
        let selected = self.selection.selected(&self.entries);
        host.menu_opened(&selected, position);
        self.menu.open_at(position);
    }

    /// Dismisses the context menu (focus left it, or the host closed it).
    /// Idempotent; the host hook fires only if a menu was open.
    pub fn dismiss_menu<H>(&mut self, host: &mut H)
    where
        H: BrowserHost<T>,
    {
        if self.menu.dismiss() {
            host.menu_closed();
        }
    }

    /// A drag moved over the browser. Queries the host's acceptance
    /// predicate and returns the effect to advertise.
    pub fn drag_over<H>(&mut self, host: &mut H, payload: &H::Drag) -> DropEffect
    where
        H: BrowserHost<T>,
    {
        let accepted = host.accept_drop(payload);
        self.drop_zone.drag_over(accepted)
    }

    /// A drag left the browser without dropping.
    pub fn drag_leave(&mut self) {
        self.drop_zone.drag_leave();
    }

    /// A payload was dropped on the browser.
    ///
    /// The acceptance predicate is re-checked at drop time — a payload the
    /// predicate no longer accepts is silently discarded — and hover
    /// feedback resets either way.
    pub fn drop_received<H>(&mut self, host: &mut H, payload: &H::Drag)
    where
        H: BrowserHost<T>,
    {
        let accepted = host.accept_drop(payload);
        self.drop_zone.finish();
        if accepted {
            host.commit_drop(payload);
        }
    }

    /// Resolves what a table column should render at `site`.
    ///
    /// For [`RenderSite::Body`], `index` picks the row; an out-of-range
    /// index yields `None`. For [`RenderSite::Header`] the index is unused.
    #[must_use]
    pub fn row_context(&self, site: RenderSite, index: usize) -> Option<RowContext<'_, T>> {
        match site {
            RenderSite::Header => Some(RowContext::Header),
            RenderSite::Body => self.entries.get(index).map(|entry| RowContext::Body {
                entry,
                selected: self.selection.is_selected(entry),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use entryway_input::Modifiers;

    #[derive(Clone, Debug, PartialEq)]
    struct Entry(u32);

    impl Identify for Entry {
        type Id = u32;

        fn id(&self) -> u32 {
            self.0
        }
    }

    /// Records every hook invocation for assertions.
    #[derive(Debug, Default)]
    struct Recorder {
        activated: Vec<u32>,
        previewed: Vec<Vec<u32>>,
        menus: Vec<(Vec<u32>, Point)>,
        menu_closes: usize,
        accept: bool,
        dropped: Vec<u32>,
    }

    impl BrowserHost<Entry> for Recorder {
        type Drag = u32;

        fn activate(&mut self, entry: &Entry) {
            self.activated.push(entry.0);
        }

        fn preview(&mut self, selected: &[&Entry]) {
            self.previewed.push(selected.iter().map(|e| e.0).collect());
        }

        fn accept_drop(&mut self, _payload: &u32) -> bool {
            self.accept
        }

        fn commit_drop(&mut self, payload: &u32) {
            self.dropped.push(*payload);
        }

        fn menu_opened(&mut self, selected: &[&Entry], at: Point) {
            self.menus.push((selected.iter().map(|e| e.0).collect(), at));
        }

        fn menu_closed(&mut self) {
            self.menu_closes += 1;
        }
    }

    fn browser(n: u32) -> Browser<Entry> {
        Browser::new((0..n).map(Entry).collect())
    }

    fn selected_ids(browser: &Browser<Entry>) -> Vec<u32> {
        browser.selected().iter().map(|e| e.0).collect()
    }

    fn plain() -> PointerInput {
        PointerInput::primary(Point::ZERO)
    }

    #[test]
    fn pointer_down_selects_and_requests_focus() {
        let mut b = browser(6);
        assert_eq!(b.pointer_down(2, &plain()), Some(2));
        assert_eq!(selected_ids(&b), vec![2]);

        assert_eq!(b.pointer_down(99, &plain()), None);
    }

    #[test]
    fn programmatic_focus_after_a_click_does_not_clobber_the_selection() {
        let mut b = browser(6);
        b.pointer_down(1, &plain());
        b.entry_focused(1);
        b.pointer_down(3, &plain().with_modifiers(Modifiers::SHIFT));
        assert_eq!(selected_ids(&b), vec![1, 2, 3]);

        // The focus event the host delivers for the click we just processed
        // must not collapse the range.
        b.entry_focused(3);
        assert_eq!(selected_ids(&b), vec![1, 2, 3]);

        // A later, user-driven focus (tabbing) does replace it.
        b.entry_focused(5);
        assert_eq!(selected_ids(&b), vec![5]);
    }

    #[test]
    fn arrow_moves_arm_the_suppression_token_too() {
        let mut b = browser(9).with_view(ViewMode::Table);
        let mut host = Recorder::default();
        b.pointer_down(0, &plain());
        b.entry_focused(0);

        let action = b.key_down(&mut host, &KeyInput::shifted(Key::ArrowDown));
        assert_eq!(action, KeyAction::Focus(1));
        assert_eq!(selected_ids(&b), vec![0, 1]);

        b.entry_focused(1);
        assert_eq!(selected_ids(&b), vec![0, 1]);
    }

    #[test]
    fn table_scenario_click_shift_click_then_arrow() {
        let mut b = browser(6).with_view(ViewMode::Table);
        let mut host = Recorder::default();

        b.pointer_down(0, &plain());
        b.entry_focused(0);
        b.pointer_down(3, &plain().with_modifiers(Modifiers::SHIFT));
        b.entry_focused(3);
        assert_eq!(selected_ids(&b), vec![0, 1, 2, 3]);

        let action = b.key_down(&mut host, &KeyInput::plain(Key::ArrowDown));
        assert_eq!(action, KeyAction::Focus(4));
        assert_eq!(selected_ids(&b), vec![4]);
    }

    #[test]
    fn grid_navigation_uses_the_resized_column_count() {
        let mut b = browser(9);
        let mut host = Recorder::default();
        // 3 columns: 100px items, 10px gaps, 320px available.
        b.resize(320.0);
        assert_eq!(b.columns(), 3);

        b.pointer_down(4, &plain());
        b.entry_focused(4);
        assert_eq!(
            b.key_down(&mut host, &KeyInput::plain(Key::ArrowRight)),
            KeyAction::Focus(5)
        );
        assert_eq!(
            b.key_down(&mut host, &KeyInput::plain(Key::ArrowDown)),
            KeyAction::Focus(8)
        );
        // Another row down would leave the list.
        assert_eq!(
            b.key_down(&mut host, &KeyInput::plain(Key::ArrowDown)),
            KeyAction::Ignored
        );
        assert_eq!(selected_ids(&b), vec![8]);
    }

    #[test]
    fn double_click_activates_the_entry() {
        let mut b = browser(6);
        let mut host = Recorder::default();

        b.double_click(&mut host, 2);
        b.double_click(&mut host, 42);
        assert_eq!(host.activated, vec![2]);
    }

    #[test]
    fn space_previews_in_grid_view_only() {
        let mut host = Recorder::default();

        let mut grid = browser(6);
        grid.pointer_down(1, &plain());
        grid.pointer_down(3, &plain().with_modifiers(Modifiers::CTRL));
        let action = grid.key_down(&mut host, &KeyInput::plain(Key::Space));
        assert_eq!(action, KeyAction::Previewed);
        assert_eq!(host.previewed, vec![vec![1, 3]]);
        // Previewing leaves the selection alone.
        assert_eq!(selected_ids(&grid), vec![1, 3]);

        let mut table = browser(6).with_view(ViewMode::Table);
        table.pointer_down(1, &plain());
        let action = table.key_down(&mut host, &KeyInput::plain(Key::Space));
        assert_eq!(action, KeyAction::Ignored);
        assert_eq!(host.previewed.len(), 1);
    }

    #[test]
    fn menu_gesture_builds_the_selection_lazily_and_tracks_state() {
        let mut b = browser(6);
        let mut host = Recorder::default();
        b.pointer_down(1, &plain());
        b.pointer_down(4, &plain().with_modifiers(Modifiers::CTRL));

        let at = Point::new(120.0, 48.0);
        b.menu_gesture(&mut host, at);
        assert!(b.menu().is_open());
        assert_eq!(host.menus, vec![(vec![1, 4], at)]);

        b.dismiss_menu(&mut host);
        assert!(!b.menu().is_open());
        b.dismiss_menu(&mut host);
        assert_eq!(host.menu_closes, 1);
    }

    #[test]
    fn escape_dismisses_the_menu_before_clearing_the_selection() {
        let mut b = browser(6);
        let mut host = Recorder::default();
        b.pointer_down(1, &plain());
        b.menu_gesture(&mut host, Point::ZERO);

        let action = b.key_down(&mut host, &KeyInput::plain(Key::Escape));
        assert_eq!(action, KeyAction::MenuDismissed);
        assert_eq!(host.menu_closes, 1);
        assert_eq!(selected_ids(&b), vec![1]);

        let action = b.key_down(&mut host, &KeyInput::plain(Key::Escape));
        assert_eq!(action, KeyAction::Cleared);
        assert!(b.selection().is_empty());
    }

    #[test]
    fn secondary_click_keeps_the_selection_for_the_menu() {
        let mut b = browser(6);
        b.pointer_down(1, &plain());
        b.pointer_down(2, &plain().with_modifiers(Modifiers::SHIFT));
        b.pointer_down(3, &plain().with_modifiers(Modifiers::SHIFT));
        assert_eq!(selected_ids(&b), vec![1, 2, 3]);

        b.pointer_down(2, &PointerInput::secondary(Point::ZERO));
        assert_eq!(selected_ids(&b), vec![1, 2, 3]);
    }

    #[test]
    fn drag_over_tracks_the_predicate_and_drop_commits_only_when_accepted() {
        let mut b = browser(6);
        let mut host = Recorder::default();

        host.accept = true;
        assert_eq!(b.drag_over(&mut host, &7), DropEffect::Copy);
        assert_eq!(b.drop_hover(), DropHover::Accepted);

        host.accept = false;
        assert_eq!(b.drag_over(&mut host, &7), DropEffect::None);
        assert_eq!(b.drop_hover(), DropHover::Rejected);

        // A rejected payload dropped anyway is discarded.
        b.drop_received(&mut host, &7);
        assert!(host.dropped.is_empty());
        assert_eq!(b.drop_hover(), DropHover::Idle);

        host.accept = true;
        b.drag_over(&mut host, &9);
        b.drop_received(&mut host, &9);
        assert_eq!(host.dropped, vec![9]);
        assert_eq!(b.drop_hover(), DropHover::Idle);

        b.drag_over(&mut host, &3);
        b.drag_leave();
        assert_eq!(b.drop_hover(), DropHover::Idle);
    }

    #[test]
    fn set_entries_purges_stale_selection_state() {
        let mut b = browser(6);
        b.pointer_down(1, &plain());
        b.pointer_down(4, &plain().with_modifiers(Modifiers::CTRL));

        // The list shrinks to 0..=2: entry 4 and the pivot at 4 are gone.
        b.set_entries((0..3).map(Entry).collect());
        assert_eq!(selected_ids(&b), vec![1]);
        assert_eq!(b.selection().last_index(), None);
    }

    #[test]
    fn blank_pointer_down_clears_the_selection() {
        let mut b = browser(6);
        b.pointer_down(2, &plain());
        b.blank_pointer_down();
        assert!(b.selection().is_empty());
    }

    #[test]
    fn view_switch_keeps_the_selection() {
        let mut b = browser(6);
        b.pointer_down(2, &plain());
        b.set_view(ViewMode::Table);
        assert_eq!(selected_ids(&b), vec![2]);
        assert_eq!(b.view(), ViewMode::Table);
    }

    #[test]
    fn row_context_distinguishes_header_and_body() {
        let mut b = browser(3);
        b.pointer_down(1, &plain());

        assert_eq!(
            b.row_context(RenderSite::Header, 0),
            Some(RowContext::Header)
        );
        assert_eq!(
            b.row_context(RenderSite::Body, 1),
            Some(RowContext::Body {
                entry: &Entry(1),
                selected: true,
            })
        );
        assert_eq!(
            b.row_context(RenderSite::Body, 0),
            Some(RowContext::Body {
                entry: &Entry(0),
                selected: false,
            })
        );
        assert_eq!(b.row_context(RenderSite::Body, 9), None);
    }

    #[test]
    fn key_action_handled_flags() {
        assert_eq!(KeyAction::Focus(1).handled(), Handled::Yes);
        assert_eq!(KeyAction::SelectedAll.handled(), Handled::Yes);
        assert_eq!(KeyAction::MenuDismissed.handled(), Handled::Yes);
        assert_eq!(KeyAction::Previewed.handled(), Handled::Yes);
        assert_eq!(KeyAction::Ignored.handled(), Handled::No);
        assert_eq!(KeyAction::Cleared.handled(), Handled::No);
    }
}
