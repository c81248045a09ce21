// Copyright 2026 the Entryway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context-menu open/dismiss state.

use kurbo::Point;

/// Tracks whether a context menu is open and where it was summoned.
///
/// Menu content is out of scope; the browser records only the anchor
/// position (the pointer's viewport coordinates at gesture time) so the host
/// can place its menu, and guarantees dismissal is idempotent — closing an
/// already-closed menu is a no-op, mirroring how focus-out and `Escape` can
/// both race to dismiss the same menu.
#[derive(Clone, Copy, Debug, Default)]
pub struct MenuState {
    at: Option<Point>,
}

impl MenuState {
    /// Creates a closed menu state.
    #[must_use]
    pub const fn new() -> Self {
        Self { at: None }
    }

    /// Returns `true` while a menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.at.is_some()
    }

    /// Returns the open menu's anchor position, if any.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.at
    }

    /// Opens (or moves) the menu at the given viewport position.
    pub fn open_at(&mut self, position: Point) {
        self.at = Some(position);
    }

    /// Dismisses the menu. Returns `true` if it was open.
    pub fn dismiss(&mut self) -> bool {
        self.at.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_at_the_gesture_position() {
        let mut menu = MenuState::new();
        assert!(!menu.is_open());

        menu.open_at(Point::new(40.0, 25.0));
        assert!(menu.is_open());
        assert_eq!(menu.position(), Some(Point::new(40.0, 25.0)));
    }

    #[test]
    fn a_second_gesture_moves_the_open_menu() {
        let mut menu = MenuState::new();
        menu.open_at(Point::new(10.0, 10.0));
        menu.open_at(Point::new(90.0, 60.0));
        assert_eq!(menu.position(), Some(Point::new(90.0, 60.0)));
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut menu = MenuState::new();
        menu.open_at(Point::ZERO);

        assert!(menu.dismiss());
        assert!(!menu.is_open());
        assert!(!menu.dismiss());
    }
}
