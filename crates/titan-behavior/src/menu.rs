//! Mobile navigation menu open/close state.

use crate::input::Key;

/// A change the page has to apply after a menu event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChange {
    Opened,
    /// The menu closed. `refocus_toggle` asks for focus to return to the
    /// hamburger button (keyboard dismissal).
    Closed { refocus_toggle: bool },
}

impl MenuChange {
    /// Whether the menu is open after this change.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Opened)
    }

    /// Inline `overflow` for `<body>`: scrolling is locked while open.
    #[must_use]
    pub const fn body_overflow(self) -> &'static str {
        if self.is_open() { "hidden" } else { "" }
    }
}

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// The hamburger button was clicked.
    pub const fn toggle(&mut self) -> MenuChange {
        self.open = !self.open;
        if self.open {
            MenuChange::Opened
        } else {
            MenuChange::Closed {
                refocus_toggle: false,
            }
        }
    }

    /// A link inside the menu was followed.
    pub const fn link_followed(&mut self) -> MenuChange {
        self.open = false;
        MenuChange::Closed {
            refocus_toggle: false,
        }
    }

    /// A click landed somewhere in the document.
    ///
    /// Closes the menu when it lands outside both the menu and the
    /// hamburger button.
    pub const fn document_clicked(
        &mut self,
        inside_menu: bool,
        inside_toggle: bool,
    ) -> Option<MenuChange> {
        if !self.open || inside_menu || inside_toggle {
            return None;
        }
        self.open = false;
        Some(MenuChange::Closed {
            refocus_toggle: false,
        })
    }

    /// A key was pressed anywhere in the document.
    pub const fn key_pressed(&mut self, key: Key) -> Option<MenuChange> {
        if !self.open || !matches!(key, Key::Escape) {
            return None;
        }
        self.open = false;
        Some(MenuChange::Closed {
            refocus_toggle: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_and_locks_body_scroll() {
        let mut menu = MobileMenu::default();
        let opened = menu.toggle();
        assert_eq!(opened, MenuChange::Opened);
        assert_eq!(opened.body_overflow(), "hidden");

        let closed = menu.toggle();
        assert!(!closed.is_open());
        assert_eq!(closed.body_overflow(), "");
    }

    #[test]
    fn outside_click_closes_only_when_open() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.document_clicked(false, false), None);

        menu.toggle();
        assert_eq!(menu.document_clicked(true, false), None);
        assert_eq!(menu.document_clicked(false, true), None);
        assert!(menu.is_open());

        assert_eq!(
            menu.document_clicked(false, false),
            Some(MenuChange::Closed {
                refocus_toggle: false
            })
        );
        assert!(!menu.is_open());
    }

    #[test]
    fn escape_closes_and_returns_focus() {
        let mut menu = MobileMenu::default();
        assert_eq!(menu.key_pressed(Key::Escape), None);

        menu.toggle();
        assert_eq!(menu.key_pressed(Key::Enter), None);
        assert_eq!(
            menu.key_pressed(Key::Escape),
            Some(MenuChange::Closed {
                refocus_toggle: true
            })
        );
    }

    #[test]
    fn following_a_link_always_closes() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(!menu.link_followed().is_open());
        assert!(!menu.is_open());
    }
}
