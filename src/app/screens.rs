//! Screens and the navigation stack.
//!
//! The browser has three screens. The stack is rooted at the catalogue; opening
//! the favourites list or a detail page pushes onto it and `Back` pops, never
//! below the root.
//!
//! ```text
//! Catalogue ──open favourites──▶ Favourites
//!     │                              │
//!     └──open listing──▶ Details ◀───┘
//! ```

/// A screen of the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen<Id> {
    /// Searchable list of every listing.
    Catalogue,

    /// The favourites list.
    Favourites,

    /// Detail page of one listing.
    Details(Id),
}

/// Navigation stack with a fixed root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack<Id> {
    root: Screen<Id>,
    /// Screens pushed above the root.
    stack: Vec<Screen<Id>>,
}

impl<Id> Default for NavigationStack<Id> {
    fn default() -> Self {
        Self {
            root: Screen::Catalogue,
            stack: Vec::new(),
        }
    }
}

impl<Id: Clone + PartialEq> NavigationStack<Id> {
    /// Screen currently on top.
    #[must_use]
    pub fn current(&self) -> &Screen<Id> {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Pushes `screen` unless it is already on top.
    ///
    /// Returns whether the stack changed.
    pub fn push(&mut self, screen: Screen<Id>) -> bool {
        if self.current() == &screen {
            return false;
        }
        self.stack.push(screen);
        true
    }

    /// Pops the top screen. The root is never popped.
    ///
    /// Returns whether the stack changed.
    pub fn pop(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    /// Id of the listing shown if the top screen is a detail page.
    #[must_use]
    pub fn details_id(&self) -> Option<&Id> {
        match self.current() {
            Screen::Details(id) => Some(id),
            Screen::Catalogue | Screen::Favourites => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_never_popped() {
        let mut nav: NavigationStack<String> = NavigationStack::default();
        assert!(!nav.pop());
        assert_eq!(nav.current(), &Screen::Catalogue);
    }

    #[test]
    fn push_and_pop() {
        let mut nav = NavigationStack::default();
        assert!(nav.push(Screen::Favourites));
        assert!(nav.push(Screen::Details(3)));
        assert!(!nav.push(Screen::Details(3)));
        assert_eq!(nav.details_id(), Some(&3));

        assert!(nav.pop());
        assert_eq!(nav.current(), &Screen::Favourites);
        assert!(nav.details_id().is_none());
        assert!(nav.pop());
        assert!(!nav.pop());
        assert_eq!(nav.current(), &Screen::Catalogue);
    }
}
