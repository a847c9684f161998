//! Page-level UI state and navigation anchors.

/// Scroll targets reachable from the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Root,
    Work,
    Process,
    Contact,
}

/// Desktop navigation entries, in order. The brand mark covers the root.
pub const NAV_ANCHORS: [Anchor; 3] = [Anchor::Work, Anchor::Process, Anchor::Contact];

/// Mobile overlay entries. The overlay covers the brand mark, so it lists the
/// root as well.
pub const MOBILE_NAV_ANCHORS: [Anchor; 4] = [Anchor::Root, Anchor::Work, Anchor::Process, Anchor::Contact];

impl Anchor {
    /// DOM id of the element to scroll to.
    pub const fn id(&self) -> &'static str {
        match self {
            Anchor::Root => "portfolio-root",
            Anchor::Work => "work",
            Anchor::Process => "process",
            Anchor::Contact => "contact",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Anchor::Root => "Home",
            Anchor::Work => "Work",
            Anchor::Process => "Process",
            Anchor::Contact => "Contact",
        }
    }
}

/// The page's two transient flags. They are independent: no transition of
/// one affects the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub loading: bool,
    pub menu_open: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            loading: true,
            menu_open: false,
        }
    }
}

impl PageState {
    /// Called when the preloader reports completion.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A navigation entry was chosen: the menu closes and the caller scrolls
    /// to the returned anchor.
    pub fn navigate(&mut self, anchor: Anchor) -> Anchor {
        self.menu_open = false;
        anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_loading_with_menu_closed() {
        let state = PageState::default();
        assert!(state.loading);
        assert!(!state.menu_open);
    }

    #[test]
    fn finish_loading_leaves_menu_alone() {
        let mut state = PageState::default();
        state.toggle_menu();
        state.finish_loading();
        assert!(!state.loading);
        assert!(state.menu_open);
    }

    #[test]
    fn navigating_closes_menu() {
        let mut state = PageState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        let anchor = state.navigate(Anchor::Work);
        assert_eq!(anchor.id(), "work");
        assert!(!state.menu_open);
    }

    #[test]
    fn anchor_ids() {
        let ids: Vec<_> = [Anchor::Root, Anchor::Work, Anchor::Process, Anchor::Contact]
            .iter()
            .map(Anchor::id)
            .collect();
        assert_eq!(ids, ["portfolio-root", "work", "process", "contact"]);
    }

    #[test]
    fn mobile_menu_reaches_every_target() {
        assert_eq!(MOBILE_NAV_ANCHORS[0], Anchor::Root);
        for anchor in NAV_ANCHORS {
            assert!(MOBILE_NAV_ANCHORS.contains(&anchor), "{anchor:?}");
        }
    }

    #[test]
    fn nav_targets_are_section_ids() {
        use crate::choreography::{projects, services};

        assert_eq!(Anchor::Work.id(), projects::SECTION_ID);
        assert_eq!(Anchor::Process.id(), services::SECTION_ID);
        for anchor in NAV_ANCHORS {
            assert!(
                [projects::SECTION_ID, services::SECTION_ID, Anchor::Contact.id()].contains(&anchor.id()),
                "{anchor:?} has no section"
            );
        }
    }
}
