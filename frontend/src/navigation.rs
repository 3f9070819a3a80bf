use crate::config::SCROLLED_THRESHOLD_PX;
use crate::content::NavLink;

/// Something that can bring a named anchor into view.
pub trait AnchorScroller {
    /// Returns false when no element carries `anchor` as its id.
    fn scroll_to_anchor(&self, anchor: &str) -> bool;
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD_PX
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub is_scrolled: bool,
    pub is_mobile_menu_open: bool,
}

impl NavState {
    pub fn with_scroll(self, offset: f64) -> Self {
        Self {
            is_scrolled: is_scrolled(offset),
            ..self
        }
    }

    pub fn toggle_menu(self) -> Self {
        Self {
            is_mobile_menu_open: !self.is_mobile_menu_open,
            ..self
        }
    }

    /// Scrolls to the link's anchor and closes the menu. A link whose anchor
    /// is missing from the page leaves everything as it was.
    pub fn follow<S: AnchorScroller + ?Sized>(self, link: &NavLink, scroller: &S) -> Self {
        if scroller.scroll_to_anchor(link.anchor) {
            Self {
                is_mobile_menu_open: false,
                ..self
            }
        } else {
            log::debug!("no element with id {:?}, ignoring click", link.anchor);
            self
        }
    }

    pub fn header_class(&self) -> &'static str {
        if self.is_scrolled {
            "site-header scrolled"
        } else {
            "site-header"
        }
    }

    pub fn toggle_icon(&self) -> &'static str {
        if self.is_mobile_menu_open {
            "x"
        } else {
            "menu"
        }
    }
}

/// Lifecycle of the collapsible mobile panel. It stays mounted while the
/// closing animation plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelPhase {
    #[default]
    Hidden,
    Open,
    Closing,
}

impl PanelPhase {
    pub fn sync(self, menu_open: bool) -> Self {
        match (self, menu_open) {
            (_, true) => PanelPhase::Open,
            (PanelPhase::Open, false) => PanelPhase::Closing,
            (phase, false) => phase,
        }
    }

    /// Called when the closing animation has run its course.
    pub fn finish_exit(self) -> Self {
        match self {
            PanelPhase::Closing => PanelPhase::Hidden,
            phase => phase,
        }
    }

    pub fn is_mounted(&self) -> bool {
        !matches!(self, PanelPhase::Hidden)
    }

    pub fn class(&self) -> &'static str {
        match self {
            PanelPhase::Closing => "mobile-panel closing",
            _ => "mobile-panel",
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::content::NAV_LINKS;
    use std::cell::RefCell;

    /// Records the anchors it was asked to scroll to; knows only `anchors`.
    pub(crate) struct FakeScroller {
        pub anchors: Vec<&'static str>,
        pub scrolled: RefCell<Vec<String>>,
    }

    impl FakeScroller {
        pub fn new(anchors: impl IntoIterator<Item = &'static str>) -> Self {
            Self {
                anchors: anchors.into_iter().collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl AnchorScroller for FakeScroller {
        fn scroll_to_anchor(&self, anchor: &str) -> bool {
            if self.anchors.iter().any(|known| *known == anchor) {
                self.scrolled.borrow_mut().push(anchor.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn scrolled_flag_follows_threshold_both_ways() {
        let state = NavState::default();
        assert!(!state.is_scrolled);

        let offsets = [0.0, 10.0, 49.9, 50.0, 50.5, 300.0, 51.0, 49.0, 0.0];
        let flags: Vec<bool> = offsets
            .iter()
            .scan(state, |state, offset| {
                *state = state.with_scroll(*offset);
                Some(state.is_scrolled)
            })
            .collect();

        assert_eq!(flags, [false, false, false, false, true, true, true, false, false]);
    }

    #[test]
    fn header_style_depends_only_on_scroll_flag() {
        let open_menu = NavState::default().toggle_menu();
        assert_eq!(open_menu.header_class(), NavState::default().header_class());
        assert_eq!(NavState::default().with_scroll(120.0).header_class(), "site-header scrolled");
    }

    #[test]
    fn toggle_parity_decides_menu_state() {
        for toggles in 0..7 {
            let state = (0..toggles).fold(NavState::default(), |state, _| state.toggle_menu());
            assert_eq!(state.is_mobile_menu_open, toggles % 2 == 1, "after {} toggles", toggles);
            assert_eq!(state.toggle_icon(), if toggles % 2 == 1 { "x" } else { "menu" });
        }
    }

    #[test]
    fn following_a_link_scrolls_and_closes_the_menu() {
        let scroller = FakeScroller::new(["services", "portfolio", "about", "contact"]);
        let state = NavState::default().with_scroll(400.0).toggle_menu();

        let next = state.follow(&NAV_LINKS[2], &scroller);

        assert_eq!(*scroller.scrolled.borrow(), ["about"]);
        assert!(!next.is_mobile_menu_open);
        assert!(next.is_scrolled);
    }

    #[test]
    fn missing_anchor_changes_nothing() {
        let scroller = FakeScroller::new(["services"]);
        let state = NavState::default().toggle_menu();
        let orphan = NavLink { label: "Блог", anchor: "blog" };

        let next = state.follow(&orphan, &scroller);

        assert_eq!(next, state);
        assert!(scroller.scrolled.borrow().is_empty());
    }

    #[test]
    fn panel_lingers_while_closing() {
        let phase = PanelPhase::default();
        assert!(!phase.is_mounted());

        let phase = phase.sync(true);
        assert_eq!(phase, PanelPhase::Open);

        let phase = phase.sync(false);
        assert_eq!(phase, PanelPhase::Closing);
        assert!(phase.is_mounted());
        assert_eq!(phase.class(), "mobile-panel closing");

        // Reopened before the exit finished
        assert_eq!(phase.sync(true), PanelPhase::Open);

        let phase = phase.finish_exit();
        assert_eq!(phase, PanelPhase::Hidden);
        assert_eq!(phase.sync(false), PanelPhase::Hidden);
    }

    #[test]
    fn stale_exit_timer_does_not_hide_an_open_panel() {
        assert_eq!(PanelPhase::Open.finish_exit(), PanelPhase::Open);
    }
}
