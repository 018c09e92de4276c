use tracing::debug;

use crate::section::{SECTIONS, SectionId, SectionLayout};

// distance below the scroll position at which sections are probed, so that a section counts as
// active slightly before it slides under the floating navbar
pub const DEFAULT_PROBE_OFFSET: f64 = 100.0;

// platform scrolling
//
// the animation itself belongs to the platform; implementations only forward the request
pub trait Viewport {
    fn smooth_scroll_to(&self, section: SectionId);
}

// find the first declared section (in page order) whose extent contains scroll_y + offset
//
// sections without geometry are skipped for this pass
pub fn active_section<L: SectionLayout>(scroll_y: f64, offset: f64, layout: &L) -> Option<SectionId> {
    let probe = scroll_y + offset;

    SECTIONS.iter().copied().find(|section| {
        layout
            .extent(*section)
            .is_some_and(|extent| extent.contains(probe))
    })
}

// navigation state shared between the page view and the menus
//
// active is only ever written by recompute, so it is always a declared section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationState {
    active: SectionId,
    menu_open: bool,
    probe_offset: f64,
}

impl Default for NavigationState {
    fn default() -> Self {
        NavigationState::new(DEFAULT_PROBE_OFFSET)
    }
}

impl NavigationState {
    pub fn new(probe_offset: f64) -> Self {
        NavigationState {
            active: SectionId::default(),
            menu_open: false,
            probe_offset,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_active(&self, section: SectionId) -> bool {
        self.active == section
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn probe_offset(&self) -> f64 {
        self.probe_offset
    }

    // re-evaluate the active section against the live layout
    //
    // when nothing contains the probe (overscroll at the top, the footer below the last
    // section, a layout shift in progress) the previous value is kept.  returns true only if
    // the active section changed
    pub fn recompute<L: SectionLayout>(&mut self, scroll_y: f64, layout: &L) -> bool {
        match active_section(scroll_y, self.probe_offset, layout) {
            Some(section) if section != self.active => {
                debug!({ from = %self.active, to = %section }, "active section changed");
                self.active = section;
                true
            }
            _ => false,
        }
    }

    // scroll to a section and close the mobile menu
    //
    // a section that is not currently mounted is ignored
    pub fn navigate_to<L, V>(&mut self, section: SectionId, layout: &L, viewport: &V)
    where
        L: SectionLayout,
        V: Viewport,
    {
        if layout.extent(section).is_some() {
            debug!({ section = %section }, "scrolling to section");
            viewport.smooth_scroll_to(section);
        } else {
            debug!({ section = %section }, "section not mounted, ignoring navigation");
        }

        self.close_menu();
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, collections::HashMap};

    use super::*;
    use crate::section::Extent;

    // a page whose viewport jumps straight to the target when asked to scroll, i.e. an
    // already-settled smooth scroll
    struct FakePage {
        extents: HashMap<SectionId, Extent>,
        scroll_y: Cell<f64>,
        scrolls: Cell<usize>,
    }

    impl FakePage {
        fn new(extents: &[(SectionId, f64, f64)]) -> Self {
            FakePage {
                extents: extents
                    .iter()
                    .map(|(id, top, height)| (*id, Extent::new(*top, *height)))
                    .collect(),
                scroll_y: Cell::new(0.0),
                scrolls: Cell::new(0),
            }
        }

        fn standard() -> Self {
            FakePage::new(&[
                (SectionId::About, 0.0, 800.0),
                (SectionId::Projects, 800.0, 800.0),
                (SectionId::Resume, 1600.0, 800.0),
                (SectionId::Contact, 2400.0, 600.0),
            ])
        }
    }

    impl SectionLayout for FakePage {
        fn extent(&self, section: SectionId) -> Option<Extent> {
            self.extents.get(&section).copied()
        }
    }

    impl Viewport for FakePage {
        fn smooth_scroll_to(&self, section: SectionId) {
            if let Some(extent) = self.extents.get(&section) {
                self.scroll_y.set(extent.top);
            }
            self.scrolls.set(self.scrolls.get() + 1);
        }
    }

    #[test]
    fn starts_on_about_with_menu_closed() {
        let state = NavigationState::default();

        assert_eq!(state.active(), SectionId::About);
        assert!(!state.menu_open());
        assert_eq!(state.probe_offset(), 100.0);
    }

    #[test]
    fn scroll_walkthrough() {
        let page = FakePage::standard();
        let mut state = NavigationState::default();

        state.recompute(0.0, &page);
        assert_eq!(state.active(), SectionId::About);

        state.recompute(750.0, &page);
        assert_eq!(state.active(), SectionId::Projects);

        state.recompute(1550.0, &page);
        assert_eq!(state.active(), SectionId::Resume);

        // probe at 3050 is past the bottom of contact
        state.recompute(2950.0, &page);
        assert_eq!(state.active(), SectionId::Resume);
    }

    #[test]
    fn probe_boundaries() {
        let page = FakePage::standard();

        assert_eq!(active_section(699.0, 100.0, &page), Some(SectionId::About));
        assert_eq!(active_section(700.0, 100.0, &page), Some(SectionId::Projects));
        assert_eq!(active_section(2899.0, 100.0, &page), Some(SectionId::Contact));
        assert_eq!(active_section(2900.0, 100.0, &page), None);
        assert_eq!(active_section(-150.0, 100.0, &page), None);
    }

    #[test]
    fn no_match_keeps_previous() {
        let page = FakePage::standard();
        let mut state = NavigationState::default();

        state.recompute(1000.0, &page);
        assert_eq!(state.active(), SectionId::Projects);

        assert!(!state.recompute(5000.0, &page));
        assert_eq!(state.active(), SectionId::Projects);

        // rubber-band overscroll above the page
        assert!(!state.recompute(-400.0, &page));
        assert_eq!(state.active(), SectionId::Projects);
    }

    #[test]
    fn recompute_reports_changes_only() {
        let page = FakePage::standard();
        let mut state = NavigationState::default();

        assert!(!state.recompute(0.0, &page));
        assert!(state.recompute(900.0, &page));
        assert!(!state.recompute(950.0, &page));
    }

    #[test]
    fn first_declared_wins_on_overlap() {
        let page = FakePage::new(&[
            (SectionId::About, 0.0, 1000.0),
            (SectionId::Projects, 500.0, 1000.0),
        ]);

        assert_eq!(active_section(500.0, 100.0, &page), Some(SectionId::About));
        assert_eq!(active_section(950.0, 100.0, &page), Some(SectionId::Projects));
    }

    #[test]
    fn zero_height_section_never_matches() {
        let page = FakePage::new(&[
            (SectionId::About, 0.0, 800.0),
            (SectionId::Projects, 800.0, 0.0),
            (SectionId::Resume, 800.0, 800.0),
        ]);

        assert_eq!(active_section(700.0, 100.0, &page), Some(SectionId::Resume));
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let page = FakePage::new(&[
            (SectionId::About, 0.0, 800.0),
            (SectionId::Contact, 2400.0, 600.0),
        ]);
        let mut state = NavigationState::default();

        state.recompute(1500.0, &page);
        assert_eq!(state.active(), SectionId::About);

        state.recompute(2500.0, &page);
        assert_eq!(state.active(), SectionId::Contact);
    }

    #[test]
    fn custom_probe_offset() {
        let page = FakePage::standard();
        let mut state = NavigationState::new(0.0);

        state.recompute(750.0, &page);
        assert_eq!(state.active(), SectionId::About);
    }

    #[test]
    fn active_is_always_declared() {
        let page = FakePage::new(&[
            (SectionId::About, 120.0, 640.0),
            (SectionId::Projects, 760.0, 0.0),
            (SectionId::Resume, 760.0, 1333.5),
            (SectionId::Contact, 2200.0, 410.0),
        ]);
        let mut state = NavigationState::default();

        // a jittery scroll sequence covering overscroll, gaps and the footer
        let mut scroll_y = -300.0;
        let mut step = 37.0;
        while scroll_y < 3500.0 {
            state.recompute(scroll_y, &page);
            assert!(SECTIONS.contains(&state.active()));

            if let Some(expected) = active_section(scroll_y, 100.0, &page) {
                assert_eq!(state.active(), expected);
            }

            scroll_y += step;
            step = if step > 200.0 { 11.0 } else { step * 1.7 };
        }
    }

    #[test]
    fn navigate_then_settle_activates_target() {
        let page = FakePage::standard();
        let mut state = NavigationState::default();

        state.navigate_to(SectionId::Projects, &page, &page);
        assert_eq!(page.scrolls.get(), 1);
        assert_eq!(page.scroll_y.get(), 800.0);

        // navigation itself does not touch the active section
        assert_eq!(state.active(), SectionId::About);

        state.recompute(page.scroll_y.get(), &page);
        assert_eq!(state.active(), SectionId::Projects);
    }

    #[test]
    fn navigate_to_unmounted_is_noop() {
        let page = FakePage::new(&[(SectionId::About, 0.0, 800.0)]);
        let mut state = NavigationState::default();

        state.navigate_to(SectionId::Resume, &page, &page);

        assert_eq!(page.scrolls.get(), 0);
        assert_eq!(page.scroll_y.get(), 0.0);
        assert_eq!(state.active(), SectionId::About);
    }

    #[test]
    fn navigate_closes_menu() {
        let page = FakePage::standard();
        let mut state = NavigationState::default();

        state.toggle_menu();
        assert!(state.menu_open());
        state.navigate_to(SectionId::Contact, &page, &page);
        assert!(!state.menu_open());

        // closes even when the target is missing
        let empty = FakePage::new(&[]);
        state.toggle_menu();
        state.navigate_to(SectionId::Contact, &empty, &empty);
        assert!(!state.menu_open());
    }

    #[test]
    fn toggle_menu_round_trip() {
        let mut state = NavigationState::default();

        state.toggle_menu();
        state.toggle_menu();
        assert!(!state.menu_open());

        state.toggle_menu();
        state.close_menu();
        assert!(!state.menu_open());
    }
}
