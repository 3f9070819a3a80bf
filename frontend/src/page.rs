use yew::prelude::*;

use crate::components::header::Navigation;
use crate::sections::{
    about::About, contact::Contact, cta::Cta, footer::Footer, hero::Hero, portfolio::Portfolio,
    services::Services,
};

/// Element ids the navigation links scroll to. Each is carried by exactly one
/// section of the page.
pub mod anchor {
    pub const SERVICES: &str = "services";
    pub const PORTFOLIO: &str = "portfolio";
    pub const ABOUT: &str = "about";
    pub const CONTACT: &str = "contact";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Navigation,
    Hero,
    Services,
    Portfolio,
    About,
    Cta,
    Contact,
    Footer,
}

impl Section {
    /// Top to bottom.
    pub const ORDER: [Section; 8] = [
        Section::Navigation,
        Section::Hero,
        Section::Services,
        Section::Portfolio,
        Section::About,
        Section::Cta,
        Section::Contact,
        Section::Footer,
    ];

    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Section::Services => Some(anchor::SERVICES),
            Section::Portfolio => Some(anchor::PORTFOLIO),
            Section::About => Some(anchor::ABOUT),
            Section::Contact => Some(anchor::CONTACT),
            Section::Navigation | Section::Hero | Section::Cta | Section::Footer => None,
        }
    }

    pub fn render(self) -> Html {
        match self {
            Section::Navigation => html! { <Navigation /> },
            Section::Hero => html! { <Hero /> },
            Section::Services => html! { <Services /> },
            Section::Portfolio => html! { <Portfolio /> },
            Section::About => html! { <About /> },
            Section::Cta => html! { <Cta /> },
            Section::Contact => html! { <Contact /> },
            Section::Footer => html! { <Footer /> },
        }
    }
}

/// Anchors present on the page, in page order.
pub fn anchors() -> impl Iterator<Item = &'static str> {
    Section::ORDER.into_iter().filter_map(Section::anchor)
}

#[function_component(Page)]
pub fn page() -> Html {
    html! {
        <div class="page">
            { for Section::ORDER.into_iter().map(Section::render) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{
        ABOUT_CHECKLIST, CONTACT_CHANNELS, NAV_LINKS, PORTFOLIO, SERVICES, SOCIAL_LINKS,
    };
    use crate::navigation::tests::FakeScroller;
    use crate::navigation::NavState;

    #[test]
    fn every_nav_anchor_appears_exactly_once() {
        let on_page: Vec<&str> = anchors().collect();
        for link in NAV_LINKS.iter() {
            let count = on_page.iter().filter(|anchor| **anchor == link.anchor).count();
            assert_eq!(count, 1, "anchor {:?}", link.anchor);
        }
        assert_eq!(on_page, ["services", "portfolio", "about", "contact"]);
    }

    #[test]
    fn sections_keep_fixed_order() {
        assert_eq!(Section::ORDER.first(), Some(&Section::Navigation));
        assert_eq!(Section::ORDER.last(), Some(&Section::Footer));
        let cta = Section::ORDER.iter().position(|s| *s == Section::Cta);
        let contact = Section::ORDER.iter().position(|s| *s == Section::Contact);
        assert!(cta < contact);
    }

    #[test]
    fn clicking_portfolio_scrolls_to_its_section() {
        let page = FakeScroller::new(anchors());
        let link = NAV_LINKS
            .iter()
            .find(|link| link.label == "Портфолио")
            .expect("portfolio link");

        let state = NavState::default().toggle_menu().follow(link, &page);

        assert_eq!(*page.scrolled.borrow(), ["portfolio"]);
        assert!(!state.is_mobile_menu_open);
    }

    #[test]
    fn every_nav_link_finds_its_target() {
        let page = FakeScroller::new(anchors());
        for link in NAV_LINKS.iter() {
            NavState::default().follow(link, &page);
        }
        assert_eq!(*page.scrolled.borrow(), ["services", "portfolio", "about", "contact"]);
    }

    fn rendered_page() -> String {
        futures::executor::block_on(yew::LocalServerRenderer::<Page>::new().render())
    }

    /// Byte offsets of `needles` in `html`, panicking on any that is missing.
    fn positions(html: &str, needles: impl IntoIterator<Item = &'static str>) -> Vec<usize> {
        needles
            .into_iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("{needle:?} not rendered")))
            .collect()
    }

    #[test]
    fn rendered_page_carries_each_anchor_once() {
        let html = rendered_page();
        for anchor in ["services", "portfolio", "about", "contact"] {
            let id = format!("id=\"{anchor}\"");
            assert_eq!(html.matches(&id).count(), 1, "{id}");
        }
        let order = positions(
            &html,
            ["id=\"services\"", "id=\"portfolio\"", "id=\"about\"", "id=\"contact\""],
        );
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn rendered_lists_have_one_unit_per_record() {
        let html = rendered_page();
        let count = |class: &str| html.matches(&format!("class=\"{class}\"")).count();

        assert_eq!(count("service-card"), SERVICES.len());
        assert_eq!(count("portfolio-tile"), PORTFOLIO.len());
        assert_eq!(count("checklist-item"), ABOUT_CHECKLIST.len());
        assert_eq!(count("contact-channel"), CONTACT_CHANNELS.len());
        assert_eq!(count("social-link"), SOCIAL_LINKS.len());
    }

    #[test]
    fn rendered_lists_keep_source_order() {
        let html = rendered_page();
        let in_order = |found: Vec<usize>| found.windows(2).all(|pair| pair[0] < pair[1]);

        assert!(in_order(positions(&html, SERVICES.iter().map(|s| s.title))));
        assert!(in_order(positions(&html, PORTFOLIO.iter().map(|p| p.title))));
        assert!(in_order(positions(&html, ABOUT_CHECKLIST)));
        assert!(in_order(positions(&html, CONTACT_CHANNELS.iter().map(|c| c.value))));
    }
}
