use dioxus::prelude::*;

use site::{
    nav::NavigationState,
    section::{SECTIONS, SectionId},
    theme::Theme,
};

use crate::common::dom::BrowserPage;
use crate::components::icons::{Icon, IconKind};

// the single entry point for menu and hero buttons
pub fn navigate(mut nav: Signal<NavigationState>, section: SectionId) {
    nav.with_mut(|state| state.navigate_to(section, &BrowserPage, &BrowserPage));
}

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    section: SectionId,
    nav: Signal<NavigationState>,
    #[props(default)]
    mobile: bool,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let section = props.section;
    let nav = props.nav;

    let active = nav.read().is_active(section);
    let class = match (active, props.mobile) {
        (true, false) => "nav-link active",
        (false, false) => "nav-link",
        (true, true) => "nav-link mobile active",
        (false, true) => "nav-link mobile",
    };

    rsx! {
        button { class, onclick: move |_| navigate(nav, section), "{section.label()}" }
    }
}

#[component]
fn ThemeToggle(mut theme: Signal<Theme>) -> Element {
    let kind = if theme.read().is_dark() {
        IconKind::Sun
    } else {
        IconKind::Moon
    };

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle dark mode",
            onclick: move |_| theme.with_mut(|theme| theme.toggle()),
            Icon { kind }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    brand: String,
    nav: Signal<NavigationState>,
    theme: Signal<Theme>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut nav = props.nav;
    let menu_open = nav.read().menu_open();
    let menu_icon = if menu_open { IconKind::Close } else { IconKind::Menu };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-glass",
                div { class: "navbar-row",
                    div { class: "navbar-brand", "{props.brand}" }

                    div { class: "nav-links",
                        for section in SECTIONS {
                            NavBarButton { key: "{section}", section, nav }
                        }
                    }

                    ThemeToggle { theme: props.theme }

                    button {
                        class: "menu-toggle",
                        aria_label: "Toggle navigation menu",
                        onclick: move |_| nav.with_mut(|state| state.toggle_menu()),
                        Icon { kind: menu_icon }
                    }
                }

                if menu_open {
                    div { class: "mobile-menu",
                        for section in SECTIONS {
                            NavBarButton {
                                key: "{section}",
                                section,
                                nav,
                                mobile: true,
                            }
                        }
                    }
                }
            }
        }
    }
}
