use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use site::{
    config::{FooterConfig, ProfileConfig, SiteConfig},
    nav::NavigationState,
    section::SectionId,
    theme::Theme,
};

use crate::about::About;
use crate::common::{
    current_year,
    dom::{BrowserPage, DocumentRoot, ScrollSubscription, scroll_y},
};
use crate::components::{
    button::{Button, ButtonVariant},
    navigation::{NavBar, navigate},
};
use crate::contact::Contact;
use crate::projects::Projects;
use crate::resume::Resume;

// the whole page
//
// navigation and theme state are owned here and handed down to the navbar and hero; the scroll
// listener lives exactly as long as this view is mounted
#[component]
pub fn Portfolio(config: SiteConfig) -> Element {
    let mut nav = use_signal(|| NavigationState::new(config.navigation.probe_offset));
    let theme = use_signal(|| Theme::new(config.navigation.dark_mode));

    use_effect(move || theme.read().apply(&DocumentRoot));

    let subscription = use_hook(move || {
        Rc::new(RefCell::new(ScrollSubscription::new(move || {
            // only write back on a real change, otherwise every scroll event re-renders the menu
            let mut next = *nav.peek();
            if next.recompute(scroll_y(), &BrowserPage) {
                nav.set(next);
            }
        })))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });

    rsx! {
        div { class: "page",
            NavBar { brand: config.profile.initials.clone(), nav, theme }

            Hero { profile: config.profile.clone(), nav }
            About { about: config.about.clone() }
            Projects { projects: config.projects.clone() }
            Resume { resume: config.resume.clone() }
            Contact { contact: config.contact.clone() }

            Footer { name: config.profile.name.clone(), footer: config.footer.clone() }
        }
    }
}

#[component]
fn Hero(profile: ProfileConfig, nav: Signal<NavigationState>) -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-content",
                div { class: "avatar",
                    if let Some(avatar) = &profile.avatar {
                        img { src: "{avatar}", alt: "Profile" }
                    } else {
                        span { "{profile.initials}" }
                    }
                }
                h1 { class: "hero-title", "{profile.name}" }
                p { class: "hero-headline", "{profile.headline}" }
                p { class: "hero-tagline", "{profile.tagline}" }

                div { class: "hero-actions",
                    Button {
                        class: "btn-lg",
                        onclick: move |_| navigate(nav, SectionId::Contact),
                        "Get In Touch"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        class: "btn-lg",
                        onclick: move |_| navigate(nav, SectionId::Projects),
                        "View Projects"
                    }
                }
            }
        }
    }
}

#[component]
fn Footer(name: String, footer: FooterConfig) -> Element {
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                p { "© {year} {name}. {footer.dedication}" }
            }
        }
    }
}
