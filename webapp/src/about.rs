use dioxus::prelude::*;

use site::{config::AboutConfig, section::SectionId};

use crate::components::{
    badge::BadgeList,
    card::{Card, CardContent},
};

#[component]
pub fn About(about: AboutConfig) -> Element {
    rsx! {
        section { id: SectionId::About.dom_id(), class: "section",
            div { class: "container",
                h2 { class: "section-heading", "{about.heading}" }

                div { class: "two-column align-center",
                    div {
                        h3 { class: "subheading", "{about.mission_title}" }
                        for paragraph in about.paragraphs.iter() {
                            p { class: "body-text", "{paragraph}" }
                        }
                        BadgeList { labels: about.badges.clone() }
                    }

                    Card {
                        CardContent { class: "padded-lg",
                            if !about.education.is_empty() {
                                h4 { class: "card-title", "Education" }
                                div { class: "stack",
                                    for entry in about.education.iter() {
                                        div { key: "{entry.degree}",
                                            h5 { class: "entry-title", "{entry.degree}" }
                                            p { class: "muted", "{entry.institution}" }
                                            p { class: "faint small", "{entry.status}" }
                                        }
                                    }
                                }
                            }

                            if !about.interests.is_empty() {
                                h4 { class: "card-title spaced", "Core Interests" }
                                ul { class: "bullet-list",
                                    for interest in about.interests.iter() {
                                        li { "{interest}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
