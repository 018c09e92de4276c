use dioxus::prelude::*;

use site::{config::ProjectConfig, section::SectionId};

use crate::components::{
    badge::{BadgeList, BadgeVariant},
    button::{Button, ButtonVariant},
    card::{Card, CardContent},
    icons::{Icon, IconKind},
};

#[component]
fn ProjectCard(project: ProjectConfig) -> Element {
    rsx! {
        Card { class: "card-hover",
            CardContent {
                h3 { class: "card-title", "{project.title}" }
                p { class: "body-text", "{project.description}" }
                BadgeList { variant: BadgeVariant::Outline, labels: project.tags.clone() }

                // cards without a link keep the button for layout, it just goes nowhere
                if let Some(link) = &project.link {
                    a {
                        class: "btn btn-ghost learn-more",
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Learn More"
                        Icon { kind: IconKind::ExternalLink, class: "icon-trailing" }
                    }
                } else {
                    Button { variant: ButtonVariant::Ghost, class: "learn-more",
                        "Learn More"
                        Icon { kind: IconKind::ExternalLink, class: "icon-trailing" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects(projects: Vec<ProjectConfig>) -> Element {
    rsx! {
        section { id: SectionId::Projects.dom_id(), class: "section section-tinted",
            div { class: "container",
                h2 { class: "section-heading", "Projects & Initiatives" }

                div { class: "card-grid",
                    for project in projects {
                        ProjectCard { key: "{project.title}", project: project.clone() }
                    }
                }
            }
        }
    }
}
