use dioxus::prelude::*;

use site::{
    config::{ExperienceEntry, ResumeConfig},
    section::SectionId,
};

use crate::components::{
    badge::BadgeList,
    card::{Card, CardContent},
    icons::{Icon, IconKind},
};

#[component]
fn ExperienceCard(entry: ExperienceEntry) -> Element {
    rsx! {
        Card {
            CardContent {
                h4 { class: "entry-title", "{entry.role}" }
                p { class: "muted", "{entry.organization}" }
                p { class: "faint small spaced-below", "{entry.period}" }
                p { class: "muted small", "{entry.summary}" }
            }
        }
    }
}

#[component]
pub fn Resume(resume: ResumeConfig) -> Element {
    rsx! {
        section { id: SectionId::Resume.dom_id(), class: "section",
            div { class: "container narrow",
                h2 { class: "section-heading", "Resume" }

                if let Some(download) = &resume.download {
                    div { class: "centered spaced-below-lg",
                        a {
                            class: "btn btn-primary btn-lg",
                            href: "{download}",
                            download: "",
                            Icon { kind: IconKind::Download, class: "icon-leading" }
                            "Download Resume"
                        }
                    }
                }

                div { class: "two-column",
                    div {
                        h3 { class: "subheading", "Experience" }
                        div { class: "stack",
                            for entry in resume.experience.iter() {
                                ExperienceCard { key: "{entry.role}", entry: entry.clone() }
                            }
                        }
                    }

                    div {
                        h3 { class: "subheading", "Skills & Competencies" }
                        div { class: "stack",
                            for group in resume.skills.iter() {
                                div { key: "{group.name}",
                                    h4 { class: "entry-title spaced-below-sm", "{group.name}" }
                                    BadgeList { labels: group.skills.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
