use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BadgeVariant {
    #[default]
    Secondary,
    Outline,
}

#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, label: String) -> Element {
    let class = match variant {
        BadgeVariant::Secondary => "badge badge-secondary",
        BadgeVariant::Outline => "badge badge-outline",
    };

    rsx! {
        span { class, "{label}" }
    }
}

// a wrapped row of badges, one per label
#[component]
pub fn BadgeList(#[props(default)] variant: BadgeVariant, labels: Vec<String>) -> Element {
    rsx! {
        div { class: "badge-list",
            for label in labels {
                Badge { key: "{label}", variant, label: label.clone() }
            }
        }
    }
}
