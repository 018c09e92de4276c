#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, error};

use site::config::read_config;

mod common;

mod components;

mod home;
use home::Portfolio;

mod about;
mod contact;
mod projects;
mod resume;

// page content, see site.toml for the layout
const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    // parsed once per page load; the error is kept as text so the hook value stays Clone
    let config = use_hook(|| {
        read_config(SITE_CONFIG).map_err(|err| {
            error!("failed to load site content: {err:#}");
            format!("{err:#}")
        })
    });

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        {
            match config {
                Ok(config) => rsx! {
                    Portfolio { config }
                },
                Err(err) => rsx! {
                    div { class: "load-error",
                        h1 { "Something went wrong" }
                        p { "{err}" }
                    }
                },
            }
        }
    }
}
