#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod backend;
mod common;
mod components;

use components::overlay::MovieSearchOverlay;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    let mut overlay_open = use_signal(|| false);

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        div { class: "container",
            div { class: "page-header",
                h1 { "Movies" }
                p { "Search the catalog by title, genre, language or country" }
            }
            button {
                class: "btn btn-primary btn-lg",
                onclick: move |_| overlay_open.set(true),
                "Find a movie"
            }
        }
        MovieSearchOverlay {
            is_open: overlay_open(),
            on_close: move |_: ()| overlay_open.set(false),
        }
    }
}
