use dioxus::prelude::*;

// Module Declarations
mod browser;
mod catalog;
mod components;
mod deeplink;
mod fragment_client;
mod hooks;
mod pages;
mod reveal;
mod schedule;
mod types;

use pages::Storefront;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Storefront {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
