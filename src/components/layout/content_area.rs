use dioxus::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::order::OrderForm;
use crate::components::products::ProductGrid;
use crate::hooks::NavState;
use crate::reveal;
use crate::types::Page;

/// Content region: the fragment markup for the active page, plus the
/// interactive controller that page mounts (product grid, order form,
/// contact form).
#[component]
pub fn ContentArea() -> Element {
    let nav = use_context::<NavState>();
    let fragment = nav.fragment_signal();

    // Swapped-in fragments and freshly mounted page controllers both carry
    // reveal targets; re-arm on either change.
    use_effect(move || {
        let _ = fragment.read();
        let _ = nav.active();
        reveal::arm();
    });

    rsx! {
        main { class: "content-area",
            div {
                id: "pageContent",
                class: "page-content",
                dangerous_inner_html: nav.fragment_html(),
            }
            if nav.active() == Page::Products {
                ProductGrid {}
            }
            if nav.active() == Page::Order {
                OrderForm {}
            }
            if nav.active() == Page::Contact {
                ContactForm {}
            }
        }
    }
}
