use dioxus::prelude::*;

use crate::components::layout::ContentArea;
use crate::components::navigation::NavBar;
use crate::fragment_client::FragmentClient;
use crate::hooks::{use_menu_state, use_navigation};
use crate::types::Page;

/// The storefront: header and nav, the fragment-backed content region, and
/// the page-specific controllers the content area mounts.
#[component]
pub fn Storefront() -> Element {
    let nav = use_navigation(FragmentClient::from_origin());
    let menu = use_menu_state();
    use_context_provider(|| nav);
    use_context_provider(|| menu);

    // First paint shows the home fragment.
    use_effect(move || {
        nav.load_fragment(Page::Home);
    });

    rsx! {
        NavBar {}
        ContentArea {}
        footer { class: "site-footer",
            p { "Mithila Food Agency. Pure makhana from Mithila." }
        }
    }
}
