use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;

use crate::browser;
use crate::fragment_client::FragmentClient;
use crate::types::Page;

/// Shared navigation state: which page is active and the markup currently
/// shown in the content region. Exactly one page is active at a time.
#[derive(Clone, Copy)]
pub struct NavState {
    client: Signal<FragmentClient>,
    active: Signal<Page>,
    fragment: Signal<String>,
}

pub fn use_navigation(client: FragmentClient) -> NavState {
    let client = use_signal(|| client);
    let active = use_signal(|| Page::Home);
    let fragment = use_signal(String::new);
    NavState {
        client,
        active,
        fragment,
    }
}

impl NavState {
    pub fn active(&self) -> Page {
        *self.active.read()
    }

    pub fn fragment_html(&self) -> String {
        self.fragment.read().clone()
    }

    /// Signal handle for effects that track fragment swaps.
    pub fn fragment_signal(&self) -> Signal<String> {
        self.fragment
    }

    /// Switch to `page`: mark it active, reset the viewport, and fetch its
    /// fragment. There is no history or URL integration.
    pub fn navigate_to(&self, page: Page) {
        let mut active = self.active;
        active.set(page);
        browser::scroll_to_top();
        self.load_fragment(page);
    }

    /// Fetch the fragment for `page` and swap it into the content region.
    /// On failure the current content stays. A fetch that loses the race to
    /// a later navigation still lands: the most recently completed fetch
    /// wins the region.
    pub fn load_fragment(&self, page: Page) {
        let client = self.client.read().clone();
        let mut fragment = self.fragment;
        spawn(async move {
            let name = page.fragment_name();
            debug!("loading fragment `{name}`");
            match client.fetch_page(name).await {
                Ok(markup) => fragment.set(markup),
                Err(err) => error!("failed to load fragment `{name}`: {err}"),
            }
        });
    }
}
