use dioxus::document::eval;
use dioxus::prelude::*;

use crate::hooks::use_menu_state::MOBILE_BREAKPOINT_PX;
use crate::hooks::{MenuState, NavState};
use crate::types::Page;

const ICON_MENU: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" fill="none"><line x1="4" y1="6" x2="20" y2="6"/><line x1="4" y1="12" x2="20" y2="12"/><line x1="4" y1="18" x2="20" y2="18"/></svg>"#;
const ICON_CLOSE: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" fill="none"><line x1="6" y1="6" x2="18" y2="18"/><line x1="6" y1="18" x2="18" y2="6"/></svg>"#;

#[component]
pub fn NavBar() -> Element {
    let nav = use_context::<NavState>();
    let mut menu = use_context::<MenuState>();

    // Dismissal events originating outside the component tree: clicks
    // outside the menu, the Escape key, and resizes past the desktop
    // breakpoint. Registered once; events arrive over the eval channel.
    use_effect(move || {
        let mut dismiss_events = eval(&format!(
            r#"
            document.addEventListener('click', (e) => {{
                const menu = document.getElementById('navMenu');
                const trigger = document.getElementById('mobileMenuBtn');
                if (menu && trigger && !menu.contains(e.target) && !trigger.contains(e.target)) {{
                    dioxus.send({{ kind: 'outside-click' }});
                }}
            }});
            document.addEventListener('keydown', (e) => {{
                if (e.key === 'Escape') {{
                    dioxus.send({{ kind: 'escape' }});
                }}
            }});
            window.addEventListener('resize', () => {{
                if (window.innerWidth > {MOBILE_BREAKPOINT_PX}) {{
                    dioxus.send({{ kind: 'resize-desktop' }});
                }}
            }});
            "#
        ));

        spawn(async move {
            let mut menu = menu;
            while let Ok(msg) = dismiss_events.recv::<serde_json::Value>().await {
                match msg["kind"].as_str() {
                    Some("outside-click") => menu.outside_click(),
                    Some("escape") => menu.escape_key(),
                    Some("resize-desktop") => menu.resize_above_breakpoint(),
                    _ => {}
                }
            }
        });
    });

    rsx! {
        header { class: "site-header",
            div { class: "header-inner",
                a {
                    class: "brand",
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        nav.navigate_to(Page::Home);
                        menu.nav_link_click();
                    },
                    "Mithila Food Agency"
                }
                button {
                    id: "mobileMenuBtn",
                    class: if menu.is_open() { "mobile-menu-btn active" } else { "mobile-menu-btn" },
                    onclick: move |evt| {
                        evt.stop_propagation();
                        menu.toggle();
                    },
                    span {
                        class: "btn-icon",
                        dangerous_inner_html: if menu.is_open() { ICON_CLOSE } else { ICON_MENU },
                    }
                }
                nav {
                    ul {
                        id: "navMenu",
                        class: if menu.is_open() { "nav-menu active" } else { "nav-menu" },
                        for page in Page::ALL {
                            li { key: "{page:?}",
                                a {
                                    class: if nav.active() == page { "nav-link active" } else { "nav-link" },
                                    href: "#",
                                    onclick: move |evt| {
                                        evt.prevent_default();
                                        nav.navigate_to(page);
                                        menu.nav_link_click();
                                    },
                                    {page.label()}
                                }
                            }
                        }
                    }
                }
            }
        }
        div {
            id: "mobileMenuOverlay",
            class: if menu.is_open() { "mobile-menu-overlay active" } else { "mobile-menu-overlay" },
            onclick: move |_| menu.overlay_click(),
        }
    }
}
