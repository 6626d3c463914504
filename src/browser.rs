//! Guarded access to the handful of browser APIs the storefront touches.
//! A missing collaborator (no window, no body) degrades to a no-op.

use web_sys::window;

/// Reset the viewport to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Lock or release page scrolling while the mobile menu is open.
pub fn set_scroll_lock(locked: bool) {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// Blocking notice, used when an order is submitted with nothing selected.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Open a deep link in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// Open a deep link in the current browsing context (mail-client handoff).
pub fn open_in_current_tab(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(url, "_self");
    }
}
