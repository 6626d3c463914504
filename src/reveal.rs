//! One-shot reveal animations for elements entering the viewport.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Elements opting into the scroll-triggered fade-in.
const REVEAL_SELECTOR: &str = ".fade-in";

/// Fraction of an element that must be visible before it animates.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Observe every reveal element currently in the document and release its
/// animation the first time it crosses the visibility threshold (one-shot:
/// the element is unobserved immediately after). Call again after swapping
/// new markup into the content region so inserted elements are covered.
pub fn arm() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
        return;
    };
    if nodes.length() == 0 {
        return;
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    let _ = element
                        .style()
                        .set_property("animation-play-state", "running");
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let Ok(observer) =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
    else {
        return;
    };

    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else { continue };
        if let Ok(element) = node.dyn_into::<Element>() {
            observer.observe(&element);
        }
    }

    // The callback must stay alive as long as the observer holds it.
    on_intersect.forget();
}
