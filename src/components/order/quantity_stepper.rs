use dioxus::prelude::*;

use crate::types::step_quantity;

/// Plus/minus quantity stepper; never reports a value below 1.
#[component]
pub fn QuantityStepper(quantity: u32, on_change: EventHandler<u32>) -> Element {
    rsx! {
        div { class: "quantity-stepper",
            button {
                r#type: "button",
                class: "quantity-btn",
                onclick: move |_| on_change.call(step_quantity(quantity, -1)),
                "-"
            }
            span { class: "quantity-display", "{quantity}" }
            button {
                r#type: "button",
                class: "quantity-btn",
                onclick: move |_| on_change.call(step_quantity(quantity, 1)),
                "+"
            }
        }
    }
}
