use dioxus::prelude::*;

use crate::browser;
use crate::catalog;
use crate::components::order::QuantityStepper;
use crate::deeplink;
use crate::types::Product;

/// Card grid for the products page.
#[component]
pub fn ProductGrid() -> Element {
    rsx! {
        section { id: "products", class: "product-grid",
            for product in catalog::products() {
                ProductCard { key: "{product.name}-{product.weight_grams}", product: product.clone() }
            }
        }
    }
}

/// One catalog card: price and weight readout, quantity stepper, and a
/// one-click WhatsApp order that skips the full order form.
#[component]
pub fn ProductCard(product: Product) -> Element {
    let mut quantity = use_signal(|| 1u32);

    let order_now = {
        let product = product.clone();
        move |_| {
            let message = deeplink::quick_order_message(&product, quantity());
            browser::open_in_new_tab(&deeplink::whatsapp_url(&message));
        }
    };

    rsx! {
        article { class: "product-card fade-in",
            h3 { class: "product-card-name", "{product.name}" }
            p { class: "product-card-weight", "{product.weight_grams}g" }
            p { class: "product-card-price", "₹{product.price_rupees}" }
            QuantityStepper {
                quantity: quantity(),
                on_change: move |value| quantity.set(value),
            }
            button {
                r#type: "button",
                class: "btn-primary order-now-btn",
                onclick: order_now,
                "Order on WhatsApp"
            }
        }
    }
}
