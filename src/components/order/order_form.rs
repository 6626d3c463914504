use dioxus::prelude::*;

use crate::browser;
use crate::catalog;
use crate::components::order::QuantityStepper;
use crate::deeplink;
use crate::schedule::Deferred;
use crate::types::{order_total, CustomerDetails, ProductSelection};

/// Delay before the WhatsApp handoff opens, leaving the acknowledgment visible.
const OPEN_LINK_DELAY_MS: u32 = 2_000;

/// Delay before the acknowledgment clears and the form resets.
const RESET_DELAY_MS: u32 = 5_000;

fn fresh_selections() -> Vec<ProductSelection> {
    catalog::products().iter().map(ProductSelection::new).collect()
}

#[component]
pub fn OrderForm() -> Element {
    let mut selections = use_signal(fresh_selections);
    let total = use_memo(move || order_total(&selections.read()));

    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut city = use_signal(String::new);
    let mut pincode = use_signal(String::new);
    let mut instructions = use_signal(String::new);
    let mut show_success = use_signal(|| false);

    let mut link_timer = use_signal(Deferred::default);
    let mut reset_timer = use_signal(Deferred::default);

    // A pending handoff or reset must not outlive the form.
    use_drop(move || {
        link_timer.write().cancel();
        reset_timer.write().cancel();
    });

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let rows = selections.read().clone();
        if !rows.iter().any(|row| row.selected) {
            browser::alert("Please select at least one product to order.");
            return;
        }

        let customer = CustomerDetails {
            name: name(),
            phone: phone(),
            address: address(),
            city: city(),
            pincode: pincode(),
        };
        let message = deeplink::order_message(&customer, &rows, &instructions());

        show_success.set(true);
        link_timer.write().schedule(OPEN_LINK_DELAY_MS, move || {
            browser::open_in_new_tab(&deeplink::whatsapp_url(&message));
        });
        reset_timer.write().schedule(RESET_DELAY_MS, move || {
            show_success.set(false);
            selections.set(fresh_selections());
            name.set(String::new());
            phone.set(String::new());
            address.set(String::new());
            city.set(String::new());
            pincode.set(String::new());
            instructions.set(String::new());
        });
    };

    rsx! {
        section { class: "order-section fade-in",
            form { id: "orderForm", class: "order-form", onsubmit: submit,
                fieldset { class: "form-block",
                    legend { "Your Details" }
                    label { class: "form-field",
                        "Name"
                        input {
                            r#type: "text",
                            name: "name",
                            required: true,
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    label { class: "form-field",
                        "Phone"
                        input {
                            r#type: "tel",
                            name: "phone",
                            required: true,
                            value: "{phone}",
                            oninput: move |evt| phone.set(evt.value()),
                        }
                    }
                    label { class: "form-field",
                        "Address"
                        input {
                            r#type: "text",
                            name: "address",
                            required: true,
                            value: "{address}",
                            oninput: move |evt| address.set(evt.value()),
                        }
                    }
                    label { class: "form-field",
                        "City"
                        input {
                            r#type: "text",
                            name: "city",
                            required: true,
                            value: "{city}",
                            oninput: move |evt| city.set(evt.value()),
                        }
                    }
                    label { class: "form-field",
                        "Pincode"
                        input {
                            r#type: "text",
                            name: "pincode",
                            required: true,
                            value: "{pincode}",
                            oninput: move |evt| pincode.set(evt.value()),
                        }
                    }
                }

                fieldset { class: "form-block",
                    legend { "Select Products" }
                    ul { class: "product-list",
                        for (index, row) in selections.read().iter().enumerate() {
                            li { key: "{row.product.name}-{row.product.weight_grams}", class: "product-item",
                                label { class: "product-pick",
                                    input {
                                        r#type: "checkbox",
                                        class: "product-checkbox",
                                        checked: row.selected,
                                        onchange: move |evt| {
                                            selections.write()[index].selected = evt.checked();
                                        },
                                    }
                                    span { class: "product-name", {row.product.display_name()} }
                                    span { class: "product-price", "₹{row.product.price_rupees}" }
                                }
                                QuantityStepper {
                                    quantity: row.quantity,
                                    on_change: move |quantity| {
                                        selections.write()[index].quantity = quantity;
                                    },
                                }
                            }
                        }
                    }
                    p { class: "order-total-row",
                        "Total: ₹"
                        span { id: "orderTotal", "{total}" }
                    }
                }

                label { class: "form-field",
                    "Special Instructions (optional)"
                    textarea {
                        name: "message",
                        value: "{instructions}",
                        oninput: move |evt| instructions.set(evt.value()),
                    }
                }

                button { r#type: "submit", class: "btn-primary", "Place Order on WhatsApp" }
            }

            if show_success() {
                div { id: "successMessage", class: "success-message show",
                    "Thank you! Your order has been received. We are opening WhatsApp so you can confirm it."
                }
            }
        }
    }
}
