use dioxus::prelude::*;

use crate::browser;
use crate::deeplink;
use crate::schedule::Deferred;
use crate::types::ContactDetails;

/// How a submitted enquiry leaves the page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DeliveryStrategy {
    /// Open the visitor's mail client, then always follow up with the chat
    /// deep link. There is no way to observe whether the mail client
    /// actually opened, so both handoffs fire unconditionally.
    #[default]
    MailThenMessaging,
    /// Chat deep link only.
    Messaging,
}

const MAIL_OPEN_DELAY_MS: u32 = 1_000;
const MESSAGING_FALLBACK_DELAY_MS: u32 = 4_000;
const MESSAGING_ONLY_DELAY_MS: u32 = 2_000;
const RESET_DELAY_MS: u32 = 5_000;

#[component]
pub fn ContactForm(#[props(default)] strategy: DeliveryStrategy) -> Element {
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut show_success = use_signal(|| false);

    let mut mail_timer = use_signal(Deferred::default);
    let mut messaging_timer = use_signal(Deferred::default);
    let mut reset_timer = use_signal(Deferred::default);

    use_drop(move || {
        mail_timer.write().cancel();
        messaging_timer.write().cancel();
        reset_timer.write().cancel();
    });

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let details = ContactDetails {
            name: name(),
            phone: phone(),
            email: email(),
            subject: subject(),
            message: message(),
        };

        show_success.set(true);

        match strategy {
            DeliveryStrategy::MailThenMessaging => {
                let (mail_subject, mail_body) = deeplink::contact_email(&details);
                mail_timer.write().schedule(MAIL_OPEN_DELAY_MS, move || {
                    browser::open_in_current_tab(&deeplink::mailto_url(&mail_subject, &mail_body));
                });

                let fallback = deeplink::contact_message(&details);
                messaging_timer.write().schedule(MESSAGING_FALLBACK_DELAY_MS, move || {
                    browser::open_in_new_tab(&deeplink::whatsapp_url(&fallback));
                });
            }
            DeliveryStrategy::Messaging => {
                let payload = deeplink::contact_message(&details);
                messaging_timer.write().schedule(MESSAGING_ONLY_DELAY_MS, move || {
                    browser::open_in_new_tab(&deeplink::whatsapp_url(&payload));
                });
            }
        }

        reset_timer.write().schedule(RESET_DELAY_MS, move || {
            show_success.set(false);
            name.set(String::new());
            phone.set(String::new());
            email.set(String::new());
            subject.set(String::new());
            message.set(String::new());
        });
    };

    rsx! {
        section { class: "contact-section fade-in",
            form { id: "contactForm", class: "contact-form", onsubmit: submit,
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
                    "Email (optional)"
                    input {
                        r#type: "email",
                        name: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "form-field",
                    "Subject"
                    input {
                        r#type: "text",
                        name: "subject",
                        required: true,
                        value: "{subject}",
                        oninput: move |evt| subject.set(evt.value()),
                    }
                }
                label { class: "form-field",
                    "Message"
                    textarea {
                        name: "message",
                        required: true,
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                }
                button { r#type: "submit", class: "btn-primary", "Send Message" }
            }

            if show_success() {
                div { id: "contactSuccessMessage", class: "success-message show",
                    "Thank you for reaching out! We have received your message and will get back to you."
                }
            }
        }
    }
}
