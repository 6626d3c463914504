//! Structured-text payloads and the WhatsApp/mailto deep links that carry
//! them. Messages are built as plain `\n`-delimited text; encoding to the
//! `%0A`-delimited URL payload happens once, at the link boundary.

use crate::types::{order_total, ContactDetails, CustomerDetails, Product, ProductSelection};

/// WhatsApp business number orders and queries are routed to.
pub const WHATSAPP_NUMBER: &str = "919798661589";

/// Customer-care inbox used by the contact form's mail variant.
pub const CONTACT_EMAIL: &str = "care@mithilafoodagency.com";

/// Full order summary: customer fields, one bullet per checked product,
/// the total, and optional special instructions.
pub fn order_message(
    customer: &CustomerDetails,
    selections: &[ProductSelection],
    instructions: &str,
) -> String {
    let mut lines = vec![
        "Hello! I would like to place an order:".to_string(),
        String::new(),
        format!("*Name:* {}", customer.name),
        format!("*Phone:* {}", customer.phone),
        format!("*Address:* {}", customer.address),
        format!("*City:* {}", customer.city),
        format!("*Pincode:* {}", customer.pincode),
        String::new(),
        "*Order Details:*".to_string(),
    ];

    for row in selections.iter().filter(|row| row.selected) {
        lines.push(format!(
            "• {} (Qty: {}) - ₹{}",
            row.product.display_name(),
            row.quantity,
            row.line_total()
        ));
    }

    lines.push(String::new());
    lines.push(format!("*Total: ₹{}*", order_total(selections)));
    lines.push(String::new());

    if !instructions.trim().is_empty() {
        lines.push(format!("*Special Instructions:* {}", instructions.trim()));
        lines.push(String::new());
    }

    lines.push("Please confirm my order. Thank you!".to_string());
    lines.join("\n")
}

/// Contact enquiry as a chat message.
pub fn contact_message(details: &ContactDetails) -> String {
    [
        "Hello! I have a query:".to_string(),
        String::new(),
        format!("*Name:* {}", details.name),
        format!("*Phone:* {}", details.phone),
        format!("*Email:* {}", details.email_or_placeholder()),
        format!("*Subject:* {}", details.subject),
        String::new(),
        format!("*Message:* {}", details.message),
        String::new(),
        "Please get back to me. Thank you!".to_string(),
    ]
    .join("\n")
}

/// Subject and body for the contact form's mail-client variant.
pub fn contact_email(details: &ContactDetails) -> (String, String) {
    let subject = format!("Contact Form: {} - {}", details.subject, details.name);
    let body = [
        format!("Name: {}", details.name),
        format!("Phone: {}", details.phone),
        format!("Email: {}", details.email_or_placeholder()),
        format!("Subject: {}", details.subject),
        String::new(),
        format!("Message: {}", details.message),
        String::new(),
        "Please get back to me. Thank you!".to_string(),
    ]
    .join("\n");
    (subject, body)
}

/// Single-item summary for the product-card quick order.
pub fn quick_order_message(product: &Product, quantity: u32) -> String {
    [
        "Hello! I would like to order:".to_string(),
        String::new(),
        format!("*Product:* {}", product.name),
        format!("*Weight:* {}g", product.weight_grams),
        format!("*Quantity:* {}", quantity),
        format!("*Total: ₹{}*", quantity * product.price_rupees),
        String::new(),
        "Please contact me to complete the order. Thank you!".to_string(),
    ]
    .join("\n")
}

/// `wa.me` deep link carrying `message` URL-encoded; newlines become `%0A`.
pub fn whatsapp_url(message: &str) -> String {
    format!(
        "https://wa.me/{WHATSAPP_NUMBER}?text={}",
        js_sys::encode_uri_component(message)
    )
}

/// `mailto:` deep link with encoded subject and body.
pub fn mailto_url(subject: &str, body: &str) -> String {
    format!(
        "mailto:{CONTACT_EMAIL}?subject={}&body={}",
        js_sys::encode_uri_component(subject),
        js_sys::encode_uri_component(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, weight_grams: u32, price_rupees: u32) -> Product {
        Product {
            name: name.to_string(),
            weight_grams,
            price_rupees,
        }
    }

    fn checked(name: &str, weight: u32, price: u32, quantity: u32) -> ProductSelection {
        ProductSelection {
            product: product(name, weight, price),
            quantity,
            selected: true,
        }
    }

    fn customer() -> CustomerDetails {
        CustomerDetails {
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            address: "12 Lake Road".to_string(),
            city: "Darbhanga".to_string(),
            pincode: "846004".to_string(),
        }
    }

    #[test]
    fn test_order_message_itemizes_checked_products() {
        let rows = vec![
            checked("Roasted Makhana", 100, 150, 2),
            checked("Salted Makhana", 200, 250, 1),
        ];

        let message = order_message(&customer(), &rows, "");

        assert!(message.contains("• Roasted Makhana 100g (Qty: 2) - ₹300"));
        assert!(message.contains("• Salted Makhana 200g (Qty: 1) - ₹250"));
        assert!(message.contains("*Total: ₹550*"));
        assert!(message.ends_with("Please confirm my order. Thank you!"));
    }

    #[test]
    fn test_order_message_skips_unchecked_rows() {
        let mut rows = vec![checked("Roasted Makhana", 100, 150, 2)];
        rows.push(ProductSelection {
            selected: false,
            ..checked("Salted Makhana", 200, 250, 3)
        });

        let message = order_message(&customer(), &rows, "");

        assert!(!message.contains("Salted Makhana"));
        assert!(message.contains("*Total: ₹300*"));
    }

    #[test]
    fn test_order_message_instructions_are_optional() {
        let rows = vec![checked("Roasted Makhana", 100, 150, 1)];

        let plain = order_message(&customer(), &rows, "  ");
        assert!(!plain.contains("*Special Instructions:*"));

        let noted = order_message(&customer(), &rows, "Deliver after 6pm");
        assert!(noted.contains("*Special Instructions:* Deliver after 6pm"));
    }

    #[test]
    fn test_contact_message_uses_email_placeholder() {
        let details = ContactDetails {
            name: "Ravi".to_string(),
            phone: "9876500000".to_string(),
            email: String::new(),
            subject: "Bulk order".to_string(),
            message: "Do you ship pan-India?".to_string(),
        };

        let message = contact_message(&details);
        assert!(message.contains("*Email:* Not provided"));

        let (subject, body) = contact_email(&details);
        assert_eq!(subject, "Contact Form: Bulk order - Ravi");
        assert!(body.contains("Email: Not provided"));
        assert!(body.contains("Message: Do you ship pan-India?"));
    }

    #[test]
    fn test_quick_order_total() {
        let message = quick_order_message(&product("Peri Peri Makhana", 200, 300), 3);

        assert!(message.contains("*Product:* Peri Peri Makhana"));
        assert!(message.contains("*Weight:* 200g"));
        assert!(message.contains("*Quantity:* 3"));
        assert!(message.contains("*Total: ₹900*"));
    }
}
