use serde::{Deserialize, Serialize};

/// A catalog product. Prices are whole rupees, weights are grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub weight_grams: u32,
    pub price_rupees: u32,
}

impl Product {
    /// Customer-facing name, e.g. "Roasted Makhana 100g".
    pub fn display_name(&self) -> String {
        format!("{} {}g", self.name, self.weight_grams)
    }
}

/// One order-form row: a product, its quantity, and whether it is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSelection {
    pub product: Product,
    pub quantity: u32,
    pub selected: bool,
}

impl ProductSelection {
    pub fn new(product: &Product) -> Self {
        Self {
            product: product.clone(),
            quantity: 1,
            selected: false,
        }
    }

    pub fn line_total(&self) -> u32 {
        self.quantity * self.product.price_rupees
    }
}

/// Order total over checked rows only. An unchecked row contributes nothing
/// no matter what its quantity says.
pub fn order_total(selections: &[ProductSelection]) -> u32 {
    selections
        .iter()
        .filter(|row| row.selected)
        .map(ProductSelection::line_total)
        .sum()
}

/// Step a quantity by `delta`, clamped to a minimum of 1.
pub fn step_quantity(quantity: u32, delta: i32) -> u32 {
    (i64::from(quantity) + i64::from(delta)).max(1) as u32
}

/// Delivery fields collected by the order form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
}

/// Fields collected by the contact form. Email is the only optional one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDetails {
    /// The email line never renders blank in outgoing payloads.
    pub fn email_or_placeholder(&self) -> &str {
        if self.email.trim().is_empty() {
            "Not provided"
        } else {
            &self.email
        }
    }
}

/// Navigable pages. Each maps to one fragment under the fragment endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Products,
    Order,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Products,
        Page::Order,
        Page::Contact,
    ];

    /// Fragment file stem for this page.
    pub fn fragment_name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Products => "products",
            Page::Order => "order",
            Page::Contact => "contact",
        }
    }

    /// Nav link text.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Us",
            Page::Products => "Products",
            Page::Order => "Order Now",
            Page::Contact => "Contact",
        }
    }
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

    fn selection(name: &str, weight: u32, price: u32, quantity: u32, selected: bool) -> ProductSelection {
        ProductSelection {
            product: product(name, weight, price),
            quantity,
            selected,
        }
    }

    #[test]
    fn test_total_counts_checked_rows_only() {
        let rows = vec![
            selection("Roasted Makhana", 100, 150, 2, true),
            selection("Salted Makhana", 200, 250, 1, true),
            selection("Peri Peri Makhana", 200, 300, 5, false),
        ];

        assert_eq!(order_total(&rows), 2 * 150 + 250);
    }

    #[test]
    fn test_unchecking_removes_contribution_without_resetting_quantity() {
        let mut rows = vec![selection("Roasted Makhana", 100, 150, 4, true)];
        assert_eq!(order_total(&rows), 600);

        rows[0].selected = false;
        assert_eq!(order_total(&rows), 0);
        assert_eq!(rows[0].quantity, 4);
    }

    #[test]
    fn test_total_of_empty_selection_is_zero() {
        assert_eq!(order_total(&[]), 0);
    }

    #[test]
    fn test_step_quantity_clamps_at_one() {
        assert_eq!(step_quantity(1, -1), 1);
        assert_eq!(step_quantity(2, -1), 1);
        assert_eq!(step_quantity(1, 1), 2);
        assert_eq!(step_quantity(7, 1), 8);
    }

    #[test]
    fn test_display_name_includes_weight() {
        assert_eq!(product("Roasted Makhana", 100, 150).display_name(), "Roasted Makhana 100g");
    }

    #[test]
    fn test_email_placeholder() {
        let mut details = ContactDetails::default();
        assert_eq!(details.email_or_placeholder(), "Not provided");

        details.email = "   ".to_string();
        assert_eq!(details.email_or_placeholder(), "Not provided");

        details.email = "someone@example.com".to_string();
        assert_eq!(details.email_or_placeholder(), "someone@example.com");
    }

    #[test]
    fn test_every_page_has_a_distinct_fragment() {
        let mut names: Vec<_> = Page::ALL.iter().map(|p| p.fragment_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Page::ALL.len());
    }
}
