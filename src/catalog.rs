//! Product catalog, parsed once from the bundled JSON asset.

use std::sync::OnceLock;

use dioxus::logger::tracing::error;

use crate::types::Product;

static PRODUCTS_JSON: &str = include_str!("../assets/products.json");

static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();

/// All catalog products. A malformed catalog is a packaging error: it is
/// reported once and the storefront renders without products rather than
/// carrying bad numbers into order arithmetic.
pub fn products() -> &'static [Product] {
    CATALOG.get_or_init(|| match serde_json::from_str(PRODUCTS_JSON) {
        Ok(products) => products,
        Err(err) => {
            error!("product catalog is invalid JSON: {err}");
            Vec::new()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses() {
        assert!(!products().is_empty());
    }

    #[test]
    fn test_catalog_carries_the_core_lineup() {
        let roasted = products()
            .iter()
            .find(|p| p.display_name() == "Roasted Makhana 100g")
            .expect("roasted makhana missing");
        assert_eq!(roasted.price_rupees, 150);

        let salted = products()
            .iter()
            .find(|p| p.display_name() == "Salted Makhana 200g")
            .expect("salted makhana missing");
        assert_eq!(salted.price_rupees, 250);
    }
}
