pub mod product_card;

pub use product_card::{ProductCard, ProductGrid};
