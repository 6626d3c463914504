pub mod contact;
pub mod layout;
pub mod navigation;
pub mod order;
pub mod products;
