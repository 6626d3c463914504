pub mod use_menu_state;
pub mod use_navigation;

pub use use_menu_state::{use_menu_state, MenuState};
pub use use_navigation::{use_navigation, NavState};
