//! Leptos UI components

mod header;
mod nav_menu;

pub use header::Header;
pub use nav_menu::NavMenu;
