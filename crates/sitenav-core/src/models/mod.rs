//! Data models for the header widget

pub mod nav;
pub mod presentation;

pub use nav::{NavLink, NavSet};
pub use presentation::Presentation;
