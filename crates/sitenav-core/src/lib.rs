//! sitenav-core - Core library for the shared site header
//!
//! Navigation model, active-link resolution, menu state, rendering to a
//! structured view, and the `PageHost` contract adapters implement.
//! No DOM or async runtime here, so the crate builds for both native and WASM.

pub mod active;
pub mod config;
pub mod error;
pub mod markup;
pub mod memory;
pub mod menu;
pub mod models;
pub mod styles;
pub mod view;
pub mod widget;

pub use active::{current_page, resolve_active};
pub use config::HeaderConfig;
pub use error::HeaderError;
pub use memory::MemoryPage;
pub use menu::{MenuController, MenuState, ScrollLock, UiEvent};
pub use models::{NavLink, NavSet, Presentation};
pub use view::{render, HeaderView, NavItem};
pub use widget::{initialize, HeaderReady, HeaderWidget, PageHost};
