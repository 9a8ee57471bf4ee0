//! sitenav-web - Browser frontend for the shared site header using Leptos

#![recursion_limit = "1024"]

pub mod components;
pub mod config;
pub mod dom;

pub use components::Header;
pub use dom::{BodyScrollLock, BrowserPage};

use leptos::logging::{log, warn};
use sitenav_core::initialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Mount the header once the DOM is ready
///
/// Pages without the mount point are left untouched.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if is_loading(&document.ready_state()) {
        let on_ready = Closure::once_into_js(run);
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            warn!("header: cannot wait for DOMContentLoaded: {:?}", err);
        }
    } else {
        run();
    }
}

/// `document.readyState` before the DOM is parsed
fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn run() {
    let result = BrowserPage::new().and_then(|mut page| {
        let config = page.config()?;
        initialize(&mut page, &config)
    });

    match result {
        Ok(Some(ready)) => log!(
            "header mounted ({}, active: {})",
            ready.presentation,
            ready.active.as_deref().unwrap_or("-")
        ),
        Ok(None) => {}
        Err(err) => warn!("header not mounted: {}", err),
    }
}
