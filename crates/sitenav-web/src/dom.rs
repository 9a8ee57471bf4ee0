//! web-sys page host: mount lookup, style injection, body scroll lock and
//! the ready notification

use leptos::mount::mount_to;
use leptos::prelude::*;
use sitenav_core::error::{HeaderError, Result};
use sitenav_core::styles::STYLE_MARKER;
use sitenav_core::{HeaderConfig, HeaderReady, HeaderWidget, PageHost, ScrollLock};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Document, HtmlElement, Window};

use crate::components::Header;
use crate::config::config_from_attributes;

/// Body class toggled alongside the overflow lock
pub const MENU_OPEN_CLASS: &str = "menu-open";

/// Map a thrown JS value into a host error
fn js_error(operation: &'static str) -> impl Fn(JsValue) -> HeaderError {
    move |value| {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        HeaderError::host(operation, message)
    }
}

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| HeaderError::host("window", "no global window"))
}

/// Scroll lock on `document.body`
///
/// Stateless: looks the body up on each call, so it can be used from click
/// handlers without holding DOM references.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn set_scroll_locked(&mut self, locked: bool) -> Result<()> {
        let body = window()?
            .document()
            .and_then(|d| d.body())
            .ok_or_else(|| HeaderError::host("scroll lock", "document has no body"))?;

        let style = body.style();
        let classes = body.class_list();
        if locked {
            style
                .set_property("overflow", "hidden")
                .map_err(js_error("scroll lock"))?;
            classes
                .add_1(MENU_OPEN_CLASS)
                .map_err(js_error("scroll lock"))?;
        } else {
            style
                .remove_property("overflow")
                .map_err(js_error("scroll unlock"))?;
            classes
                .remove_1(MENU_OPEN_CLASS)
                .map_err(js_error("scroll unlock"))?;
        }
        Ok(())
    }
}

/// The live browser document
pub struct BrowserPage {
    window: Window,
    document: Document,
}

impl BrowserPage {
    pub fn new() -> Result<Self> {
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| HeaderError::host("document", "window has no document"))?;
        Ok(Self { window, document })
    }

    /// Defaults overridden by `data-*` attributes on the mount element
    pub fn config(&self) -> Result<HeaderConfig> {
        let base = HeaderConfig::default();
        match self.document.get_element_by_id(&base.mount_id) {
            Some(element) => config_from_attributes(base, |name| element.get_attribute(name)),
            None => Ok(base),
        }
    }
}

impl ScrollLock for BrowserPage {
    fn set_scroll_locked(&mut self, locked: bool) -> Result<()> {
        BodyScrollLock.set_scroll_locked(locked)
    }
}

impl PageHost for BrowserPage {
    fn current_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn has_mount_point(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn inject_styles(&mut self, css: &str) -> Result<()> {
        let selector = format!("style[{}]", STYLE_MARKER);
        if let Ok(Some(_)) = self.document.query_selector(&selector) {
            return Ok(());
        }

        let head = self
            .document
            .head()
            .ok_or_else(|| HeaderError::host("inject styles", "document has no head"))?;
        let style = self
            .document
            .create_element("style")
            .map_err(js_error("inject styles"))?;
        style
            .set_attribute(STYLE_MARKER, "")
            .map_err(js_error("inject styles"))?;
        style.set_text_content(Some(css));
        head.append_child(&style)
            .map_err(js_error("inject styles"))?;
        Ok(())
    }

    fn mount(&mut self, mount_id: &str, widget: HeaderWidget) -> Result<()> {
        let parent = self
            .document
            .get_element_by_id(mount_id)
            .ok_or_else(|| HeaderError::host("mount", format!("#{} not found", mount_id)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| HeaderError::host("mount", format!("#{} is not an HTML element", mount_id)))?;

        // The header lives as long as the page
        mount_to(parent, move || {
            let widget = RwSignal::new(widget);
            view! { <Header widget /> }
        })
        .forget();
        Ok(())
    }

    fn announce(&mut self, ready: &HeaderReady) -> Result<()> {
        let detail = serde_wasm_bindgen::to_value(ready)
            .map_err(|err| HeaderError::host("announce", err.to_string()))?;

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        let event = CustomEvent::new_with_event_init_dict(&ready.event_name, &init)
            .map_err(js_error("announce"))?;

        self.window
            .dispatch_event(&event)
            .map_err(js_error("announce"))?;
        Ok(())
    }
}
