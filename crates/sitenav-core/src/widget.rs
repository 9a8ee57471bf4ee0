//! Header widget lifecycle: mount contract, initialization, event handling
//!
//! The widget never touches a page directly. Everything goes through a
//! `PageHost`, implemented with web-sys in the browser and in memory for
//! tests and pre-rendering.

use crate::config::HeaderConfig;
use crate::error::Result;
use crate::menu::{MenuController, MenuState, ScrollLock, UiEvent};
use crate::models::Presentation;
use crate::styles::stylesheet;
use crate::view::{render, HeaderView};
use serde::Serialize;
use tracing::{debug, info};

/// Page the header is mounted into
pub trait PageHost: ScrollLock {
    /// Location path of the current document (`window.location.pathname`)
    fn current_path(&self) -> String;

    fn has_mount_point(&self, id: &str) -> bool;

    fn inject_styles(&mut self, css: &str) -> Result<()>;

    /// Hand the widget over to the page; the host owns it from here on
    fn mount(&mut self, mount_id: &str, widget: HeaderWidget) -> Result<()>;

    /// Fire the page-wide completion notification
    fn announce(&mut self, ready: &HeaderReady) -> Result<()>;
}

/// Completion payload delivered with the ready notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderReady {
    #[serde(skip)]
    pub event_name: String,
    pub active: Option<String>,
    pub presentation: Presentation,
    pub link_count: usize,
}

/// One mounted header: configuration, current page and menu state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderWidget {
    config: HeaderConfig,
    path: String,
    menu: MenuController,
}

impl HeaderWidget {
    pub fn new(config: HeaderConfig, path: impl Into<String>) -> Self {
        let menu = MenuController::new(config.variant);
        Self {
            config,
            path: path.into(),
            menu,
        }
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    pub fn scroll_locked(&self) -> bool {
        self.menu.scroll_locked()
    }

    pub fn backdrop_visible(&self) -> bool {
        self.menu.backdrop_visible()
    }

    /// Current UI description
    pub fn view(&self) -> HeaderView {
        render(&self.config, &self.path, self.menu.state())
    }

    pub fn open<L: ScrollLock + ?Sized>(&mut self, lock: &mut L) -> Result<MenuState> {
        self.menu.open(lock)
    }

    pub fn close<L: ScrollLock + ?Sized>(&mut self, lock: &mut L) -> Result<MenuState> {
        self.menu.close(lock)
    }

    pub fn toggle<L: ScrollLock + ?Sized>(&mut self, lock: &mut L) -> Result<MenuState> {
        self.menu.toggle(lock)
    }

    pub fn handle<L: ScrollLock + ?Sized>(
        &mut self,
        event: UiEvent,
        lock: &mut L,
    ) -> Result<MenuState> {
        self.menu.handle(event, lock)
    }

    pub fn ready_payload(&self) -> HeaderReady {
        let view = self.view();
        HeaderReady {
            event_name: self.config.ready_event.clone(),
            active: view.active_item().map(|item| item.link.href.clone()),
            presentation: view.presentation,
            link_count: view.items.len(),
        }
    }
}

/// Build and mount the header when the page provides a mount point
///
/// Returns `Ok(None)` without touching the page when the mount point is
/// absent. Configuration is validated before any mutation.
pub fn initialize<H: PageHost + ?Sized>(
    host: &mut H,
    config: &HeaderConfig,
) -> Result<Option<HeaderReady>> {
    if !host.has_mount_point(&config.mount_id) {
        debug!(mount_id = %config.mount_id, "mount point absent, header skipped");
        return Ok(None);
    }
    config.validate()?;

    let widget = HeaderWidget::new(config.clone(), host.current_path());
    let ready = widget.ready_payload();

    host.inject_styles(&stylesheet(config.variant))?;
    host.mount(&config.mount_id, widget)?;
    host.announce(&ready)?;

    info!(
        mount_id = %config.mount_id,
        presentation = %config.variant,
        active = ready.active.as_deref().unwrap_or("-"),
        "header mounted"
    );
    Ok(Some(ready))
}
