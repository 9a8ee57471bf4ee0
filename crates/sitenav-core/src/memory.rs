//! In-memory page host
//!
//! Records every mutation the widget performs. Used by tests and by the CLI
//! to pre-render a header for a given page path.

use crate::error::{HeaderError, Result};
use crate::markup::to_html;
use crate::menu::{MenuState, ScrollLock, UiEvent};
use crate::widget::{HeaderReady, HeaderWidget, PageHost};
use std::collections::HashSet;

/// A single observable change to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    StylesInjected(String),
    Mounted { mount_id: String, html: String },
    ScrollLock(bool),
    Announced(String),
}

#[derive(Debug, Default)]
pub struct MemoryPage {
    path: String,
    elements: HashSet<String>,
    mutations: Vec<Mutation>,
    body_overflow_hidden: bool,
    widget: Option<HeaderWidget>,
}

impl MemoryPage {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Declare an element id present in the page
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(id.into());
        self
    }

    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    pub fn widget(&self) -> Option<&HeaderWidget> {
        self.widget.as_ref()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.body_overflow_hidden
    }

    /// Names of fired ready notifications, in order
    pub fn announced(&self) -> Vec<&str> {
        self.mutations
            .iter()
            .filter_map(|m| match m {
                Mutation::Announced(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// HTML of the most recent mount
    pub fn mounted_html(&self) -> Option<&str> {
        self.mutations.iter().rev().find_map(|m| match m {
            Mutation::Mounted { html, .. } => Some(html.as_str()),
            _ => None,
        })
    }

    /// Injected stylesheet, if any
    pub fn styles(&self) -> Option<&str> {
        self.mutations.iter().find_map(|m| match m {
            Mutation::StylesInjected(css) => Some(css.as_str()),
            _ => None,
        })
    }

    /// Simulate a click on a bound control of the mounted header
    pub fn click(&mut self, event: UiEvent) -> Result<MenuState> {
        let mut widget = self
            .widget
            .take()
            .ok_or_else(|| HeaderError::host("click", "no header mounted"))?;
        let result = widget.handle(event, self);
        self.widget = Some(widget);
        result
    }
}

impl ScrollLock for MemoryPage {
    fn set_scroll_locked(&mut self, locked: bool) -> Result<()> {
        self.body_overflow_hidden = locked;
        self.mutations.push(Mutation::ScrollLock(locked));
        Ok(())
    }
}

impl PageHost for MemoryPage {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn has_mount_point(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    fn inject_styles(&mut self, css: &str) -> Result<()> {
        self.mutations.push(Mutation::StylesInjected(css.to_string()));
        Ok(())
    }

    fn mount(&mut self, mount_id: &str, widget: HeaderWidget) -> Result<()> {
        if !self.elements.contains(mount_id) {
            return Err(HeaderError::host("mount", format!("#{} not found", mount_id)));
        }
        self.mutations.push(Mutation::Mounted {
            mount_id: mount_id.to_string(),
            html: to_html(&widget.view()),
        });
        self.widget = Some(widget);
        Ok(())
    }

    fn announce(&mut self, ready: &HeaderReady) -> Result<()> {
        self.mutations
            .push(Mutation::Announced(ready.event_name.clone()));
        Ok(())
    }
}
