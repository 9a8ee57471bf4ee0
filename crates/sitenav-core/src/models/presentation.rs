//! Mobile presentation variants
//!
//! Every variant shares the same menu logic; they differ only in which
//! controls exist on narrow viewports.

use crate::error::{HeaderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout used by the header on narrow viewports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Desktop bar only, links stay inline
    Bar,
    /// Fullscreen overlay menu behind a burger button
    Overlay,
    /// Bottom tab dock, always visible, no toggle
    Dock,
    /// Bottom sheet sliding up over a dismiss backdrop (default)
    #[default]
    Sheet,
    /// Side drawer sliding in over a dismiss backdrop
    Drawer,
}

impl Presentation {
    pub const ALL: [Presentation; 5] = [
        Presentation::Bar,
        Presentation::Overlay,
        Presentation::Dock,
        Presentation::Sheet,
        Presentation::Drawer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Presentation::Bar => "bar",
            Presentation::Overlay => "overlay",
            Presentation::Dock => "dock",
            Presentation::Sheet => "sheet",
            Presentation::Drawer => "drawer",
        }
    }

    /// Whether a burger toggle is rendered
    pub fn has_toggle(&self) -> bool {
        matches!(
            self,
            Presentation::Overlay | Presentation::Sheet | Presentation::Drawer
        )
    }

    /// Whether an open menu is dismissable through a backdrop
    pub fn has_backdrop(&self) -> bool {
        matches!(self, Presentation::Sheet | Presentation::Drawer)
    }

    /// Whether nav entries carry their icon glyph
    pub fn shows_icons(&self) -> bool {
        matches!(self, Presentation::Dock)
    }

    /// Whether opening the menu locks page scroll
    pub fn locks_scroll(&self) -> bool {
        self.has_toggle()
    }

    /// Modifier class placed on the header root (`header--sheet`)
    pub fn modifier_class(&self) -> String {
        format!("header--{}", self.as_str())
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Presentation {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        if name.is_empty() {
            return Ok(Presentation::default());
        }
        Presentation::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or_else(|| HeaderError::UnknownVariant {
                name: s.to_string(),
            })
    }
}
