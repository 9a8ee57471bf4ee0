//! Navigation links and the fixed link sets shared by every page

use crate::active::current_page;
use crate::error::{HeaderError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A single navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible text
    pub label: String,

    /// Destination page, relative to the site root (e.g. `graph.html`)
    pub href: String,

    /// Optional glyph shown by icon-bearing layouts (dock)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Final segment of the destination (`./docs/graph.html` -> `graph.html`)
    pub fn page(&self) -> &str {
        current_page(&self.href)
    }

    /// Final segment without its `.html` suffix (`/graph.html` -> `graph`)
    pub fn stem(&self) -> &str {
        let page = self.page();
        page.strip_suffix(".html").unwrap_or(page)
    }
}

/// Built-in link sets forming the inter-page navigation contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSet {
    /// index, graph, top, about
    #[default]
    Standard,
    /// Standard plus the live page
    Live,
}

impl NavSet {
    /// Links in display order
    pub fn links(&self) -> Vec<NavLink> {
        let mut links = vec![
            NavLink::new("Index", "index.html").with_icon("⌂"),
            NavLink::new("Graphe", "graph.html").with_icon("◉"),
            NavLink::new("Top 100", "top.html").with_icon("★"),
            NavLink::new("Info", "about.html").with_icon("ℹ"),
        ];
        if *self == NavSet::Live {
            links.insert(3, NavLink::new("Live", "live.html").with_icon("●"));
        }
        links
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavSet::Standard => "standard",
            NavSet::Live => "live",
        }
    }
}

impl fmt::Display for NavSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavSet {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "" => Ok(NavSet::Standard),
            "live" => Ok(NavSet::Live),
            _ => Err(HeaderError::UnknownLinkSet {
                name: s.to_string(),
            }),
        }
    }
}

/// Reject empty sets, blank labels/destinations and duplicate destinations
pub fn validate_links(links: &[NavLink]) -> Result<()> {
    if links.is_empty() {
        return Err(HeaderError::InvalidConfig {
            message: "navigation needs at least one link".to_string(),
        });
    }

    let mut seen = HashSet::with_capacity(links.len());
    for link in links {
        if link.label.trim().is_empty() {
            return Err(HeaderError::InvalidConfig {
                message: format!("link to '{}' has an empty label", link.href),
            });
        }
        if link.href.trim().is_empty() {
            return Err(HeaderError::InvalidConfig {
                message: format!("link '{}' has an empty destination", link.label),
            });
        }
        if !seen.insert(link.href.as_str()) {
            return Err(HeaderError::DuplicateDestination {
                href: link.href.clone(),
            });
        }
    }
    Ok(())
}
