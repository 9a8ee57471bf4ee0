//! CLI commands for the shared header
//!
//! Provides pre-rendering, the navigation contract listing and the static
//! site check, all on top of sitenav-core.

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use regex::Regex;
use serde::Serialize;
use sitenav_core::memory::MemoryPage;
use sitenav_core::styles::{stylesheet, STYLE_MARKER};
use sitenav_core::{initialize, HeaderConfig, NavLink};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug)]
pub enum CliError {
    /// Destination pages required by the navigation are missing
    ContractViolation {
        site: PathBuf,
        missing: Vec<String>,
    },
    NotADirectory {
        path: PathBuf,
    },
    Core(sitenav_core::HeaderError),
    Other(anyhow::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::ContractViolation { site, missing } => {
                write!(
                    f,
                    "{} is missing {} navigation page(s): {}",
                    site.display(),
                    missing.len(),
                    missing.join(", ")
                )
            }
            CliError::NotADirectory { path } => {
                write!(f, "Not a site directory: {}", path.display())
            }
            CliError::Core(e) => write!(f, "{}", e),
            CliError::Other(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<sitenav_core::HeaderError> for CliError {
    fn from(e: sitenav_core::HeaderError) -> Self {
        CliError::Core(e)
    }
}

impl From<anyhow::Error> for CliError {
    fn from(e: anyhow::Error) -> Self {
        CliError::Other(e)
    }
}

// ============================================================================
// Render
// ============================================================================

/// Pre-render the header fragment for the page at `path`
///
/// Runs the same initialization as the browser against an in-memory page, so
/// the output matches what the live widget mounts.
pub fn render_header(config: &HeaderConfig, path: &str, with_styles: bool) -> Result<String, CliError> {
    let mut page = MemoryPage::new(path).with_element(config.mount_id.clone());
    initialize(&mut page, config)?;

    let html = page
        .mounted_html()
        .context("header was not mounted")?
        .to_string();

    if with_styles {
        Ok(format!(
            "<style {}>\n{}</style>\n{}",
            STYLE_MARKER,
            stylesheet(config.variant),
            html
        ))
    } else {
        Ok(html)
    }
}

// ============================================================================
// Links
// ============================================================================

/// Format the navigation contract as table (human) or JSON
pub fn format_links(links: &[NavLink], json: bool, no_color: bool) -> String {
    if json {
        return serde_json::to_string_pretty(links).unwrap_or_else(|_| "[]".to_string());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(vec!["#", "Label", "Destination", "Icon"]);
    } else {
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Label").fg(Color::Cyan),
            Cell::new("Destination").fg(Color::Cyan),
            Cell::new("Icon").fg(Color::Cyan),
        ]);
    }

    for (index, link) in links.iter().enumerate() {
        let position = (index + 1).to_string();
        let icon = link.icon.as_deref().unwrap_or("-");
        table.add_row(Row::from(vec![
            position.as_str(),
            link.label.as_str(),
            link.href.as_str(),
            icon,
        ]));
    }

    table.to_string()
}

// ============================================================================
// Site Check
// ============================================================================

/// Result of checking a static site against the navigation contract
#[derive(Debug, Default, Serialize)]
pub struct SiteReport {
    /// Destinations present in the site
    pub present: Vec<String>,
    /// Destinations with no matching page
    pub missing: Vec<String>,
    /// HTML pages that carry the mount point
    pub mounted_pages: Vec<String>,
    /// HTML pages without the mount point (header will not appear)
    pub unmounted_pages: Vec<String>,
}

impl SiteReport {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }
}

fn mount_pattern(mount_id: &str) -> Result<Regex> {
    Regex::new(&format!(r#"id\s*=\s*["']{}["']"#, regex::escape(mount_id)))
        .context("Failed to build mount point pattern")
}

/// Scan `site` for the pages the navigation links to and for mount points
pub fn check_site(site: &Path, config: &HeaderConfig) -> Result<SiteReport, CliError> {
    if !site.is_dir() {
        return Err(CliError::NotADirectory {
            path: site.to_path_buf(),
        });
    }

    let mut report = SiteReport::default();
    for link in config.nav_links() {
        if site.join(site_relative(&link.href)).is_file() {
            report.present.push(link.href);
        } else {
            report.missing.push(link.href);
        }
    }

    let pattern = mount_pattern(&config.mount_id)?;
    for entry in WalkDir::new(site)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "html"))
    {
        let path = entry.path();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let relative = path
            .strip_prefix(site)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        if pattern.is_match(&content) {
            report.mounted_pages.push(relative);
        } else {
            tracing::debug!(page = %relative, "no mount point");
            report.unmounted_pages.push(relative);
        }
    }

    Ok(report)
}

/// Href as a path under the site root: no query, fragment, `/` or `./` prefix
fn site_relative(href: &str) -> &str {
    let path = href.split(['?', '#']).next().unwrap_or_default();
    let path = path.trim_start_matches('/');
    path.strip_prefix("./").unwrap_or(path)
}

/// Format a site report (human or JSON)
pub fn format_report(report: &SiteReport, json: bool) -> String {
    if json {
        return serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
    }

    let mut lines = vec![];
    for href in &report.present {
        lines.push(format!("  ok       {}", href));
    }
    for href in &report.missing {
        lines.push(format!("  missing  {}", href));
    }
    lines.push(format!(
        "Pages with header mount:    {}",
        report.mounted_pages.len()
    ));
    if !report.unmounted_pages.is_empty() {
        lines.push(format!(
            "Pages without header mount: {}",
            report.unmounted_pages.join(", ")
        ));
    }
    lines.join("\n")
}

// ============================================================================
// Tests
// ============================================================================
