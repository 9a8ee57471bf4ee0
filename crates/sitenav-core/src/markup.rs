//! Static HTML serialization of a `HeaderView`
//!
//! Produces the same element/class structure the browser adapter mounts, so
//! pre-rendered pages and live pages share one stylesheet.

use crate::view::{HeaderView, NavItem};
use std::fmt::Write;

pub const NAV_ID: &str = "header-nav";

/// Escape text for element content and double-quoted attribute values
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize the header fragment placed inside the mount point
pub fn to_html(view: &HeaderView) -> String {
    let mut html = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(html, r#"<div class="{}">"#, view.root_class());
    let _ = writeln!(
        html,
        r#"  <a class="header-logo" href="{}">{}</a>"#,
        escape(&view.brand.href),
        escape(&view.brand.text)
    );

    if view.show_toggle() {
        let _ = writeln!(
            html,
            r#"  <button class="{}" type="button" aria-label="Menu" aria-controls="{}" aria-expanded="{}">"#,
            view.toggle_class(),
            NAV_ID,
            view.menu_open
        );
        for _ in 0..3 {
            html.push_str("    <span class=\"burger-line\"></span>\n");
        }
        html.push_str("  </button>\n");
    }

    let _ = writeln!(
        html,
        r#"  <nav class="{}" id="{}" aria-label="Main navigation">"#,
        view.nav_class(),
        NAV_ID
    );
    for item in &view.items {
        html.push_str("    ");
        html.push_str(&nav_item(item, view.presentation.shows_icons()));
        html.push('\n');
    }
    html.push_str("  </nav>\n");
    html.push_str("</div>\n");

    if view.show_backdrop() {
        let _ = writeln!(html, r#"<div class="{}"></div>"#, view.backdrop_class());
    }

    html
}

fn nav_item(item: &NavItem, with_icon: bool) -> String {
    let current = if item.active {
        r#" aria-current="page""#
    } else {
        ""
    };
    let icon = match (&item.link.icon, with_icon) {
        (Some(glyph), true) => format!(
            r#"<span class="nav-icon" aria-hidden="true">{}</span>"#,
            escape(glyph)
        ),
        _ => String::new(),
    };
    format!(
        r#"<a class="{}" href="{}"{}>{}<span class="nav-label">{}</span></a>"#,
        item.class(),
        escape(&item.link.href),
        current,
        icon,
        escape(&item.link.label)
    )
}
