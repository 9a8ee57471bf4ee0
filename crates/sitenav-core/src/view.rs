//! Render the header into a structured UI description
//!
//! `HeaderView` is what adapters mount: the browser adapter turns it into
//! Leptos nodes, `markup` turns it into static HTML.

use crate::active::resolve_active;
use crate::config::HeaderConfig;
use crate::menu::MenuState;
use crate::models::{NavLink, Presentation};
use serde::Serialize;

/// Logo link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brand {
    pub text: String,
    pub href: String,
}

/// Nav entry with its active flag resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub link: NavLink,
    pub active: bool,
}

impl NavItem {
    pub fn class(&self) -> &'static str {
        if self.active {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub brand: Brand,
    pub items: Vec<NavItem>,
    pub presentation: Presentation,
    pub menu_open: bool,
}

impl HeaderView {
    pub fn show_toggle(&self) -> bool {
        self.presentation.has_toggle()
    }

    pub fn show_backdrop(&self) -> bool {
        self.presentation.has_backdrop()
    }

    pub fn active_item(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| item.active)
    }

    pub fn root_class(&self) -> String {
        format!("app-header {}", self.presentation.modifier_class())
    }

    pub fn nav_class(&self) -> &'static str {
        if self.menu_open {
            "header-nav open"
        } else {
            "header-nav"
        }
    }

    pub fn toggle_class(&self) -> &'static str {
        if self.menu_open {
            "mobile-menu-btn active"
        } else {
            "mobile-menu-btn"
        }
    }

    pub fn backdrop_class(&self) -> &'static str {
        if self.menu_open {
            "menu-backdrop active"
        } else {
            "menu-backdrop"
        }
    }
}

/// Build the view for the page at `path`
pub fn render(config: &HeaderConfig, path: &str, menu: MenuState) -> HeaderView {
    let links = config.nav_links();
    let active = resolve_active(path, &links);

    let items = links
        .into_iter()
        .enumerate()
        .map(|(index, link)| NavItem {
            link,
            active: Some(index) == active,
        })
        .collect();

    HeaderView {
        brand: Brand {
            text: config.brand.clone(),
            href: config.home.clone(),
        },
        items,
        presentation: config.variant,
        menu_open: menu.is_open() && config.variant.has_toggle(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NavSet;

    fn active_hrefs(view: &HeaderView) -> Vec<&str> {
        view.items
            .iter()
            .filter(|i| i.active)
            .map(|i| i.link.href.as_str())
            .collect()
    }

    #[test]
    fn test_exactly_one_active_for_each_destination() {
        let config = HeaderConfig::default();
        for link in config.nav_links() {
            let view = render(&config, &format!("/{}", link.href), MenuState::Closed);
            assert_eq!(active_hrefs(&view), vec![link.href.as_str()]);
        }
    }

    #[test]
    fn test_root_marks_home_active() {
        let view = render(&HeaderConfig::default(), "/", MenuState::Closed);
        assert_eq!(active_hrefs(&view), vec!["index.html"]);
        assert_eq!(view.active_item().unwrap().class(), "nav-link active");
    }

    #[test]
    fn test_unknown_page_has_no_active() {
        let view = render(&HeaderConfig::default(), "/404.html", MenuState::Closed);
        assert!(view.active_item().is_none());
    }

    #[test]
    fn test_menu_flag_ignored_without_toggle() {
        let config = HeaderConfig::default().with_variant(Presentation::Dock);
        let view = render(&config, "/", MenuState::Open);
        assert!(!view.menu_open);
        assert!(!view.show_toggle());
    }

    #[test]
    fn test_open_classes() {
        let config = HeaderConfig::default().with_variant(Presentation::Sheet);
        let view = render(&config, "/", MenuState::Open);
        assert_eq!(view.nav_class(), "header-nav open");
        assert_eq!(view.toggle_class(), "mobile-menu-btn active");
        assert_eq!(view.backdrop_class(), "menu-backdrop active");
        assert_eq!(view.root_class(), "app-header header--sheet");

        let closed = render(&config, "/", MenuState::Closed);
        assert_eq!(closed.nav_class(), "header-nav");
    }

    #[test]
    fn test_live_set_renders_five_items() {
        let config = HeaderConfig::default().with_links(NavSet::Live);
        let view = render(&config, "/live.html", MenuState::Closed);
        assert_eq!(view.items.len(), 5);
        assert_eq!(active_hrefs(&view), vec!["live.html"]);
    }
}
