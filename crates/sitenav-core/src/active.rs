//! Active-link resolution from the current document path

use crate::models::NavLink;

/// Final path segment of a location path, ignoring query and fragment
///
/// `/site/graph.html?q=1#top` -> `graph.html`, `/` -> ``
pub fn current_page(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/').next().unwrap_or_default()
}

/// Index of the link matching `path`, if any
///
/// An empty final segment (site root, trailing slash) selects the first link.
/// A bare segment such as `graph` also matches `graph.html`. Hrefs are
/// compared by their own final segment, so `/about.html` and `./about.html`
/// both match `about.html`.
pub fn resolve_active(path: &str, links: &[NavLink]) -> Option<usize> {
    let page = current_page(path);
    if page.is_empty() {
        return if links.is_empty() { None } else { Some(0) };
    }

    links
        .iter()
        .position(|link| link.page() == page)
        .or_else(|| {
            if page.contains('.') {
                return None;
            }
            links.iter().position(|link| link.stem() == page)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NavSet;

    #[test]
    fn test_current_page() {
        assert_eq!(current_page("/graph.html"), "graph.html");
        assert_eq!(current_page("/a/b/top.html?x=1#frag"), "top.html");
        assert_eq!(current_page("/"), "");
        assert_eq!(current_page(""), "");
        assert_eq!(current_page("about.html"), "about.html");
    }

    #[test]
    fn test_resolve_exact_match() {
        let links = NavSet::Standard.links();
        assert_eq!(resolve_active("/top.html", &links), Some(2));
        assert_eq!(resolve_active("/deep/dir/about.html", &links), Some(3));
    }

    #[test]
    fn test_resolve_root_defaults_to_first() {
        let links = NavSet::Standard.links();
        assert_eq!(resolve_active("/", &links), Some(0));
        assert_eq!(resolve_active("", &links), Some(0));
        assert_eq!(resolve_active("/docs/", &links), Some(0));
    }

    #[test]
    fn test_resolve_pretty_url() {
        let links = NavSet::Live.links();
        assert_eq!(resolve_active("/live", &links), Some(3));
        assert_eq!(resolve_active("/graph", &links), Some(1));
    }

    #[test]
    fn test_resolve_unknown_page() {
        let links = NavSet::Standard.links();
        assert_eq!(resolve_active("/missing.html", &links), None);
        // live page is not part of the standard contract
        assert_eq!(resolve_active("/live.html", &links), None);
        assert_eq!(resolve_active("/", &[]), None);
    }

    #[test]
    fn test_resolve_compares_href_final_segment() {
        let links = vec![
            NavLink::new("Home", "/index.html"),
            NavLink::new("Top", "./top.html"),
            NavLink::new("About", "docs/about.html"),
        ];
        assert_eq!(resolve_active("/index.html", &links), Some(0));
        assert_eq!(resolve_active("/top.html", &links), Some(1));
        assert_eq!(resolve_active("/about.html", &links), Some(2));
        assert_eq!(resolve_active("/site/about", &links), Some(2));
    }

    #[test]
    fn test_resolve_does_not_strip_foreign_extension() {
        let links = NavSet::Standard.links();
        assert_eq!(resolve_active("/graph.php", &links), None);
    }
}
