//! End-to-end header behavior through the in-memory page host

use sitenav_core::memory::Mutation;
use sitenav_core::{
    initialize, HeaderConfig, MemoryPage, MenuState, NavSet, Presentation, UiEvent,
};

fn mount(config: &HeaderConfig, path: &str) -> MemoryPage {
    let mut page = MemoryPage::new(path).with_element(config.mount_id.clone());
    initialize(&mut page, config)
        .expect("initialize")
        .expect("mount point present");
    page
}

#[test]
fn test_each_destination_active_exactly_once() {
    let config = HeaderConfig::default();
    for link in config.nav_links() {
        let page = mount(&config, &format!("/site/{}", link.href));
        let view = page.widget().unwrap().view();

        let active: Vec<_> = view.items.iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1, "path {}", link.href);
        assert_eq!(active[0].link.href, link.href);
    }
}

#[test]
fn test_root_path_activates_home() {
    for path in ["", "/", "/episteme/"] {
        let page = mount(&HeaderConfig::default(), path);
        let view = page.widget().unwrap().view();
        assert!(view.items[0].active, "path {:?}", path);
        assert!(view.items[1..].iter().all(|i| !i.active));
    }
}

#[test]
fn test_even_toggles_restore_closed_and_unlocked() {
    for variant in Presentation::ALL.into_iter().filter(|p| p.has_toggle()) {
        let config = HeaderConfig::default().with_variant(variant);
        let mut page = mount(&config, "/");

        for n in 1..=6 {
            page.click(UiEvent::ToggleClicked).unwrap();
            let expected_open = n % 2 == 1;
            assert_eq!(page.widget().unwrap().menu_state().is_open(), expected_open);
            assert_eq!(page.is_scroll_locked(), expected_open);
        }

        assert_eq!(page.widget().unwrap().menu_state(), MenuState::Closed);
        assert!(!page.is_scroll_locked());
    }
}

#[test]
fn test_backdrop_click_dismisses_sheet() {
    let config = HeaderConfig::default().with_variant(Presentation::Sheet);
    let mut page = mount(&config, "/graph.html");

    page.click(UiEvent::ToggleClicked).unwrap();
    assert!(page.widget().unwrap().backdrop_visible());

    page.click(UiEvent::BackdropClicked).unwrap();
    assert!(!page.widget().unwrap().backdrop_visible());
    assert!(!page.is_scroll_locked());
}

#[test]
fn test_nav_click_closes_and_restores_scroll() {
    let config = HeaderConfig::default().with_variant(Presentation::Overlay);
    let mut page = mount(&config, "/");

    page.click(UiEvent::ToggleClicked).unwrap();
    page.click(UiEvent::LinkClicked(2)).unwrap();

    assert_eq!(page.widget().unwrap().menu_state(), MenuState::Closed);
    assert!(!page.is_scroll_locked());
    let locks: Vec<_> = page
        .mutations()
        .iter()
        .filter_map(|m| match m {
            Mutation::ScrollLock(locked) => Some(*locked),
            _ => None,
        })
        .collect();
    assert_eq!(locks, vec![true, false]);
}

#[test]
fn test_absent_mount_point_no_mutation() {
    for variant in Presentation::ALL {
        let mut page = MemoryPage::new("/index.html").with_element("content");
        let config = HeaderConfig::default().with_variant(variant);

        assert!(initialize(&mut page, &config).unwrap().is_none());
        assert!(page.mutations().is_empty());
        assert!(page.announced().is_empty());
    }
}

#[test]
fn test_destinations_fixed_order() {
    let page = mount(&HeaderConfig::default(), "/");
    let hrefs: Vec<_> = page
        .widget()
        .unwrap()
        .view()
        .items
        .iter()
        .map(|i| i.link.href.clone())
        .collect();
    assert_eq!(hrefs, ["index.html", "graph.html", "top.html", "about.html"]);

    let html = page.mounted_html().unwrap();
    for href in &hrefs {
        assert_eq!(
            html.matches(&format!("class=\"nav-link{}\" href=\"{}\"", active_suffix(href), href))
                .count(),
            1
        );
    }
}

fn active_suffix(href: &str) -> &'static str {
    if href == "index.html" {
        " active"
    } else {
        ""
    }
}

#[test]
fn test_live_variant_announces_once() {
    let config = HeaderConfig::default().with_links(NavSet::Live);
    let page = mount(&config, "/live.html");

    assert_eq!(page.announced(), vec!["headerLoaded"]);
    let view = page.widget().unwrap().view();
    assert_eq!(view.active_item().unwrap().link.href, "live.html");
}
