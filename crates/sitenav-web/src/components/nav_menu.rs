//! Navigation list rendered inside the header

use leptos::prelude::*;
use sitenav_core::markup::NAV_ID;
use sitenav_core::NavItem;

/// Navigation links in display order, active entry marked
#[component]
pub fn NavMenu(
    items: Vec<NavItem>,
    /// Render icon glyphs before labels (dock layout)
    show_icons: bool,
    menu_open: Signal<bool>,
    /// Called with the entry index when a link is followed
    on_select: impl Fn(usize) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <nav
            class="header-nav"
            class:open=move || menu_open.get()
            id=NAV_ID
            aria-label="Main navigation"
        >
            {items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let icon = if show_icons { item.link.icon.clone() } else { None };
                    view! {
                        <a
                            class=item.class()
                            href=item.link.href.clone()
                            aria-current=item.active.then_some("page")
                            on:click=move |_| on_select(index)
                        >
                            {icon.map(|glyph| view! {
                                <span class="nav-icon" aria-hidden="true">{glyph}</span>
                            })}
                            <span class="nav-label">{item.link.label.clone()}</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
