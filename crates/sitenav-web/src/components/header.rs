//! Header component

use leptos::logging::warn;
use leptos::prelude::*;
use sitenav_core::markup::NAV_ID;
use sitenav_core::{HeaderView, HeaderWidget, UiEvent};

use crate::components::NavMenu;
use crate::dom::BodyScrollLock;

/// Header with logo, burger toggle, navigation and dismiss backdrop
///
/// The widget signal is the single owner of menu state; every control
/// dispatches a `UiEvent` into it.
#[component]
pub fn Header(widget: RwSignal<HeaderWidget>) -> impl IntoView {
    // Links, brand and active flags are fixed for the page's lifetime
    let initial = widget.with_untracked(|w| w.view());
    let root_class = initial.root_class();
    let show_toggle = initial.show_toggle();
    let show_backdrop = initial.show_backdrop();
    let show_icons = initial.presentation.shows_icons();
    let HeaderView { brand, items, .. } = initial;

    let menu_open = move || widget.with(|w| w.menu_state().is_open());

    let dispatch = move |event: UiEvent| {
        widget.update(|w| {
            if let Err(err) = w.handle(event, &mut BodyScrollLock) {
                warn!("header: {:?} failed: {}", event, err);
            }
        });
    };

    view! {
        <div class=root_class>
            <a class="header-logo" href=brand.href>
                {brand.text}
            </a>

            {show_toggle.then(|| view! {
                <button
                    class="mobile-menu-btn"
                    class:active=menu_open
                    type="button"
                    aria-label="Menu"
                    aria-controls=NAV_ID
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| dispatch(UiEvent::ToggleClicked)
                >
                    <span class="burger-line"></span>
                    <span class="burger-line"></span>
                    <span class="burger-line"></span>
                </button>
            })}

            <NavMenu
                items
                show_icons
                menu_open=Signal::derive(menu_open)
                on_select=move |index: usize| dispatch(UiEvent::LinkClicked(index))
            />
        </div>

        // Backdrop overlay for mobile
        {show_backdrop.then(|| view! {
            <div
                class="menu-backdrop"
                class:active=menu_open
                on:click=move |_| dispatch(UiEvent::BackdropClicked)
            ></div>
        })}
    }
}
