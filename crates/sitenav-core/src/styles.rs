//! Stylesheet injected alongside the header

use crate::models::Presentation;

/// Marker attribute on the injected `<style>` element, used to avoid duplicates
pub const STYLE_MARKER: &str = "data-sitenav";

const BASE: &str = r#"
.app-header {
    position: fixed;
    top: 24px;
    left: 50%;
    transform: translateX(-50%);
    width: calc(100% - 48px);
    max-width: 1200px;
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 12px 0 32px;
    z-index: 1000;
    background: rgba(255, 255, 255, 0.7);
    backdrop-filter: blur(20px);
    border-radius: 100px;
}
.header-logo {
    font-family: 'Inter', sans-serif;
    font-size: 14px;
    font-weight: 700;
    color: #111;
    text-decoration: none;
}
.header-nav {
    display: flex;
    gap: 6px;
    padding: 4px;
    border-radius: 16px;
}
.nav-link {
    font-family: 'Inter', sans-serif;
    font-size: 13px;
    color: #666;
    text-decoration: none;
    padding: 8px 16px;
    border-radius: 12px;
}
.nav-link.active {
    color: #fff;
    background: #111;
    font-weight: 600;
}
.nav-icon { display: none; }
.mobile-menu-btn {
    display: none;
    background: none;
    border: none;
    cursor: pointer;
}
.menu-backdrop { display: none; }
"#;

const OVERLAY: &str = r#"
@media (max-width: 768px) {
    .app-header { top: 0; left: 0; width: 100%; max-width: 100%; transform: none; border-radius: 0; }
    .mobile-menu-btn { display: flex; flex-direction: column; gap: 5px; z-index: 2002; }
    .burger-line { width: 20px; height: 2px; background: #111; }
    .header-nav {
        position: fixed; inset: 0;
        flex-direction: column; justify-content: center; align-items: center;
        background: #fff;
        opacity: 0; pointer-events: none;
        z-index: 2001;
    }
    .header-nav.open { opacity: 1; pointer-events: all; }
    .nav-link { font-size: 36px; background: transparent; }
}
"#;

const SHEET: &str = r#"
@media (max-width: 768px) {
    .app-header { top: 12px; left: 12px; width: calc(100% - 24px); max-width: calc(100% - 24px); transform: none; }
    .mobile-menu-btn { display: flex; flex-direction: column; gap: 4px; z-index: 2002; }
    .burger-line { width: 16px; height: 2px; background: #111; }
    .header-nav {
        position: fixed; left: 0; right: 0; bottom: 0;
        flex-direction: column;
        border-top-left-radius: 24px; border-top-right-radius: 24px;
        background: rgba(255, 255, 255, 0.95);
        transform: translateY(100%);
        z-index: 2001;
    }
    .header-nav.open { transform: translateY(0); }
    .menu-backdrop { display: block; position: fixed; inset: 0; opacity: 0; pointer-events: none; z-index: 2000; }
    .menu-backdrop.active { opacity: 1; pointer-events: all; background: rgba(0, 0, 0, 0.3); }
}
"#;

const DRAWER: &str = r#"
@media (max-width: 768px) {
    .app-header { top: 0; left: 0; width: 100%; max-width: 100%; transform: none; border-radius: 0; }
    .mobile-menu-btn { display: flex; flex-direction: column; gap: 5px; z-index: 2002; }
    .burger-line { width: 20px; height: 2px; background: #111; }
    .header-nav {
        position: fixed; top: 0; right: 0; bottom: 0;
        width: min(80vw, 320px);
        flex-direction: column;
        background: #fff;
        transform: translateX(100%);
        z-index: 2001;
    }
    .header-nav.open { transform: translateX(0); }
    .menu-backdrop { display: block; position: fixed; inset: 0; opacity: 0; pointer-events: none; z-index: 2000; }
    .menu-backdrop.active { opacity: 1; pointer-events: all; background: rgba(0, 0, 0, 0.3); }
}
"#;

const DOCK: &str = r#"
@media (max-width: 768px) {
    .app-header { top: 0; left: 0; width: 100%; max-width: 100%; transform: none; border-radius: 0; }
    .header-nav {
        position: fixed; left: 12px; right: 12px; bottom: 12px;
        justify-content: space-around;
        background: rgba(255, 255, 255, 0.95);
        z-index: 2001;
    }
    .nav-link { flex-direction: column; align-items: center; font-size: 11px; padding: 6px 8px; }
    .nav-icon { display: block; font-size: 18px; }
}
"#;

/// Base rules plus the variant's narrow-viewport block
pub fn stylesheet(presentation: Presentation) -> String {
    let variant = match presentation {
        Presentation::Bar => "",
        Presentation::Overlay => OVERLAY,
        Presentation::Sheet => SHEET,
        Presentation::Drawer => DRAWER,
        Presentation::Dock => DOCK,
    };
    let mut css = String::with_capacity(BASE.len() + variant.len());
    css.push_str(BASE.trim_start());
    css.push_str(variant);
    css
}
