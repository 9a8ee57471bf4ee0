//! Header configuration from mount element `data-*` attributes
//!
//! ```html
//! <div id="app-header" data-variant="drawer" data-links="live"></div>
//! ```

use sitenav_core::error::Result;
use sitenav_core::HeaderConfig;

pub const ATTR_VARIANT: &str = "data-variant";
pub const ATTR_LINKS: &str = "data-links";
pub const ATTR_BRAND: &str = "data-brand";
pub const ATTR_HOME: &str = "data-home";
pub const ATTR_READY_EVENT: &str = "data-ready-event";

/// Apply attribute overrides to `base`; `get` reads one attribute by name
pub fn config_from_attributes(
    mut base: HeaderConfig,
    get: impl Fn(&str) -> Option<String>,
) -> Result<HeaderConfig> {
    if let Some(variant) = get(ATTR_VARIANT) {
        base.variant = variant.parse()?;
    }
    if let Some(links) = get(ATTR_LINKS) {
        base.links = links.parse()?;
    }
    if let Some(brand) = get(ATTR_BRAND) {
        base.brand = brand;
    }
    if let Some(home) = get(ATTR_HOME) {
        base.home = home;
    }
    if let Some(event) = get(ATTR_READY_EVENT) {
        base.ready_event = event;
    }
    base.validate()?;
    Ok(base)
}
