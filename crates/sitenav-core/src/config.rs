//! Header configuration
//!
//! Defaults reproduce the site's shared header: brand, home link, the
//! `app-header` mount point and the `headerLoaded` completion event.

use crate::error::{HeaderError, Result};
use crate::models::nav::validate_links;
use crate::models::{NavLink, NavSet, Presentation};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BRAND: &str = "EPISTEME NETWORK";
pub const DEFAULT_HOME: &str = "index.html";
pub const DEFAULT_MOUNT_ID: &str = "app-header";
pub const DEFAULT_READY_EVENT: &str = "headerLoaded";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Logo text
    pub brand: String,

    /// Logo destination
    pub home: String,

    /// Id of the container element the header is mounted into
    pub mount_id: String,

    /// Name of the window event fired once the header exists
    pub ready_event: String,

    /// Narrow-viewport layout
    pub variant: Presentation,

    /// Built-in link set, ignored when `custom_links` is non-empty
    pub links: NavSet,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_links: Vec<NavLink>,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            home: DEFAULT_HOME.to_string(),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            ready_event: DEFAULT_READY_EVENT.to_string(),
            variant: Presentation::default(),
            links: NavSet::default(),
            custom_links: Vec::new(),
        }
    }
}

impl HeaderConfig {
    pub fn with_variant(mut self, variant: Presentation) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_links(mut self, links: NavSet) -> Self {
        self.links = links;
        self
    }

    /// Links in display order
    pub fn nav_links(&self) -> Vec<NavLink> {
        if self.custom_links.is_empty() {
            self.links.links()
        } else {
            self.custom_links.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("brand", &self.brand),
            ("mount_id", &self.mount_id),
            ("ready_event", &self.ready_event),
        ] {
            if value.trim().is_empty() {
                return Err(HeaderError::InvalidConfig {
                    message: format!("{} must not be empty", field),
                });
            }
        }
        validate_links(&self.nav_links())
    }

    /// Parse a TOML document; `origin` is only used in error messages
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        let config: HeaderConfig =
            toml::from_str(content).map_err(|source| HeaderError::ConfigParse {
                path: origin.to_path_buf(),
                message: source.message().to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| HeaderError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load `path` when it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no header config, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = HeaderConfig::default();
        assert_eq!(config.mount_id, "app-header");
        assert_eq!(config.ready_event, "headerLoaded");
        assert_eq!(config.nav_links().len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = HeaderConfig::from_toml_str(
            "variant = \"drawer\"\nlinks = \"live\"\n",
            Path::new("inline"),
        )
        .unwrap();
        assert_eq!(config.variant, Presentation::Drawer);
        assert_eq!(config.links, NavSet::Live);
        assert_eq!(config.brand, DEFAULT_BRAND);
        assert_eq!(config.nav_links().len(), 5);
    }

    #[test]
    fn test_custom_links_override_set() {
        let toml = r#"
brand = "EPISTEME AI"

[[custom_links]]
label = "Home"
href = "index.html"

[[custom_links]]
label = "Map"
href = "map.html"
icon = "M"
"#;
        let config = HeaderConfig::from_toml_str(toml, Path::new("inline")).unwrap();
        let links = config.nav_links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].icon.as_deref(), Some("M"));
    }

    #[test]
    fn test_invalid_variant_is_parse_error() {
        let err = HeaderConfig::from_toml_str("variant = \"carousel\"", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, HeaderError::ConfigParse { .. }));
    }

    #[test]
    fn test_empty_mount_id_rejected() {
        let err =
            HeaderConfig::from_toml_str("mount_id = \"\"", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, HeaderError::InvalidConfig { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "variant = \"overlay\"").unwrap();

        let config = HeaderConfig::load(file.path()).unwrap();
        assert_eq!(config.variant, Presentation::Overlay);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = HeaderConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, HeaderConfig::default());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = HeaderConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, HeaderError::ConfigRead { .. }));
    }
}
