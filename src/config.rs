//! Gallery Configuration
//!
//! Read once at startup from `data-*` attributes on `<body>`:
//!
//! ```html
//! <body data-gallery-crud="true" data-storage-key="portfolio.gallery.items.v1" data-log-level="info">
//! ```

use thiserror::Error;
use tracing::Level;

use crate::store::STORAGE_KEY;

pub const CRUD_ATTR: &str = "data-gallery-crud";
pub const STORAGE_KEY_ATTR: &str = "data-storage-key";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid data-gallery-crud value: {0:?}")]
    InvalidFlag(String),
    #[error("invalid data-log-level value: {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Show add/edit/delete/reset affordances
    pub crud_enabled: bool,
    pub storage_key: String,
    pub log_level: Level,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            crud_enabled: true,
            storage_key: STORAGE_KEY.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl GalleryConfig {
    /// Build from an attribute lookup. Invalid values keep their default and
    /// are returned alongside so they can be logged once logging is up.
    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(raw) = get(CRUD_ATTR) {
            match parse_flag(&raw) {
                Ok(flag) => config.crud_enabled = flag,
                Err(e) => errors.push(e),
            }
        }
        if let Some(key) = get(STORAGE_KEY_ATTR).filter(|k| !k.trim().is_empty()) {
            config.storage_key = key.trim().to_string();
        }
        if let Some(raw) = get(LOG_LEVEL_ATTR) {
            match raw.trim().parse::<Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => errors.push(ConfigError::InvalidLogLevel(raw)),
            }
        }
        (config, errors)
    }

    /// Read from the current document's `<body>`
    pub fn from_document() -> (Self, Vec<ConfigError>) {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body());
        match body {
            Some(body) => Self::from_attributes(|name| body.get_attribute(name)),
            None => (Self::default(), Vec::new()),
        }
    }
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(raw.to_string())),
    }
}
