//! Application defaults.

pub const DEFAULT_CONFIG_URL: &str = "./config/icon-groups.json";

/// Attribute placed on every `<link>` a group selection adds to the page.
pub const LIBRARY_TAG_ATTR: &str = "data-icon-library";

pub const DEFAULT_FONT_SIZE_PX: u32 = 32;
pub const MIN_FONT_SIZE_PX: u32 = 10;
pub const MAX_FONT_SIZE_PX: u32 = 500;
pub const DEFAULT_COLOR_HEX: &str = "#000000";

pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub config_url: String,
    pub toast_duration_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_url: DEFAULT_CONFIG_URL.to_owned(),
            toast_duration_ms: TOAST_DURATION_MS,
        }
    }
}

impl AppConfig {
    /// Use `config_url` when it is set and non-blank, the default otherwise.
    pub fn with_config_url(config_url: Option<String>) -> Self {
        let config_url = config_url
            .map(|url| url.trim().to_owned())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_URL.to_owned());

        Self {
            config_url,
            ..Self::default()
        }
    }
}
