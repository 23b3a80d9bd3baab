//! Runtime application configuration loaded from environment variables.

use std::path::PathBuf;

use tracing::warn;

use super::defaults::{DEFAULT_SETTINGS, get_default};
use super::validation::validate_setting;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub download_dir: PathBuf,
    pub font_path: Option<PathBuf>,
    pub shop_name: String,
    pub qr_scale: u32,
    pub qr_margin: u32,
    pub card_width: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a key lookup, falling back to defaults for
    /// missing or invalid values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> String { setting(&lookup, key) };

        let download_dir = match g("INVOICE_DOWNLOAD_DIR") {
            dir if dir.is_empty() => default_download_dir(),
            dir => PathBuf::from(dir),
        };
        let font_path = match g("INVOICE_FONT_PATH") {
            path if path.is_empty() => None,
            path => Some(PathBuf::from(path)),
        };

        Self {
            download_dir,
            font_path,
            shop_name: g("INVOICE_SHOP_NAME"),
            qr_scale: parse_u32(&g("INVOICE_QR_SCALE"), 4),
            qr_margin: parse_u32(&g("INVOICE_QR_MARGIN"), 4),
            card_width: parse_u32(&g("INVOICE_CARD_WIDTH"), 480),
        }
    }
}

/// Read a setting, substituting the default when it is unset or invalid.
fn setting(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> String {
    let default = get_default(key).unwrap_or_default();
    let Some(value) = lookup(key) else {
        return default.to_string();
    };
    match validate_setting(key, &value) {
        Ok(()) => value,
        Err(reason) => {
            let description = DEFAULT_SETTINGS
                .get(key)
                .map(|d| d.description)
                .unwrap_or_default();
            warn!(
                key,
                value = %value,
                reason = %reason,
                description,
                "Invalid setting, using default"
            );
            default.to_string()
        }
    }
}

fn default_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn parse_u32(s: &str, default: u32) -> u32 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}
