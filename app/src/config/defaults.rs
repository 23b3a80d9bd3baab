//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    (
        "INVOICE_DOWNLOAD_DIR",
        "",
        "Directory that receives invoice.png (empty: the user download folder)",
    ),
    (
        "INVOICE_FONT_PATH",
        "",
        "TTF/OTF font for the exported invoice (empty: system font)",
    ),
    (
        "INVOICE_SHOP_NAME",
        "Smart Laptops Hub",
        "Shop name shown in the header",
    ),
    ("INVOICE_QR_SCALE", "4", "Pixels per QR module"),
    ("INVOICE_QR_MARGIN", "4", "QR quiet zone in modules"),
    ("INVOICE_CARD_WIDTH", "480", "Width of the exported invoice in pixels"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
