//! Font lookup for invoice rasterization.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("no usable font found (set INVOICE_FONT_PATH or install system fonts)")]
    NotFound,
}

/// Resolves font data: the configured font first, then well-known system fonts.
#[derive(Debug, Clone)]
pub struct FontService {
    custom: Option<PathBuf>,
}

impl FontService {
    pub fn new(custom: Option<PathBuf>) -> Self {
        Self { custom }
    }

    pub fn get_font_data(&self) -> Result<Vec<u8>, FontError> {
        if let Some(path) = &self.custom {
            match std::fs::read(path) {
                Ok(data) => return Ok(data),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Configured font unreadable: {e}");
                }
            }
        }
        load_system_font_data()
    }
}

fn load_system_font_data() -> Result<Vec<u8>, FontError> {
    for path in system_font_candidates() {
        if let Ok(data) = std::fs::read(path) {
            tracing::debug!(path = %path, "Using system font for invoice export");
            return Ok(data);
        }
    }
    Err(FontError::NotFound)
}

fn system_font_candidates() -> &'static [&'static str] {
    #[cfg(target_os = "macos")]
    {
        &[
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Helvetica.ttf",
            "/Library/Fonts/Arial.ttf",
        ]
    }
    #[cfg(target_os = "windows")]
    {
        &[
            "C:\\Windows\\Fonts\\arial.ttf",
            "C:\\Windows\\Fonts\\segoeui.ttf",
        ]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        &[
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        ]
    }
}
