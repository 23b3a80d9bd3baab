//! QR encoding of invoice payloads.

use image_engine::{EngineError, QrOptions, encode_png_data_uri, generate_qr};

/// Turns a text payload into an image data URI.
pub trait QrEncoder: Send + Sync {
    fn to_data_url(&self, text: &str) -> Result<String, EngineError>;
}

/// PNG QR codes at error correction level High.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngQrEncoder {
    options: QrOptions,
}

impl PngQrEncoder {
    pub fn new(scale: u32, margin: u32) -> Self {
        Self {
            options: QrOptions {
                scale,
                margin,
                ..QrOptions::default()
            },
        }
    }
}

impl QrEncoder for PngQrEncoder {
    fn to_data_url(&self, text: &str) -> Result<String, EngineError> {
        let image = generate_qr(text, self.options)?;
        encode_png_data_uri(&image)
    }
}
