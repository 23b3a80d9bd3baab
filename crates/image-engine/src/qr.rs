//! QR code generation for invoice images.

use image::{DynamicImage, GrayImage, Luma};
use qrcode::{EcLevel, QrCode};
use tracing::debug;

use crate::EngineError;

/// Rendering options for a QR symbol.
#[derive(Debug, Clone, Copy)]
pub struct QrOptions {
    pub ec_level: EcLevel,
    /// Pixels per module.
    pub scale: u32,
    /// Quiet zone width in modules.
    pub margin: u32,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::H,
            scale: 4,
            margin: 4,
        }
    }
}

/// Generate a QR code image from a text payload.
///
/// Returns a grayscale image of `(modules + 2 * margin) * scale` pixels
/// per side, dark modules black on a white background.
pub fn generate_qr(data: &str, options: QrOptions) -> Result<DynamicImage, EngineError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), options.ec_level)?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let scale = options.scale.max(1);
    let offset = options.margin * scale;
    let img_size = (module_count + options.margin * 2) * scale;

    let mut img = GrayImage::from_pixel(img_size, img_size, Luma([255u8]));

    for (i, color) in modules.iter().enumerate() {
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;

        if *color == qrcode::Color::Dark {
            for dx in 0..scale {
                for dy in 0..scale {
                    img.put_pixel(offset + x * scale + dx, offset + y * scale + dy, Luma([0u8]));
                }
            }
        }
    }

    debug!(
        version_modules = module_count,
        size = img_size,
        bytes = data.len(),
        "QR code rendered"
    );
    Ok(DynamicImage::ImageLuma8(img))
}
