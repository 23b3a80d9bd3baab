//! Image composition: placing one image onto another.

use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};

/// Overlay `top` image onto `base` at the given position.
///
/// The `top` image is alpha-composited over the base and clipped to its
/// bounds.
pub fn overlay(base: &mut RgbaImage, top: &DynamicImage, x: u32, y: u32) {
    let top_rgba = top.to_rgba8();
    for (dx, dy, pixel) in top_rgba.enumerate_pixels() {
        let target_x = x + dx;
        let target_y = y + dy;
        if target_x < base.width() && target_y < base.height() {
            let alpha = pixel[3] as f32 / 255.0;
            if alpha > 0.99 {
                base.put_pixel(target_x, target_y, *pixel);
            } else if alpha > 0.01 {
                let bg = base.get_pixel(target_x, target_y);
                let blended = blend_pixel(bg, pixel, alpha);
                base.put_pixel(target_x, target_y, blended);
            }
        }
    }
}

/// Enlarge `top` by a whole-number `factor` and overlay it.
///
/// Every source pixel becomes a `factor`×`factor` block, so QR modules keep
/// their hard edges and none are dropped.
pub fn overlay_scaled(base: &mut RgbaImage, top: &DynamicImage, x: u32, y: u32, factor: u32) {
    let factor = factor.max(1);
    if factor == 1 {
        overlay(base, top, x, y);
        return;
    }
    let scaled = top.resize_exact(
        top.width() * factor,
        top.height() * factor,
        FilterType::Nearest,
    );
    overlay(base, &scaled, x, y);
}

fn blend_pixel(bg: &Rgba<u8>, fg: &Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let inv = 1.0 - alpha;
    Rgba([
        (fg[0] as f32 * alpha + bg[0] as f32 * inv) as u8,
        (fg[1] as f32 * alpha + bg[1] as f32 * inv) as u8,
        (fg[2] as f32 * alpha + bg[2] as f32 * inv) as u8,
        255,
    ])
}
