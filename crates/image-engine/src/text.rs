//! Text rendering utilities for invoice images.
//!
//! Provides text measurement, word-wrapping, and separator drawing.

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

/// Default body font size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 22.0;

/// Height of the separator line.
pub const SEPARATOR_HEIGHT: u32 = 2;

/// Measure the pixel width of a string at the given font and scale.
pub fn measure_text_width(font: &FontRef<'_>, scale: PxScale, text: &str) -> u32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width.ceil() as u32
}

/// Compute the line height for the given font and scale.
pub fn line_height(font: &FontRef<'_>, scale: PxScale) -> u32 {
    let scaled = font.as_scaled(scale);
    (scaled.ascent() - scaled.descent() + scaled.line_gap()).ceil() as u32
}

/// Wrap text to fit within `max_width` pixels.
///
/// Words longer than a full line are broken between characters.
pub fn wrap_text(font: &FontRef<'_>, scale: PxScale, text: &str, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width: u32 = 0;

    for word in text.split_inclusive(|c: char| c.is_whitespace()) {
        let word_width = measure_text_width(font, scale, word);

        if current_width + word_width > max_width && !current_line.is_empty() {
            lines.push(current_line.trim_end().to_string());
            current_line = String::new();
            current_width = 0;
        }

        if word_width > max_width && current_line.is_empty() {
            let mut char_line = String::new();
            let mut char_width: u32 = 0;
            for ch in word.chars() {
                let ch_w = measure_text_width(font, scale, &ch.to_string());
                if char_width + ch_w > max_width && !char_line.is_empty() {
                    lines.push(char_line);
                    char_line = String::new();
                    char_width = 0;
                }
                char_line.push(ch);
                char_width += ch_w;
            }
            current_line = char_line;
            current_width = char_width;
            continue;
        }

        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line.trim_end().to_string());
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Draw a horizontal dashed line between `x_start` and `x_end`.
pub fn draw_dashed_line(
    img: &mut RgbaImage,
    x_start: u32,
    x_end: u32,
    y: u32,
    thickness: u32,
    color: Rgba<u8>,
) {
    const DASH: u32 = 8;
    const GAP: u32 = 4;

    let x_end = x_end.min(img.width());
    let mut x = x_start;
    let mut drawing = true;

    while x < x_end {
        let segment = if drawing { DASH } else { GAP };
        if drawing {
            for dx in 0..segment.min(x_end - x) {
                for dy in 0..thickness {
                    if y + dy < img.height() {
                        img.put_pixel(x + dx, y + dy, color);
                    }
                }
            }
        }
        x += segment;
        drawing = !drawing;
    }
}

/// Create a solid-colored RGBA image.
pub fn blank_image(width: u32, height: u32, background: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, background)
}
