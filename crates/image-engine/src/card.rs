//! Invoice card rasterization.
//!
//! Layout:
//! ```text
//! ┌─────────────────────────┐
//! │ Title                   │
//! │ - - - - - - - - - - - - │
//! │ Label: value (wrapped)  │
//! │ ...                     │
//! │ [QR]                    │
//! └─────────────────────────┘
//! ```

use ab_glyph::{FontRef, PxScale};
use image::{DynamicImage, Rgba};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use tracing::debug;

use crate::compose;
use crate::text::{self, DEFAULT_FONT_SIZE, SEPARATOR_HEIGHT};

const BACKGROUND: Rgba<u8> = Rgba([249, 250, 251, 255]);
const BORDER: Rgba<u8> = Rgba([209, 213, 219, 255]);
const INK: Rgba<u8> = Rgba([17, 24, 39, 255]);
const LINE_SPACING: u32 = 4;
const SECTION_GAP: u32 = 12;

/// Card geometry in pixels.
#[derive(Debug, Clone, Copy)]
pub struct CardLayout {
    pub width: u32,
    pub padding: u32,
    /// Smallest edge of the drawn QR code. Larger symbols are drawn at
    /// their own size and the card widens to fit.
    pub qr_size: u32,
    pub font_size: f32,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            width: 480,
            padding: 20,
            qr_size: 96,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Rasterize an invoice card with a title, text lines, and an optional QR
/// image below them.
pub fn render_card(
    title: &str,
    lines: &[String],
    qr: Option<&DynamicImage>,
    font: &FontRef<'_>,
    layout: CardLayout,
) -> DynamicImage {
    let body_scale = PxScale::from(layout.font_size);
    let title_scale = PxScale::from(layout.font_size * 1.3);
    let body_lh = text::line_height(font, body_scale);
    let title_lh = text::line_height(font, title_scale);
    let placement = qr.map(|q| qr_fit(q.width(), layout.qr_size));
    let qr_edge = placement.map_or(0, |(_, edge)| edge);
    let width = layout.width.max(qr_edge + layout.padding * 2);
    let content_width = width.saturating_sub(layout.padding * 2).max(1);

    let wrapped: Vec<String> = lines
        .iter()
        .flat_map(|line| text::wrap_text(font, body_scale, line, content_width))
        .collect();

    let header_height = title_lh + SECTION_GAP + SEPARATOR_HEIGHT + SECTION_GAP;
    let body_height = (wrapped.len() as u32) * (body_lh + LINE_SPACING);
    let qr_height = if qr.is_some() {
        SECTION_GAP + qr_edge
    } else {
        0
    };
    let height = layout.padding * 2 + header_height + body_height + qr_height;

    let mut img = text::blank_image(width, height, BACKGROUND);
    draw_hollow_rect_mut(&mut img, Rect::at(0, 0).of_size(width, height), BORDER);

    let x = layout.padding as i32;
    let mut y = layout.padding;
    draw_text_mut(&mut img, INK, x, y as i32, title_scale, font, title);
    y += title_lh + SECTION_GAP;

    text::draw_dashed_line(
        &mut img,
        layout.padding,
        width.saturating_sub(layout.padding),
        y,
        SEPARATOR_HEIGHT,
        BORDER,
    );
    y += SEPARATOR_HEIGHT + SECTION_GAP;

    for line in &wrapped {
        draw_text_mut(&mut img, INK, x, y as i32, body_scale, font, line);
        y += body_lh + LINE_SPACING;
    }

    if let (Some(qr), Some((factor, _))) = (qr, placement) {
        y += SECTION_GAP;
        compose::overlay_scaled(&mut img, qr, layout.padding, y, factor);
    }

    debug!(
        width,
        height,
        lines = wrapped.len(),
        has_qr = qr.is_some(),
        "Invoice card rendered"
    );
    DynamicImage::ImageRgba8(img)
}

/// Whole-number enlargement of a `qr_width` image reaching at least
/// `min_edge` pixels, and the resulting edge. Never shrinks.
fn qr_fit(qr_width: u32, min_edge: u32) -> (u32, u32) {
    let qr_width = qr_width.max(1);
    let factor = min_edge.div_ceil(qr_width).max(1);
    (factor, qr_width * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::{QrOptions, generate_qr};
    use crate::test_font;
    use crate::test_qr::decode_qr;

    fn sample_lines() -> Vec<String> {
        vec![
            "Client Name: Jane".to_string(),
            "Serial Number: N/A".to_string(),
            "Price: $999".to_string(),
        ]
    }

    #[test]
    fn card_has_layout_width_and_border() {
        let Some(data) = test_font::load() else {
            return;
        };
        let font = FontRef::try_from_slice(&data).unwrap();
        let img = render_card("Invoice", &sample_lines(), None, &font, CardLayout::default())
            .to_rgba8();
        assert_eq!(img.width(), 480);
        assert_eq!(img.get_pixel(0, 0), &BORDER);
        assert_eq!(img.get_pixel(479, img.height() - 1), &BORDER);
        assert_eq!(img.get_pixel(5, 5), &BACKGROUND);
    }

    #[test]
    fn qr_adds_height_and_is_drawn() {
        let Some(data) = test_font::load() else {
            return;
        };
        let font = FontRef::try_from_slice(&data).unwrap();
        let layout = CardLayout::default();
        let qr = generate_qr("{\"invoiceId\":\"abc\"}", QrOptions::default()).unwrap();

        let edge = qr_fit(qr.width(), layout.qr_size).1;

        let without = render_card("Invoice", &sample_lines(), None, &font, layout);
        let with = render_card("Invoice", &sample_lines(), Some(&qr), &font, layout).to_rgba8();
        assert_eq!(with.height(), without.height() + SECTION_GAP + edge);

        let qr_top = with.height() - layout.padding - edge;
        let dark = (0..edge)
            .flat_map(|dy| (0..edge).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| with.get_pixel(layout.padding + dx, qr_top + dy)[0] < 128)
            .count();
        assert!(dark > 0, "QR modules should be visible");
    }

    #[test]
    fn long_lines_grow_the_card() {
        let Some(data) = test_font::load() else {
            return;
        };
        let font = FontRef::try_from_slice(&data).unwrap();
        let layout = CardLayout::default();
        let short = render_card("Invoice", &sample_lines(), None, &font, layout);
        let mut lines = sample_lines();
        lines.push(format!("Payment Method: {}", "instalments ".repeat(20)));
        let long = render_card("Invoice", &lines, None, &font, layout);
        assert!(long.height() > short.height());
        assert_eq!(long.width(), short.width());
    }

    #[test]
    fn qr_fit_uses_whole_pixel_factors() {
        assert_eq!(qr_fit(29, 96), (4, 116));
        assert_eq!(qr_fit(96, 96), (1, 96));
        assert_eq!(qr_fit(452, 96), (1, 452));
        assert_eq!(qr_fit(0, 96), (96, 96));
    }

    #[test]
    fn long_payload_qr_stays_readable_in_card() {
        let Some(data) = test_font::load() else {
            return;
        };
        let font = FontRef::try_from_slice(&data).unwrap();
        let layout = CardLayout::default();
        let payload = format!(
            "{{\"clientName\":\"{}\",\"invoiceId\":\"4f1c2e8a-0b7d-4c55-9e3a-2d6f8b1a7c90\"}}",
            "Jane Example-Customer ".repeat(20)
        );
        let qr = generate_qr(&payload, QrOptions::default()).unwrap();
        assert!(qr.width() > layout.qr_size);

        let card = render_card("Invoice", &sample_lines(), Some(&qr), &font, layout).to_rgba8();
        assert_eq!(card.width(), qr.width() + layout.padding * 2);

        let edge = qr.width();
        let top = card.height() - layout.padding - edge;
        let area = image::imageops::crop_imm(&card, layout.padding, top, edge, edge).to_image();
        let area = DynamicImage::ImageRgba8(area).to_luma8();
        assert_eq!(decode_qr(&area).as_deref(), Some(payload.as_str()));
    }

    #[test]
    fn small_qr_is_enlarged_and_readable_in_card() {
        let Some(data) = test_font::load() else {
            return;
        };
        let font = FontRef::try_from_slice(&data).unwrap();
        let layout = CardLayout::default();
        let options = QrOptions {
            scale: 1,
            ..QrOptions::default()
        };
        let qr = generate_qr("{\"invoiceId\":\"abc\"}", options).unwrap();
        let (factor, edge) = qr_fit(qr.width(), layout.qr_size);
        assert!(factor > 1);

        let card = render_card("Invoice", &sample_lines(), Some(&qr), &font, layout).to_rgba8();
        assert_eq!(card.width(), layout.width);
        let top = card.height() - layout.padding - edge;
        let area = image::imageops::crop_imm(&card, layout.padding, top, edge, edge).to_image();
        let area = DynamicImage::ImageRgba8(area).to_luma8();
        assert_eq!(decode_qr(&area).as_deref(), Some("{\"invoiceId\":\"abc\"}"));
    }
}
