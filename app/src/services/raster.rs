//! Rasterization of the invoice view into an image.

use ab_glyph::FontRef;
use image::DynamicImage;
use image_engine::{CardLayout, EngineError, decode_data_uri, render_card};
use invoice_form::InvoiceView;

use super::font::{FontError, FontService};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Font(#[from] FontError),
    #[error("failed to parse font data (TTF/OTF)")]
    InvalidFont,
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Draws an invoice view as a bitmap.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, view: &InvoiceView) -> Result<DynamicImage, RenderError>;
}

/// Renders the invoice card with `image-engine`.
#[derive(Debug, Clone)]
pub struct CardRasterizer {
    fonts: FontService,
    layout: CardLayout,
}

impl CardRasterizer {
    pub fn new(fonts: FontService, layout: CardLayout) -> Self {
        Self { fonts, layout }
    }
}

impl Rasterizer for CardRasterizer {
    fn rasterize(&self, view: &InvoiceView) -> Result<DynamicImage, RenderError> {
        let font_data = self.fonts.get_font_data()?;
        let font = FontRef::try_from_slice(&font_data).map_err(|_| RenderError::InvalidFont)?;
        let qr = view.qr_code.as_deref().map(decode_image).transpose()?;
        Ok(render_card(
            view.title,
            &view.lines(),
            qr.as_ref(),
            &font,
            self.layout,
        ))
    }
}

fn decode_image(uri: &str) -> Result<DynamicImage, EngineError> {
    let (_, bytes) = decode_data_uri(uri)?;
    Ok(image::load_from_memory(&bytes)?)
}
