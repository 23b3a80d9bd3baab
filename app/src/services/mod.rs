//! Capabilities the invoice component calls out to.

pub mod alert;
pub mod export;
pub mod font;
pub mod qr;
pub mod raster;

use std::sync::Arc;

use image_engine::CardLayout;

use crate::config::AppConfig;

pub use alert::{Alert, TerminalAlert};
pub use export::{DirectorySink, Download, DownloadSink, EXPORT_FILE_NAME, ExportError};
pub use font::{FontError, FontService};
pub use qr::{PngQrEncoder, QrEncoder};
pub use raster::{CardRasterizer, RenderError, Rasterizer};

/// The set of services one invoice component uses.
#[derive(Clone)]
pub struct Services {
    pub encoder: Arc<dyn QrEncoder>,
    pub rasterizer: Arc<dyn Rasterizer>,
    pub sink: Arc<dyn DownloadSink>,
    pub alert: Arc<dyn Alert>,
}

impl Services {
    /// Production services wired from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let layout = CardLayout {
            width: config.card_width,
            ..CardLayout::default()
        };
        Self {
            encoder: Arc::new(PngQrEncoder::new(config.qr_scale, config.qr_margin)),
            rasterizer: Arc::new(CardRasterizer::new(
                FontService::new(config.font_path.clone()),
                layout,
            )),
            sink: Arc::new(DirectorySink::new(config.download_dir.clone())),
            alert: Arc::new(TerminalAlert),
        }
    }
}
