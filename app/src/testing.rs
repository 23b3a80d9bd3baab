//! Test doubles for the component's service seams.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use image::{DynamicImage, RgbaImage};
use image_engine::EngineError;
use invoice_form::{FormField, InvoiceView};

use crate::component::InvoiceComponent;
use crate::services::{
    Alert, Download, DownloadSink, ExportError, QrEncoder, Rasterizer, RenderError, Services,
};

pub const FAKE_QR: &str = "data:image/png;base64,iVBORw0KGgo=";

#[derive(Default)]
pub struct RecordingAlert {
    pub messages: Mutex<Vec<String>>,
}

impl RecordingAlert {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Records payloads and answers with [`FAKE_QR`], or fails when `fail` is set.
#[derive(Default)]
pub struct RecordingEncoder {
    pub payloads: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingEncoder {
    pub fn payloads(&self) -> Vec<String> {
        self.payloads.lock().unwrap().clone()
    }
}

impl QrEncoder for RecordingEncoder {
    fn to_data_url(&self, text: &str) -> Result<String, EngineError> {
        self.payloads.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(EngineError::DataUri("encoder unavailable".into()));
        }
        Ok(FAKE_QR.to_string())
    }
}

/// Produces a small blank image without needing a font.
#[derive(Default)]
pub struct StubRasterizer {
    pub views: Mutex<Vec<InvoiceView>>,
    pub fail: bool,
}

impl Rasterizer for StubRasterizer {
    fn rasterize(&self, view: &InvoiceView) -> Result<DynamicImage, RenderError> {
        self.views.lock().unwrap().push(view.clone());
        if self.fail {
            return Err(RenderError::InvalidFont);
        }
        Ok(DynamicImage::ImageRgba8(RgbaImage::new(4, 4)))
    }
}

#[derive(Default)]
pub struct MemorySink {
    pub downloads: Mutex<Vec<Download>>,
}

impl MemorySink {
    pub fn downloads(&self) -> Vec<Download> {
        self.downloads.lock().unwrap().clone()
    }
}

impl DownloadSink for MemorySink {
    fn save(&self, download: &Download) -> Result<PathBuf, ExportError> {
        self.downloads.lock().unwrap().push(download.clone());
        Ok(PathBuf::from("memory").join(&download.file_name))
    }
}

pub struct Harness {
    pub alert: Arc<RecordingAlert>,
    pub encoder: Arc<RecordingEncoder>,
    pub rasterizer: Arc<StubRasterizer>,
    pub sink: Arc<MemorySink>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with(RecordingEncoder::default(), StubRasterizer::default())
    }

    pub fn with(encoder: RecordingEncoder, rasterizer: StubRasterizer) -> Self {
        Self {
            alert: Arc::new(RecordingAlert::default()),
            encoder: Arc::new(encoder),
            rasterizer: Arc::new(rasterizer),
            sink: Arc::new(MemorySink::default()),
        }
    }

    pub fn component(&self) -> InvoiceComponent {
        InvoiceComponent::new(Services {
            encoder: self.encoder.clone(),
            rasterizer: self.rasterizer.clone(),
            sink: self.sink.clone(),
            alert: self.alert.clone(),
        })
    }
}

/// Fill the form with the values of the walk-in cash sale example.
pub fn fill_example(component: &mut InvoiceComponent) {
    let values = [
        (FormField::ClientName, "Jane"),
        (FormField::ClientContact, "555-0100"),
        (FormField::PurchaseDate, "2024-01-01"),
        (FormField::LaptopModel, "X1"),
        (FormField::Price, "999"),
        (FormField::PaymentMethod, "Cash"),
    ];
    for (field, value) in values {
        component.set_field(field, value).unwrap();
    }
}
