//! The invoice component: form state plus the asynchronous generate and
//! download actions.

use std::path::PathBuf;
use std::sync::Arc;

use image_engine::{EngineError, encode_png_data_uri};
use invoice_form::{
    FormField, InvoiceForm, InvoiceView, Phase, VALIDATION_MESSAGE, ValidationError,
};
use tracing::{error, info, warn};

use crate::services::{
    Alert, Download, DownloadSink, EXPORT_FILE_NAME, ExportError, QrEncoder, Rasterizer,
    RenderError, Services,
};

/// Alert shown when the QR code cannot be produced.
pub const QR_FAILURE_MESSAGE: &str = "Failed to generate QR code";

/// Alert shown when the invoice image cannot be exported.
pub const EXPORT_FAILURE_MESSAGE: &str = "Failed to download invoice";

#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("cannot {action} while {phase}")]
    WrongPhase { action: &'static str, phase: Phase },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("failed to serialize invoice payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("QR code generation failed: {0}")]
    Encode(#[source] EngineError),
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// One invoice form with its generate/edit/download actions.
pub struct InvoiceComponent {
    form: InvoiceForm,
    encoder: Arc<dyn QrEncoder>,
    rasterizer: Arc<dyn Rasterizer>,
    sink: Arc<dyn DownloadSink>,
    alert: Arc<dyn Alert>,
}

impl InvoiceComponent {
    pub fn new(services: Services) -> Self {
        let Services {
            encoder,
            rasterizer,
            sink,
            alert,
        } = services;
        Self {
            form: InvoiceForm::new(),
            encoder,
            rasterizer,
            sink,
            alert,
        }
    }

    pub fn form(&self) -> &InvoiceForm {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.form.phase()
    }

    pub fn view(&self) -> Option<InvoiceView> {
        self.form.view()
    }

    /// Change one input. Inputs only exist while editing.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), InvoiceError> {
        self.require_phase(Phase::Editing, "edit fields")?;
        self.form.set_field(field, value);
        Ok(())
    }

    /// Validate the form, encode its payload as a QR code, and show the invoice.
    ///
    /// Missing required fields raise the validation alert. An encoding
    /// failure is logged, alerted, and leaves the form in the editing phase.
    pub async fn generate_invoice(&mut self) -> Result<(), InvoiceError> {
        self.require_phase(Phase::Editing, "generate an invoice")?;

        let record = match self.form.validate() {
            Ok(record) => record,
            Err(e) => {
                let ValidationError::MissingFields(missing) = &e;
                warn!(?missing, "Invoice rejected, required fields are empty");
                self.alert.alert(VALIDATION_MESSAGE);
                return Err(e.into());
            }
        };

        let payload = record.to_payload()?;
        let encoder = Arc::clone(&self.encoder);
        let encoded = tokio::task::spawn_blocking(move || encoder.to_data_url(&payload)).await;
        let result = match encoded {
            Ok(r) => r.map_err(InvoiceError::Encode),
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(qr_code) => {
                self.form.show_invoice(qr_code);
                Ok(())
            }
            Err(e) => {
                error!(invoice_id = %record.invoice_id, "QR code generation failed: {e}");
                self.alert.alert(QR_FAILURE_MESSAGE);
                Err(e)
            }
        }
    }

    /// Return to the form, keeping every entered value.
    pub fn edit_invoice(&mut self) -> Result<(), InvoiceError> {
        self.require_phase(Phase::Reviewing, "edit the invoice")?;
        self.form.edit();
        Ok(())
    }

    /// Rasterize the shown invoice and save it as `invoice.png`.
    ///
    /// Returns where the sink stored the file. Failures are logged and
    /// alerted.
    pub async fn download_invoice(&self) -> Result<PathBuf, InvoiceError> {
        let Some(view) = self.form.view() else {
            return Err(self.wrong_phase("download the invoice"));
        };

        let rasterizer = Arc::clone(&self.rasterizer);
        let sink = Arc::clone(&self.sink);
        let exported = tokio::task::spawn_blocking(move || {
            export_view(rasterizer.as_ref(), sink.as_ref(), &view)
        })
        .await;
        let result = match exported {
            Ok(r) => r,
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(path) => {
                info!(
                    invoice_id = %self.form.invoice_id(),
                    path = %path.display(),
                    "Invoice downloaded"
                );
                Ok(path)
            }
            Err(e) => {
                error!(invoice_id = %self.form.invoice_id(), "Invoice export failed: {e}");
                self.alert.alert(EXPORT_FAILURE_MESSAGE);
                Err(e)
            }
        }
    }

    fn require_phase(&self, expected: Phase, action: &'static str) -> Result<(), InvoiceError> {
        if self.form.phase() == expected {
            Ok(())
        } else {
            Err(self.wrong_phase(action))
        }
    }

    fn wrong_phase(&self, action: &'static str) -> InvoiceError {
        let phase = self.form.phase();
        warn!(action, %phase, "Action not available in current phase");
        InvoiceError::WrongPhase { action, phase }
    }
}

fn export_view(
    rasterizer: &dyn Rasterizer,
    sink: &dyn DownloadSink,
    view: &InvoiceView,
) -> Result<PathBuf, InvoiceError> {
    let image = rasterizer.rasterize(view)?;
    let href = encode_png_data_uri(&image).map_err(RenderError::from)?;
    let download = Download {
        file_name: EXPORT_FILE_NAME.to_string(),
        href,
    };
    Ok(sink.save(&download)?)
}
