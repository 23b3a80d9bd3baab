//! The editable invoice form and its phase transitions.

use tracing::{debug, info};

use crate::field::FormField;
use crate::phase::Phase;
use crate::record::InvoiceRecord;
use crate::view::InvoiceView;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Display text is the message shown to the user.
    #[error("Please fill all fields")]
    MissingFields(Vec<FormField>),
}

/// In-memory state of one invoice form.
///
/// The invoice id is assigned on construction and never changes, no matter
/// how many times the invoice is edited and generated again.
#[derive(Debug, Clone)]
pub struct InvoiceForm {
    client_name: String,
    client_contact: String,
    purchase_date: String,
    laptop_model: String,
    laptop_serial: String,
    warranty: String,
    price: String,
    payment_method: String,
    invoice_id: String,
    phase: Phase,
    qr_code: Option<String>,
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceForm {
    pub fn new() -> Self {
        let invoice_id = uuid::Uuid::new_v4().to_string();
        debug!(invoice_id = %invoice_id, "Invoice form created");
        Self {
            client_name: String::new(),
            client_contact: String::new(),
            purchase_date: String::new(),
            laptop_model: String::new(),
            laptop_serial: String::new(),
            warranty: String::new(),
            price: String::new(),
            payment_method: String::new(),
            invoice_id,
            phase: Phase::Editing,
            qr_code: None,
        }
    }

    pub fn invoice_id(&self) -> &str {
        &self.invoice_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Data URI of the last generated QR image.
    pub fn qr_code(&self) -> Option<&str> {
        self.qr_code.as_deref()
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::ClientName => &self.client_name,
            FormField::ClientContact => &self.client_contact,
            FormField::PurchaseDate => &self.purchase_date,
            FormField::LaptopModel => &self.laptop_model,
            FormField::LaptopSerial => &self.laptop_serial,
            FormField::Warranty => &self.warranty,
            FormField::Price => &self.price,
            FormField::PaymentMethod => &self.payment_method,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::ClientName => &mut self.client_name,
            FormField::ClientContact => &mut self.client_contact,
            FormField::PurchaseDate => &mut self.purchase_date,
            FormField::LaptopModel => &mut self.laptop_model,
            FormField::LaptopSerial => &mut self.laptop_serial,
            FormField::Warranty => &mut self.warranty,
            FormField::Price => &mut self.price,
            FormField::PaymentMethod => &mut self.payment_method,
        }
    }

    /// Overwrite one field with the sanitized form of `raw`.
    pub fn set_field(&mut self, field: FormField, raw: &str) {
        let value = field.input_kind().sanitize(raw);
        if value.is_empty() && !raw.is_empty() {
            debug!(field = field.label(), "Input rejected by field type, cleared");
        }
        *self.field_mut(field) = value;
    }

    /// Required fields that are currently empty, in display order.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.field(*f).is_empty())
            .collect()
    }

    /// Snapshot of the current values, regardless of validity.
    pub fn record(&self) -> InvoiceRecord {
        InvoiceRecord {
            client_name: self.client_name.clone(),
            client_contact: self.client_contact.clone(),
            purchase_date: self.purchase_date.clone(),
            laptop_model: self.laptop_model.clone(),
            laptop_serial: self.laptop_serial.clone(),
            warranty: self.warranty.clone(),
            price: self.price.clone(),
            payment_method: self.payment_method.clone(),
            invoice_id: self.invoice_id.clone(),
        }
    }

    /// Snapshot the record if every required field is filled.
    pub fn validate(&self) -> Result<InvoiceRecord, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        Ok(self.record())
    }

    /// Store the QR image and switch to the invoice display.
    pub fn show_invoice(&mut self, qr_code: String) {
        self.qr_code = Some(qr_code);
        self.phase = Phase::Reviewing;
        info!(invoice_id = %self.invoice_id, "Invoice ready for review");
    }

    /// Return to editing. Field values are kept.
    pub fn edit(&mut self) {
        self.phase = Phase::Editing;
        info!(invoice_id = %self.invoice_id, "Back to editing");
    }

    /// The read-only invoice, available only while reviewing.
    pub fn view(&self) -> Option<InvoiceView> {
        match self.phase {
            Phase::Reviewing => Some(InvoiceView::new(&self.record(), self.qr_code.clone())),
            Phase::Editing => None,
        }
    }
}
