//! Purchase invoice form state.
//!
//! Holds the editable purchase fields, applies input-type sanitization,
//! validates required fields, builds the JSON payload that goes into the
//! QR code, and tracks the Editing/Reviewing phase of the form.

pub mod field;
pub mod form;
pub mod phase;
pub mod record;
pub mod view;

pub use field::{FormField, InputKind};
pub use form::{InvoiceForm, ValidationError};
pub use phase::Phase;
pub use record::InvoiceRecord;
pub use view::{InvoiceView, ViewRow};

/// Message shown in the blocking dialog when a required field is empty.
pub const VALIDATION_MESSAGE: &str = "Please fill all fields";

/// Placeholder rendered for an absent optional value.
pub const NOT_AVAILABLE: &str = "N/A";
