//! Form field definitions and input-type sanitization.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static RE_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});
static RE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4,}-[0-9]{2}-[0-9]{2}$").unwrap());

/// How an input treats the raw text it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Stored verbatim.
    Text,
    /// `YYYY-MM-DD` calendar date, anything else becomes empty.
    Date,
    /// Floating-point number string, anything else becomes empty.
    Number,
}

impl InputKind {
    /// Sanitize a raw value the way a typed form input does.
    ///
    /// Valid values are returned unchanged; invalid dates and numbers
    /// collapse to the empty string.
    pub fn sanitize(self, raw: &str) -> String {
        let valid = match self {
            InputKind::Text => true,
            InputKind::Date => is_valid_date(raw),
            InputKind::Number => RE_FLOAT.is_match(raw),
        };
        if valid { raw.to_string() } else { String::new() }
    }
}

fn is_valid_date(raw: &str) -> bool {
    RE_DATE.is_match(raw) && NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}

/// The editable fields of the invoice form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ClientName,
    ClientContact,
    PurchaseDate,
    LaptopModel,
    LaptopSerial,
    Warranty,
    Price,
    PaymentMethod,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::ClientName,
        FormField::ClientContact,
        FormField::PurchaseDate,
        FormField::LaptopModel,
        FormField::LaptopSerial,
        FormField::Warranty,
        FormField::Price,
        FormField::PaymentMethod,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::ClientName => "Client Name",
            FormField::ClientContact => "Client Contact",
            FormField::PurchaseDate => "Purchase Date",
            FormField::LaptopModel => "Laptop Model",
            FormField::LaptopSerial => "Laptop Serial Number",
            FormField::Warranty => "Warranty (Months)",
            FormField::Price => "Price",
            FormField::PaymentMethod => "Payment Method",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::ClientName => "Enter client name",
            FormField::ClientContact => "Enter client contact",
            FormField::PurchaseDate => "YYYY-MM-DD",
            FormField::LaptopModel => "Enter laptop model",
            FormField::LaptopSerial => "Enter serial number (optional)",
            FormField::Warranty => "Enter warranty (optional)",
            FormField::Price => "Enter price",
            FormField::PaymentMethod => "Enter payment method",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            FormField::PurchaseDate => InputKind::Date,
            FormField::Warranty | FormField::Price => InputKind::Number,
            _ => InputKind::Text,
        }
    }

    /// Serial number and warranty may be left empty.
    pub fn is_required(self) -> bool {
        !matches!(self, FormField::LaptopSerial | FormField::Warranty)
    }
}
