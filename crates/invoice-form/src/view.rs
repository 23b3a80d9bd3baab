//! Read-only presentation of a generated invoice.

use crate::NOT_AVAILABLE;
use crate::record::InvoiceRecord;

/// Heading shown above the invoice rows.
pub const INVOICE_TITLE: &str = "Invoice";

/// One labelled line of the invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRow {
    pub label: &'static str,
    pub value: String,
}

impl std::fmt::Display for ViewRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// The invoice as it is displayed and exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceView {
    pub title: &'static str,
    pub rows: Vec<ViewRow>,
    /// PNG data URI of the QR code, if one was generated.
    pub qr_code: Option<String>,
}

impl InvoiceView {
    pub fn new(record: &InvoiceRecord, qr_code: Option<String>) -> Self {
        let row = |label, value: String| ViewRow { label, value };
        let rows = vec![
            row("Client Name", record.client_name.clone()),
            row("Client Contact", record.client_contact.clone()),
            row("Purchase Date", record.purchase_date.clone()),
            row("Laptop Model", record.laptop_model.clone()),
            row("Serial Number", or_not_available(&record.laptop_serial)),
            row(
                "Warranty",
                format!("{} months", or_not_available(&record.warranty)),
            ),
            row("Price", format!("${}", record.price)),
            row("Payment Method", record.payment_method.clone()),
            row("Invoice ID", record.invoice_id.clone()),
        ];
        Self {
            title: INVOICE_TITLE,
            rows,
            qr_code,
        }
    }

    /// Rows rendered as `"Label: value"` text lines.
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(ToString::to_string).collect()
    }
}

fn or_not_available(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(serial: &str, warranty: &str) -> InvoiceRecord {
        InvoiceRecord {
            client_name: "Jane".into(),
            client_contact: "555-0100".into(),
            purchase_date: "2024-01-01".into(),
            laptop_model: "X1".into(),
            laptop_serial: serial.into(),
            warranty: warranty.into(),
            price: "999".into(),
            payment_method: "Cash".into(),
            invoice_id: "abc".into(),
        }
    }

    #[test]
    fn absent_optional_fields_show_not_available() {
        let lines = InvoiceView::new(&record("", ""), None).lines();
        assert!(lines.contains(&"Serial Number: N/A".to_string()));
        assert!(lines.contains(&"Warranty: N/A months".to_string()));
        assert!(lines.contains(&"Price: $999".to_string()));
    }

    #[test]
    fn present_optional_fields_are_shown() {
        let lines = InvoiceView::new(&record("SN-42", "12"), None).lines();
        assert!(lines.contains(&"Serial Number: SN-42".to_string()));
        assert!(lines.contains(&"Warranty: 12 months".to_string()));
    }

    #[test]
    fn rows_are_in_display_order() {
        let view = InvoiceView::new(&record("", ""), Some("qr".into()));
        let labels: Vec<_> = view.rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            [
                "Client Name",
                "Client Contact",
                "Purchase Date",
                "Laptop Model",
                "Serial Number",
                "Warranty",
                "Price",
                "Payment Method",
                "Invoice ID",
            ]
        );
        assert_eq!(view.title, "Invoice");
        assert_eq!(view.qr_code.as_deref(), Some("qr"));
    }
}
