//! Invoice record and its QR payload encoding.

use serde::{Deserialize, Serialize};

/// One purchase transaction as captured by the form.
///
/// Field order matches the payload key order encoded into the QR code.
/// Values are kept as entered; absent optional values are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub client_name: String,
    pub client_contact: String,
    pub purchase_date: String,
    pub laptop_model: String,
    pub laptop_serial: String,
    pub warranty: String,
    pub price: String,
    pub payment_method: String,
    pub invoice_id: String,
}

impl InvoiceRecord {
    /// Serialize to the compact JSON text stored in the QR code.
    pub fn to_payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a payload previously produced by [`InvoiceRecord::to_payload`].
    pub fn from_payload(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InvoiceRecord {
        InvoiceRecord {
            client_name: "Jane".into(),
            client_contact: "555-0100".into(),
            purchase_date: "2024-01-01".into(),
            laptop_model: "X1".into(),
            laptop_serial: String::new(),
            warranty: String::new(),
            price: "999".into(),
            payment_method: "Cash".into(),
            invoice_id: "8f0c6d1e-0000-4000-8000-000000000000".into(),
        }
    }

    #[test]
    fn payload_keys_follow_record_order() {
        let payload = sample().to_payload().unwrap();
        assert_eq!(
            payload,
            concat!(
                r#"{"clientName":"Jane","clientContact":"555-0100","#,
                r#""purchaseDate":"2024-01-01","laptopModel":"X1","#,
                r#""laptopSerial":"","warranty":"","price":"999","#,
                r#""paymentMethod":"Cash","#,
                r#""invoiceId":"8f0c6d1e-0000-4000-8000-000000000000"}"#
            )
        );
    }

    #[test]
    fn payload_preserves_quotes_and_unicode() {
        let mut record = sample();
        record.client_name = "Zoë \"ZZ\" Ørsted".into();
        let parsed = InvoiceRecord::from_payload(&record.to_payload().unwrap()).unwrap();
        assert_eq!(parsed, record);
    }
}
