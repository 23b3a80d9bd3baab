//! Image generation for invoice output.
//!
//! Provides QR code rendering, PNG data URI encoding, text layout helpers,
//! and rasterization of the invoice card.

pub mod card;
pub mod compose;
pub mod data_uri;
pub mod qr;
pub mod text;

pub use card::{CardLayout, render_card};
pub use data_uri::{decode_data_uri, encode_png, encode_png_data_uri};
pub use qr::{QrOptions, generate_qr};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("QR encode error: {0}")]
    Qr(#[from] qrcode::types::QrError),
    #[error("image encode error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid data URI: {0}")]
    DataUri(String),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}
