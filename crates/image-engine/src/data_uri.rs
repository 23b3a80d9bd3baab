//! PNG encoding and `data:` URI helpers.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat};

use crate::EngineError;

const PNG_PREFIX: &str = "data:image/png;base64,";

/// Encode an image as PNG bytes.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, EngineError> {
    let mut cursor = Cursor::new(Vec::new());
    image.write_to(&mut cursor, ImageFormat::Png)?;
    Ok(cursor.into_inner())
}

/// Encode an image as a `data:image/png;base64,...` URI.
pub fn encode_png_data_uri(image: &DynamicImage) -> Result<String, EngineError> {
    let png = encode_png(image)?;
    Ok(format!("{PNG_PREFIX}{}", STANDARD.encode(png)))
}

/// Split a base64 `data:` URI into its media type and decoded bytes.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), EngineError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| EngineError::DataUri("missing 'data:' scheme".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| EngineError::DataUri("missing ',' separator".into()))?;
    let media_type = meta
        .strip_suffix(";base64")
        .ok_or_else(|| EngineError::DataUri("only base64 payloads are supported".into()))?;
    Ok((media_type.to_string(), STANDARD.decode(payload)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn png_data_uri_has_png_prefix_and_signature() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(3, 2, Luma([0])));
        let uri = encode_png_data_uri(&img).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        let (media_type, bytes) = decode_data_uri(&uri).unwrap();
        assert_eq!(media_type, "image/png");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
    }

    #[test]
    fn decode_rejects_non_data_uris() {
        assert!(matches!(
            decode_data_uri("https://example.com/a.png"),
            Err(EngineError::DataUri(_))
        ));
        assert!(matches!(
            decode_data_uri("data:text/plain,hello"),
            Err(EngineError::DataUri(_))
        ));
        assert!(matches!(
            decode_data_uri("data:image/png;base64,@@@"),
            Err(EngineError::Base64(_))
        ));
    }
}
