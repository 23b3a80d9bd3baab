//! Invoice download: writes the exported image where the user can find it.

use std::path::PathBuf;

use image_engine::{EngineError, decode_data_uri};

/// File name of every exported invoice.
pub const EXPORT_FILE_NAME: &str = "invoice.png";

/// A file offered to the user: a name plus a data URI with its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub href: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// Receives downloads and stores them.
pub trait DownloadSink: Send + Sync {
    /// Store the download, returning where it ended up.
    fn save(&self, download: &Download) -> Result<PathBuf, ExportError>;
}

/// Saves downloads into a directory, replacing a file of the same name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl DownloadSink for DirectorySink {
    fn save(&self, download: &Download) -> Result<PathBuf, ExportError> {
        let (media_type, bytes) = decode_data_uri(&download.href)?;
        if media_type != "image/png" {
            return Err(ExportError::UnsupportedMediaType(media_type));
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(&download.file_name);
        std::fs::write(&path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "Invoice image saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("invoice-export-{name}-{}", std::process::id()))
    }

    fn png_download() -> Download {
        let image = image::DynamicImage::ImageRgba8(image::RgbaImage::new(2, 2));
        Download {
            file_name: EXPORT_FILE_NAME.into(),
            href: image_engine::encode_png_data_uri(&image).unwrap(),
        }
    }

    #[test]
    fn writes_png_into_directory() {
        let dir = temp_dir("write");
        let path = DirectorySink::new(dir.clone()).save(&png_download()).unwrap();
        assert_eq!(path, dir.join("invoice.png"));
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn second_export_replaces_first() {
        let dir = temp_dir("replace");
        let sink = DirectorySink::new(dir.clone());
        sink.save(&png_download()).unwrap();
        let path = sink.save(&png_download()).unwrap();
        let files = std::fs::read_dir(&dir).unwrap().count();
        assert_eq!(files, 1);
        assert!(path.ends_with("invoice.png"));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn rejects_non_png_payloads() {
        let download = Download {
            file_name: EXPORT_FILE_NAME.into(),
            href: "data:text/plain;base64,aGk=".into(),
        };
        let result = DirectorySink::new(temp_dir("reject")).save(&download);
        assert!(matches!(result, Err(ExportError::UnsupportedMediaType(t)) if t == "text/plain"));
    }
}
