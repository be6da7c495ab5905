//! Media viewer error types
//!
//! The selection path itself never fails; these errors surface from the
//! edges (configuration, file access, image decoding) and are turned into
//! placeholders or log lines before they reach the host.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Initialization failed: {0}")]
    Init(String),
}

impl MediaError {
    /// Short message suitable for a placeholder frame
    pub fn user_message(&self) -> String {
        match self {
            MediaError::FileNotFound(path) => format!("File not found: {}", path),
            MediaError::UnsupportedFormat(ext) => format!("Unsupported format: {}", ext),
            MediaError::ImageDecode(msg) => format!("Cannot load image: {}", msg),
            _ => self.to_string(),
        }
    }
}

impl From<media_fs::FsError> for MediaError {
    fn from(e: media_fs::FsError) -> Self {
        match e {
            media_fs::FsError::NotFound(p) => MediaError::FileNotFound(p),
            media_fs::FsError::Io(e) => MediaError::Io(e),
            media_fs::FsError::InvalidPath(p) => MediaError::UnsupportedFormat(p),
        }
    }
}

impl From<image::ImageError> for MediaError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::Unsupported(u) => MediaError::UnsupportedFormat(u.to_string()),
            image::ImageError::IoError(e) => MediaError::Io(e),
            other => MediaError::ImageDecode(other.to_string()),
        }
    }
}
