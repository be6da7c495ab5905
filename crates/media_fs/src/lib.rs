//! media_view evidence file model
//!
//! Provides the read-only view of a file the media viewer works on:
//! - UniversalPath: normalized path with a hash-based ID
//! - MediaFile: name, size and allocation state of a selected file
//! - FileId: stable identity used to recognise repeated selections

mod universal_path;
mod file;

pub use universal_path::UniversalPath;
pub use file::{FileId, MediaFile, NameFlag};

use thiserror::Error;

/// File model errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, FsError>;
