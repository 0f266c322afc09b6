//! Error type shared by every stage of image decoding

use thiserror::Error;

use super::field::FieldType;

/// Errors that can occur while reading an ISO 9660 image
#[derive(Debug, Error)]
pub enum FsError {
    #[error("a standard identifier was not found, file is assumed invalid")]
    InvalidFormat,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("sector {0} does not contain any records")]
    NotADirectory(u32),

    #[error("could not find '{0}'")]
    PathNotFound(String),

    #[error("field type {field_type:?} cannot be decoded from {length} bytes")]
    MalformedField { field_type: FieldType, length: usize },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("'{0}' is a directory")]
    IsADirectory(String),
}

/// Result alias used throughout the disc module
pub type Result<T> = std::result::Result<T, FsError>;
