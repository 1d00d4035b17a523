//! Error types for tgdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for tgdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a recognizable document container.
    #[error("Unknown file format: not a valid DOCX document")]
    UnknownFormat,

    /// The container was recognized but the format is not supported.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The ZIP container is corrupted or unreadable.
    #[error("Archive error: {0}")]
    Archive(String),

    /// A required package part is missing.
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// Malformed XML inside a package part.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// Error during rendering (JSON serialization).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error means the input bytes are not a well-formed document.
    ///
    /// Parse errors are never worth retrying on the same input.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownFormat
                | Error::UnsupportedFormat(_)
                | Error::Archive(_)
                | Error::MissingPart(_)
                | Error::Xml(_)
        )
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => Error::MissingPart(err.to_string()),
            _ => Error::Archive(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
