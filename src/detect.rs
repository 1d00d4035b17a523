//! Document container detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Detected container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    /// Office Open XML package (ZIP container, `.docx`)
    Docx,
    /// Legacy Word binary document (OLE compound file, `.doc`)
    LegacyDoc,
}

impl std::fmt::Display for DocFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocFormat::Docx => write!(f, "DOCX"),
            DocFormat::LegacyDoc => write!(f, "DOC (legacy)"),
        }
    }
}

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// OLE compound file magic used by legacy .doc files.
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Detect the container format from a file path.
///
/// Only the first bytes of the file are read.
///
/// # Example
/// ```no_run
/// use tgdoc::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.docx").unwrap();
/// println!("Format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = Vec::with_capacity(OLE_MAGIC.len());
    reader
        .by_ref()
        .take(OLE_MAGIC.len() as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the container format from bytes.
///
/// # Returns
/// * `Ok(DocFormat)` if the data starts with a known container header
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocFormat> {
    if data.starts_with(ZIP_MAGIC) {
        return Ok(DocFormat::Docx);
    }
    if data.starts_with(OLE_MAGIC) {
        return Ok(DocFormat::LegacyDoc);
    }
    Err(Error::UnknownFormat)
}

/// Check that bytes can be handed to the DOCX parser.
///
/// Legacy `.doc` files are recognized but rejected with
/// [`Error::UnsupportedFormat`].
pub fn ensure_docx(data: &[u8]) -> Result<()> {
    match detect_format_from_bytes(data)? {
        DocFormat::Docx => Ok(()),
        DocFormat::LegacyDoc => Err(Error::UnsupportedFormat(
            "legacy .doc files are not supported, save the document as .docx".to_string(),
        )),
    }
}

/// Check if a file looks like a DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_format_from_path(path), Ok(DocFormat::Docx))
}
