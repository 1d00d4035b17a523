//! Plain text rendering for DOCX documents.

use crate::error::Result;
use crate::model::Document;

/// Convert a document to plain text: no escaping, no markers.
pub fn to_text(doc: &Document) -> Result<String> {
    Ok(doc.plain_text())
}
