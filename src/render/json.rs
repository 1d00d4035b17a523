//! JSON dump of the parsed document model.
//!
//! The output is the [`Document`] as read from the package, before any
//! Telegram escaping or classification:
//!
//! ```text
//! {
//!   "metadata": { "title", "author", "subject", "keywords",
//!                 "last_modified_by", "created", "modified",
//!                 "paragraph_count" },
//!   "paragraphs": [
//!     { "style_name": "Heading 1",
//!       "runs": [ { "text": "...",
//!                   "style": { "bold", "italic", "underline", "strikethrough" } } ] }
//!   ]
//! }
//! ```
//!
//! Missing metadata fields are `null` and dates are RFC 3339 strings.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
