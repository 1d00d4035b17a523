//! # tgdoc
//!
//! Convert Word documents (DOCX) into Telegram MarkdownV2 markup.
//!
//! The library reads the paragraphs of a DOCX package, decides per paragraph
//! whether it is a heading, code, quote or body text from its style name, and
//! emits escaped markup ready to send with `parse_mode=MarkdownV2`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tgdoc::{parse_file, render};
//!
//! fn main() -> tgdoc::Result<()> {
//!     // Parse a DOCX file
//!     let doc = parse_file("document.docx")?;
//!
//!     // Convert to Telegram markup
//!     let options = render::RenderOptions::default();
//!     let markup = render::to_markdown(&doc, &options)?;
//!     println!("{}", markup);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Style-driven blocks**: headings, inline code and spoiler quotes from paragraph styles
//! - **Inline formatting**: bold, italic, underline and strikethrough runs
//! - **Configurable escaping**: MarkdownV2, legacy or custom reserved sets
//! - **Multiple output formats**: Telegram markup, plain text, JSON

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertResult, Converter, OutputFormat};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, DocFormat};
pub use error::{Error, Result};
pub use model::{Document, Metadata, Paragraph, Run, RunStyle};
pub use parser::{DocxParser, ErrorMode, ParseOptions};
pub use render::{JsonFormat, RenderOptions, ReservedSet, StylePrefixes};

use std::io::Read;
use std::path::Path;

/// Parse a DOCX file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use tgdoc::parse_file;
///
/// let doc = parse_file("document.docx").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX file with custom options.
///
/// # Example
///
/// ```no_run
/// use tgdoc::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient();
/// let doc = parse_file_with_options("document.docx", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a DOCX from bytes.
///
/// # Example
///
/// ```no_run
/// use tgdoc::parse_bytes;
///
/// let data = std::fs::read("document.docx").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let parser = DocxParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a DOCX from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Convert DOCX bytes to Telegram markup with default options.
///
/// Fails with a parse error (see [`Error::is_parse_error`]) when the bytes
/// are not a well-formed DOCX package.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("document.docx").unwrap();
/// let markup = tgdoc::convert_bytes(&data).unwrap();
/// ```
pub fn convert_bytes(data: &[u8]) -> Result<String> {
    Converter::new().convert_bytes(data)
}

/// Convert a DOCX file to Telegram markup with default options.
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<String> {
    Converter::new().convert_file(path)
}

/// Convert a DOCX file to Telegram markup.
///
/// # Example
///
/// ```no_run
/// use tgdoc::to_markdown;
///
/// let markup = to_markdown("document.docx").unwrap();
/// std::fs::write("output.md", markup).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, &RenderOptions::default())
}

/// Convert a DOCX file to Telegram markup with custom options.
///
/// # Example
///
/// ```no_run
/// use tgdoc::{to_markdown_with_options, RenderOptions};
///
/// let options = RenderOptions::new().with_legacy_escaping();
/// let markup = to_markdown_with_options("document.docx", &options).unwrap();
/// ```
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, options)
}

/// Extract plain text from a DOCX file.
///
/// # Example
///
/// ```no_run
/// let text = tgdoc::to_text("document.docx").unwrap();
/// println!("{}", text);
/// ```
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_text(&doc)
}

/// Convert a DOCX file to JSON.
///
/// # Example
///
/// ```no_run
/// use tgdoc::{to_json, JsonFormat};
///
/// let json = to_json("document.docx", JsonFormat::Pretty).unwrap();
/// std::fs::write("output.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}
