//! Document conversion driver.
//!
//! [`Converter`] bundles parse and render options and runs the whole
//! pipeline: DOCX bytes in, Telegram markup out.
//!
//! # Example
//!
//! ```no_run
//! use tgdoc::Converter;
//!
//! fn main() -> tgdoc::Result<()> {
//!     let converter = Converter::new().lenient().with_max_heading(3);
//!     let markup = converter.convert_file("report.docx")?;
//!     println!("{}", markup);
//!     Ok(())
//! }
//! ```

use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::model::{Document, Metadata};
use crate::parser::{DocxParser, ParseOptions};
use crate::render::{self, ConversionStats, JsonFormat, RenderOptions, RenderResult, StylePrefixes};

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Telegram MarkdownV2 markup
    #[default]
    Markdown,

    /// Plain text
    Text,

    /// JSON structure
    Json(JsonFormat),
}

impl OutputFormat {
    /// MIME type of the output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Text => "text/plain",
            OutputFormat::Json(_) => "application/json",
        }
    }

    /// File extension for the output, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json(_) => "json",
        }
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted content
    pub content: String,

    /// Source document metadata
    pub metadata: Metadata,

    /// Conversion statistics (markup output only)
    pub stats: Option<ConversionStats>,

    /// MIME type of the output
    pub mime_type: &'static str,
}

impl ConvertResult {
    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

impl From<RenderResult> for ConvertResult {
    fn from(result: RenderResult) -> Self {
        Self {
            content: result.content,
            metadata: result.metadata,
            stats: Some(result.stats),
            mime_type: OutputFormat::Markdown.mime_type(),
        }
    }
}

/// DOCX to Telegram markup converter.
///
/// Holds no state besides its options; one instance can be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Skip malformed optional package parts instead of failing.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Escape with the reserved set of the earlier bot releases.
    pub fn with_legacy_escaping(mut self) -> Self {
        self.render_options = self.render_options.with_legacy_escaping();
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.render_options = self.render_options.with_max_heading(level);
        self
    }

    /// Set the style prefixes used for classification.
    pub fn with_prefixes(mut self, prefixes: StylePrefixes) -> Self {
        self.render_options = self.render_options.with_prefixes(prefixes);
        self
    }

    /// Parse options in use.
    pub fn parse_options(&self) -> &ParseOptions {
        &self.parse_options
    }

    /// Render options in use.
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }

    /// Parse DOCX bytes into a document.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<Document> {
        DocxParser::from_bytes_with_options(data, self.parse_options.clone())?.parse()
    }

    /// Parse a DOCX file into a document.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        DocxParser::open_with_options(path, self.parse_options.clone())?.parse()
    }

    /// Parse a DOCX from a reader into a document.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Document> {
        DocxParser::from_reader_with_options(reader, self.parse_options.clone())?.parse()
    }

    /// Render an already parsed document.
    pub fn render(&self, doc: &Document) -> Result<String> {
        render::to_markdown(doc, &self.render_options)
    }

    /// Convert DOCX bytes to markup.
    ///
    /// Parse failures are returned unchanged; see [`crate::Error::is_parse_error`].
    pub fn convert_bytes(&self, data: &[u8]) -> Result<String> {
        let doc = self.parse_bytes(data)?;
        self.render(&doc)
    }

    /// Convert an owned buffer, releasing it as soon as the package is read.
    pub fn convert_owned(&self, data: Vec<u8>) -> Result<String> {
        let parser = DocxParser::from_bytes_with_options(&data, self.parse_options.clone())?;
        drop(data);
        let doc = parser.parse()?;
        self.render(&doc)
    }

    /// Convert a DOCX file to markup.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let doc = self.parse_file(path)?;
        self.render(&doc)
    }

    /// Convert a DOCX from a reader to markup.
    pub fn convert_reader<R: Read>(&self, reader: R) -> Result<String> {
        let doc = self.parse_reader(reader)?;
        self.render(&doc)
    }

    /// Convert DOCX bytes to markup with statistics.
    pub fn convert_with_stats(&self, data: &[u8]) -> Result<RenderResult> {
        let doc = self.parse_bytes(data)?;
        render::to_markdown_with_stats(&doc, &self.render_options)
    }

    /// Convert a parsed document to the requested output format.
    pub fn convert_document(&self, doc: &Document, format: OutputFormat) -> Result<ConvertResult> {
        match format {
            OutputFormat::Markdown => {
                render::to_markdown_with_stats(doc, &self.render_options).map(ConvertResult::from)
            }
            OutputFormat::Text => Ok(ConvertResult {
                content: render::to_text(doc)?,
                metadata: doc.metadata.clone(),
                stats: None,
                mime_type: format.mime_type(),
            }),
            OutputFormat::Json(json_format) => Ok(ConvertResult {
                content: render::to_json(doc, json_format)?,
                metadata: doc.metadata.clone(),
                stats: None,
                mime_type: format.mime_type(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;
    use crate::parser::ErrorMode;
    use crate::render::ReservedSet;

    #[test]
    fn test_converter_builder() {
        let converter = Converter::new()
            .lenient()
            .with_legacy_escaping()
            .with_max_heading(2);

        assert_eq!(converter.parse_options().error_mode, ErrorMode::Lenient);
        assert_eq!(converter.render_options().reserved, ReservedSet::Legacy);
        assert_eq!(converter.render_options().max_heading_level, 2);
    }

    #[test]
    fn test_converter_default() {
        let converter = Converter::default();
        assert_eq!(converter.parse_options().error_mode, ErrorMode::Strict);
        assert_eq!(converter.render_options().reserved, ReservedSet::MarkdownV2);
    }

    #[test]
    fn test_convert_garbage_is_parse_error() {
        let err = Converter::new().convert_bytes(b"not a document").unwrap_err();
        assert!(err.is_parse_error());

        let err = Converter::new()
            .convert_owned(b"still not a document".to_vec())
            .unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_convert_document_formats() {
        let doc = Document::from_paragraphs(vec![
            Paragraph::styled("Heading 1", "Title."),
            Paragraph::with_text("Body"),
        ]);
        let converter = Converter::new();

        let md = converter
            .convert_document(&doc, OutputFormat::Markdown)
            .unwrap();
        assert_eq!(md.content, "# Title\\.\n\nBody");
        assert_eq!(md.content_len(), 15);
        assert_eq!(md.mime_type, "text/markdown");
        assert_eq!(md.stats.map(|s| s.heading_count), Some(1));

        let text = converter.convert_document(&doc, OutputFormat::Text).unwrap();
        assert_eq!(text.content, "Title.\n\nBody");
        assert!(text.stats.is_none());

        let json = converter
            .convert_document(&doc, OutputFormat::Json(JsonFormat::Compact))
            .unwrap();
        assert_eq!(json.mime_type, "application/json");
        assert!(json.content.starts_with('{'));
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::Markdown.extension(), "md");
        assert_eq!(OutputFormat::Text.extension(), "txt");
        assert_eq!(OutputFormat::Json(JsonFormat::Pretty).extension(), "json");
    }
}
