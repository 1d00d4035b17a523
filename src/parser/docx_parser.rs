//! DOCX document parser using zip and quick-xml.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::detect::ensure_docx;
use crate::error::{Error, Result};
use crate::model::{Document, Metadata, Paragraph, Run, RunStyle};

use super::core_props::parse_core_properties;
use super::options::ParseOptions;
use super::styles::StyleSheet;
use super::xml::{attr_value, main_part_target, toggle_value, underline_value};

const RELS_PART: &str = "_rels/.rels";
const DEFAULT_DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";
const CORE_PART: &str = "docProps/core.xml";

/// Elements that may wrap a paragraph's runs without starting a new paragraph.
const RUN_CONTAINERS: &[&[u8]] = &[b"hyperlink", b"ins", b"smartTag", b"fldSimple"];

/// DOCX document parser.
///
/// The package parts are extracted when the parser is created, so the
/// archive (and the caller's byte buffer) is no longer needed afterwards.
pub struct DocxParser {
    document_xml: String,
    styles_xml: Option<String>,
    core_xml: Option<String>,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        ensure_docx(data)?;
        // The buffer is in memory, so any read failure means a corrupt archive.
        let mut archive =
            ZipArchive::new(Cursor::new(data)).map_err(|e| Error::Archive(e.to_string()))?;

        let document_part = match read_part(&mut archive, RELS_PART)? {
            Some(rels) => main_part_target(&rels)?,
            None => None,
        }
        .unwrap_or_else(|| DEFAULT_DOCUMENT_PART.to_string());

        let document_xml = read_part(&mut archive, &document_part)?
            .ok_or_else(|| Error::MissingPart(document_part.clone()))?;
        log::debug!("Read {} ({} bytes)", document_part, document_xml.len());

        let styles_xml = read_optional_part(&mut archive, STYLES_PART, &options)?;
        let core_xml = if options.read_metadata {
            read_optional_part(&mut archive, CORE_PART, &options)?
        } else {
            None
        };

        Ok(Self {
            document_xml,
            styles_xml,
            core_xml,
            options,
        })
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse the document and return a structured Document.
    pub fn parse(&self) -> Result<Document> {
        let styles = self.load_styles()?;
        let paragraphs = BodyReader::new(&styles).read(&self.document_xml)?;

        let mut document = Document::from_paragraphs(paragraphs);
        let paragraph_count = document.metadata.paragraph_count;
        document.metadata = Metadata {
            paragraph_count,
            ..self.load_metadata()?
        };

        log::debug!("Parsed {} paragraphs", paragraph_count);
        Ok(document)
    }

    fn load_styles(&self) -> Result<StyleSheet> {
        let Some(xml) = self.styles_xml.as_deref() else {
            return Ok(StyleSheet::default());
        };
        match StyleSheet::parse(xml) {
            Ok(styles) => Ok(styles),
            Err(e) if self.options.is_lenient() => {
                log::warn!("Ignoring malformed {}: {}", STYLES_PART, e);
                Ok(StyleSheet::default())
            }
            Err(e) => Err(e),
        }
    }

    fn load_metadata(&self) -> Result<Metadata> {
        let Some(xml) = self.core_xml.as_deref() else {
            return Ok(Metadata::default());
        };
        match parse_core_properties(xml) {
            Ok(metadata) => Ok(metadata),
            Err(e) if self.options.is_lenient() => {
                log::warn!("Ignoring malformed {}: {}", CORE_PART, e);
                Ok(Metadata::default())
            }
            Err(e) => Err(e),
        }
    }
}

/// Read a package part as UTF-8; `Ok(None)` if it does not exist.
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut buffer = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut buffer)
        .map_err(|e| Error::Archive(format!("{}: {}", name, e)))?;
    String::from_utf8(buffer)
        .map(Some)
        .map_err(|_| Error::Xml(format!("{} is not valid UTF-8", name)))
}

fn read_optional_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
    options: &ParseOptions,
) -> Result<Option<String>> {
    match read_part(archive, name) {
        Ok(part) => Ok(part),
        Err(e) if options.is_lenient() => {
            log::warn!("Skipping unreadable {}: {}", name, e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Paragraph being collected; `depth` is its index in the element stack.
struct ParagraphState {
    depth: usize,
    style_id: Option<String>,
    in_properties: bool,
    runs: Vec<Run>,
    run: Option<RunState>,
}

/// Run being collected; `depth` is its index in the element stack.
struct RunState {
    depth: usize,
    text: String,
    style: RunStyle,
    in_properties: bool,
    in_text: bool,
}

/// Streams `w:body` and collects its top-level paragraphs.
struct BodyReader<'s> {
    styles: &'s StyleSheet,
    stack: Vec<Vec<u8>>,
    paragraph: Option<ParagraphState>,
    paragraphs: Vec<Paragraph>,
}

impl<'s> BodyReader<'s> {
    fn new(styles: &'s StyleSheet) -> Self {
        Self {
            styles,
            stack: Vec::new(),
            paragraph: None,
            paragraphs: Vec::new(),
        }
    }

    fn read(mut self, xml: &str) -> Result<Vec<Paragraph>> {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = e.local_name().as_ref().to_vec();
                    self.open(&e, &name, false);
                    self.stack.push(name);
                }
                Event::Empty(e) => {
                    let name = e.local_name().as_ref().to_vec();
                    self.open(&e, &name, true);
                }
                Event::Text(t) => {
                    if let Some(run) = self.current_run() {
                        if run.in_text {
                            run.text.push_str(&t.unescape()?);
                        }
                    }
                }
                Event::End(_) => {
                    if let Some(name) = self.stack.pop() {
                        self.close(&name);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }
        Ok(self.paragraphs)
    }

    fn parent(&self) -> Option<&[u8]> {
        self.stack.last().map(Vec::as_slice)
    }

    fn current_run(&mut self) -> Option<&mut RunState> {
        self.paragraph.as_mut().and_then(|p| p.run.as_mut())
    }

    fn open(&mut self, e: &BytesStart<'_>, name: &[u8], is_empty: bool) {
        let depth = self.stack.len();

        if name == b"p" && self.paragraph.is_none() && self.parent() == Some(b"body".as_slice()) {
            if is_empty {
                self.paragraphs
                    .push(Paragraph::new(self.styles.resolve(None)));
            } else {
                self.paragraph = Some(ParagraphState {
                    depth,
                    style_id: None,
                    in_properties: false,
                    runs: Vec::new(),
                    run: None,
                });
            }
            return;
        }

        let parent_is_container = self
            .parent()
            .map(|p| RUN_CONTAINERS.contains(&p))
            .unwrap_or(false);
        let parent_is_properties = self.parent() == Some(b"pPr".as_slice());
        let parent_is_run_properties = self.parent() == Some(b"rPr".as_slice());

        let Some(para) = self.paragraph.as_mut() else {
            return;
        };

        if let Some(run) = para.run.as_mut() {
            let direct_child = depth == run.depth + 1;
            match name {
                b"rPr" if direct_child && !is_empty => run.in_properties = true,
                b"t" if direct_child && !is_empty => run.in_text = true,
                b"tab" if direct_child => run.text.push('\t'),
                b"br" | b"cr" if direct_child => run.text.push('\n'),
                b"b" if run.in_properties && parent_is_run_properties => {
                    run.style.bold = toggle_value(e)
                }
                b"i" if run.in_properties && parent_is_run_properties => {
                    run.style.italic = toggle_value(e)
                }
                b"u" if run.in_properties && parent_is_run_properties => {
                    run.style.underline = underline_value(e)
                }
                b"strike" | b"dstrike" if run.in_properties && parent_is_run_properties => {
                    // either flag turns strikethrough on; a later "off" must not clear the other
                    run.style.strikethrough |= toggle_value(e)
                }
                _ => {}
            }
            return;
        }

        match name {
            b"pPr" if depth == para.depth + 1 && !is_empty => para.in_properties = true,
            b"pStyle" if para.in_properties && parent_is_properties => {
                para.style_id = attr_value(e, b"val");
            }
            b"r" if !is_empty
                && (depth == para.depth + 1 || (depth == para.depth + 2 && parent_is_container)) =>
            {
                para.run = Some(RunState {
                    depth,
                    text: String::new(),
                    style: RunStyle::default(),
                    in_properties: false,
                    in_text: false,
                });
            }
            _ => {}
        }
    }

    fn close(&mut self, name: &[u8]) {
        // after the pop, the stack length is the closed element's depth
        let depth = self.stack.len();
        let Some(para) = self.paragraph.as_mut() else {
            return;
        };

        if let Some(run) = para.run.as_mut() {
            match name {
                b"r" if depth == run.depth => {
                    if let Some(run) = para.run.take() {
                        para.runs.push(Run::with_style(run.text, run.style));
                    }
                }
                b"rPr" if depth == run.depth + 1 => run.in_properties = false,
                b"t" if depth == run.depth + 1 => run.in_text = false,
                _ => {}
            }
            return;
        }

        match name {
            b"pPr" if depth == para.depth + 1 => para.in_properties = false,
            b"p" if depth == para.depth => {
                if let Some(para) = self.paragraph.take() {
                    let style_name = self.styles.resolve(para.style_id.as_deref());
                    self.paragraphs.push(Paragraph {
                        style_name,
                        runs: para.runs,
                    });
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(inner: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            inner
        )
    }

    fn read(inner: &str) -> Vec<Paragraph> {
        BodyReader::new(&StyleSheet::default())
            .read(&body(inner))
            .unwrap()
    }

    #[test]
    fn test_read_runs_and_flags() {
        let paragraphs = read(
            r#"<w:p><w:r><w:t xml:space="preserve">Hello </w:t></w:r><w:r><w:rPr><w:b/><w:i w:val="0"/><w:u w:val="single"/><w:strike/></w:rPr><w:t>world</w:t></w:r></w:p>"#,
        );
        assert_eq!(paragraphs.len(), 1);
        let runs = &paragraphs[0].runs;
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "Hello ");
        assert!(!runs[0].style.has_styling());
        assert_eq!(runs[1].text, "world");
        assert!(runs[1].style.bold);
        assert!(!runs[1].style.italic);
        assert!(runs[1].style.underline);
        assert!(runs[1].style.strikethrough);
    }

    #[test]
    fn test_paragraph_style_id() {
        let paragraphs = read(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Title</w:t></w:r></w:p><w:p><w:r><w:t>Body</w:t></w:r></w:p>"#,
        );
        assert_eq!(paragraphs[0].style_name, "Heading1");
        assert_eq!(paragraphs[1].style_name, "Normal");
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let paragraphs =
            read(r#"<w:p><w:r><w:t>a&amp;b</w:t><w:tab/><w:t>c</w:t><w:br/><w:t>d</w:t></w:r></w:p>"#);
        assert_eq!(paragraphs[0].text(), "a&b\tc\nd");
    }

    #[test]
    fn test_hyperlink_runs_included() {
        let paragraphs = read(
            r#"<w:p><w:r><w:t xml:space="preserve">see </w:t></w:r><w:hyperlink r:id="rId5" xmlns:r="r"><w:r><w:t>docs</w:t></w:r></w:hyperlink></w:p>"#,
        );
        assert_eq!(paragraphs[0].runs.len(), 2);
        assert_eq!(paragraphs[0].text(), "see docs");
    }

    #[test]
    fn test_tables_and_deleted_text_skipped() {
        let paragraphs = read(
            r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl><w:p><w:r><w:delText>gone</w:delText></w:r><w:r><w:t>kept</w:t></w:r></w:p>"#,
        );
        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[0].text(), "kept");
    }

    #[test]
    fn test_empty_paragraph_element() {
        let paragraphs = read(r#"<w:p/><w:p><w:r><w:t>x</w:t></w:r></w:p>"#);
        assert_eq!(paragraphs.len(), 2);
        assert!(paragraphs[0].is_empty());
    }

    #[test]
    fn test_tab_stops_in_properties_ignored() {
        let paragraphs = read(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>x</w:t></w:r></w:p>"#,
        );
        assert_eq!(paragraphs[0].text(), "x");
    }

    #[test]
    fn test_malformed_xml_fails() {
        let result = BodyReader::new(&StyleSheet::default()).read("<w:body><w:p></w:body>");
        assert!(matches!(result, Err(Error::Xml(_))));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(
            DocxParser::from_bytes(b"definitely not a zip"),
            Err(Error::UnknownFormat)
        ));
    }
}
