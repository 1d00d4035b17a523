//! In-memory DOCX packages for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

pub const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/></w:style>
  <w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/></w:style>
  <w:style w:type="paragraph" w:styleId="Code"><w:name w:val="Code"/></w:style>
  <w:style w:type="paragraph" w:styleId="Quote"><w:name w:val="Quote"/></w:style>
  <w:style w:type="paragraph" w:styleId="IntenseQuote"><w:name w:val="Intense Quote"/></w:style>
  <w:style w:type="paragraph" w:styleId="HeadingPlain"><w:name w:val="Heading"/></w:style>
</w:styles>"#;

/// Builds a minimal DOCX package in memory.
pub struct DocxBuilder {
    body: String,
    styles: Option<String>,
    core: Option<String>,
    document_part: Option<String>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self {
            body: String::new(),
            styles: Some(STYLES.to_string()),
            core: None,
            document_part: Some("word/document.xml".to_string()),
        }
    }

    /// Paragraph with the given style id and runs (see [`run`] and friends).
    pub fn paragraph(mut self, style_id: Option<&str>, runs: &[String]) -> Self {
        self.body.push_str("<w:p>");
        if let Some(id) = style_id {
            self.body
                .push_str(&format!(r#"<w:pPr><w:pStyle w:val="{}"/></w:pPr>"#, id));
        }
        for r in runs {
            self.body.push_str(r);
        }
        self.body.push_str("</w:p>");
        self
    }

    /// Paragraph with a single plain run.
    pub fn text(self, style_id: Option<&str>, text: &str) -> Self {
        self.paragraph(style_id, &[run(text)])
    }

    /// Raw XML appended to `w:body`.
    pub fn raw(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    pub fn styles(mut self, xml: Option<&str>) -> Self {
        self.styles = xml.map(str::to_string);
        self
    }

    pub fn core(mut self, xml: &str) -> Self {
        self.core = Some(xml.to_string());
        self
    }

    /// Store the main part under another name (or leave it out).
    pub fn document_part(mut self, name: Option<&str>) -> Self {
        self.document_part = name.map(str::to_string);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let target = self
            .document_part
            .clone()
            .unwrap_or_else(|| "word/document.xml".to_string());
        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="{}"/>
</Relationships>"#,
            target
        );

        let mut parts: Vec<(String, String)> = vec![
            ("[Content_Types].xml".to_string(), CONTENT_TYPES.to_string()),
            ("_rels/.rels".to_string(), rels),
        ];
        if let Some(name) = self.document_part {
            let document = format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}<w:sectPr/></w:body></w:document>"#,
                W_NS, self.body
            );
            parts.push((name, document));
        }
        if let Some(styles) = self.styles {
            parts.push(("word/styles.xml".to_string(), styles));
        }
        if let Some(core) = self.core {
            parts.push(("docProps/core.xml".to_string(), core));
        }

        for (name, content) in parts {
            zip.start_file(name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }
}

impl Default for DocxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn styled_run(props: &str, text: &str) -> String {
    let rpr = if props.is_empty() {
        String::new()
    } else {
        format!("<w:rPr>{}</w:rPr>", props)
    };
    format!(
        r#"<w:r>{}<w:t xml:space="preserve">{}</w:t></w:r>"#,
        rpr,
        escape_xml(text)
    )
}

pub fn run(text: &str) -> String {
    styled_run("", text)
}

pub fn bold(text: &str) -> String {
    styled_run("<w:b/>", text)
}

pub fn italic(text: &str) -> String {
    styled_run("<w:i/>", text)
}

pub fn underline(text: &str) -> String {
    styled_run(r#"<w:u w:val="single"/>"#, text)
}

pub fn strike(text: &str) -> String {
    styled_run("<w:strike/>", text)
}

/// Run with arbitrary `w:rPr` children.
pub fn with_props(props: &str, text: &str) -> String {
    styled_run(props, text)
}
