//! Style table from `word/styles.xml`.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::xml::attr_value;
use crate::error::Result;
use crate::model::DEFAULT_STYLE_NAME;

/// Maps style ids used in `w:pStyle` to their display names.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    names: HashMap<String, String>,
    default_paragraph: Option<String>,
}

impl StyleSheet {
    /// Parse the contents of `word/styles.xml`.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut sheet = Self::default();
        let mut reader = Reader::from_str(xml);

        // (style id, is the default paragraph style)
        let mut current: Option<(String, bool)> = None;
        let mut current_name: Option<String> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) if e.local_name().as_ref() == b"style" => {
                    let id = attr_value(&e, b"styleId");
                    let is_paragraph = attr_value(&e, b"type").as_deref() == Some("paragraph");
                    let is_default = matches!(attr_value(&e, b"default").as_deref(), Some("1" | "true"));
                    current = id.map(|id| (id, is_paragraph && is_default));
                    current_name = None;
                }
                Event::Start(e) | Event::Empty(e)
                    if current.is_some() && e.local_name().as_ref() == b"name" =>
                {
                    current_name = attr_value(&e, b"val");
                }
                Event::End(e) if e.local_name().as_ref() == b"style" => {
                    if let Some((id, is_default)) = current.take() {
                        let name = current_name
                            .take()
                            .map(|n| ui_name(&n))
                            .unwrap_or_else(|| id.clone());
                        if is_default {
                            sheet.default_paragraph = Some(name.clone());
                        }
                        sheet.names.insert(id, name);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        log::debug!("Loaded {} styles", sheet.names.len());
        Ok(sheet)
    }

    /// Number of known styles.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no styles were loaded.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name of the default paragraph style.
    pub fn default_paragraph_name(&self) -> &str {
        self.default_paragraph
            .as_deref()
            .unwrap_or(DEFAULT_STYLE_NAME)
    }

    /// Resolve a paragraph's `w:pStyle` id to a display name.
    ///
    /// Unknown ids fall back to the default paragraph style. With an empty
    /// sheet (no styles part) the raw id is the best name available.
    pub fn resolve(&self, style_id: Option<&str>) -> String {
        match style_id {
            Some(id) => match self.names.get(id) {
                Some(name) => name.clone(),
                None if self.names.is_empty() => id.to_string(),
                None => self.default_paragraph_name().to_string(),
            },
            None => self.default_paragraph_name().to_string(),
        }
    }
}

/// Word stores a few built-in style names in lowercase and shows them
/// capitalized in its UI.
fn ui_name(name: &str) -> String {
    match name {
        "caption" => "Caption".to_string(),
        "header" => "Header".to_string(),
        "footer" => "Footer".to_string(),
        _ => match name.strip_prefix("heading ") {
            Some(level) if level.len() == 1 && matches!(level.as_bytes()[0], b'1'..=b'9') => {
                format!("Heading {}", level)
            }
            _ => name.to_string(),
        },
    }
}
