//! Small helpers shared by the WordprocessingML readers.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::Result;

/// Read an attribute by its local name (namespace prefix ignored).
pub(crate) fn attr_value(element: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok())
        .map(|value| value.into_owned())
}

/// Interpret an OOXML on/off property such as `<w:b/>` or `<w:i w:val="0"/>`.
///
/// A missing `w:val` means "on".
pub(crate) fn toggle_value(element: &BytesStart<'_>) -> bool {
    match attr_value(element, b"val") {
        None => true,
        Some(v) => !matches!(v.as_str(), "0" | "false" | "off"),
    }
}

/// Interpret `<w:u w:val="..."/>`; only `none` disables the underline.
pub(crate) fn underline_value(element: &BytesStart<'_>) -> bool {
    match attr_value(element, b"val") {
        None => true,
        Some(v) => v != "none",
    }
}

/// Find the main document part in `_rels/.rels`.
pub(crate) fn main_part_target(rels_xml: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(rels_xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let is_office_document = attr_value(&e, b"Type")
                    .map(|t| t.ends_with("/officeDocument"))
                    .unwrap_or(false);
                if is_office_document {
                    if let Some(target) = attr_value(&e, b"Target") {
                        return Ok(Some(target.trim_start_matches('/').to_string()));
                    }
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}
