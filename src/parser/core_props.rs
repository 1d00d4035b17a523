//! Core document properties from `docProps/core.xml`.

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Result;
use crate::model::Metadata;

/// Parse core properties into document metadata.
pub fn parse_core_properties(xml: &str) -> Result<Metadata> {
    let mut metadata = Metadata::default();
    let mut reader = Reader::from_str(xml);
    let mut field: Option<Vec<u8>> = None;
    let mut value = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                field = Some(e.local_name().as_ref().to_vec());
                value.clear();
            }
            Event::Text(t) => {
                if field.is_some() {
                    value.push_str(&t.unescape()?);
                }
            }
            Event::End(_) => {
                if let Some(name) = field.take() {
                    apply_field(&mut metadata, &name, value.trim());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(metadata)
}

fn apply_field(metadata: &mut Metadata, name: &[u8], value: &str) {
    if value.is_empty() {
        return;
    }
    match name {
        b"title" => metadata.title = Some(value.to_string()),
        b"creator" => metadata.author = Some(value.to_string()),
        b"subject" => metadata.subject = Some(value.to_string()),
        b"keywords" => metadata.keywords = Some(value.to_string()),
        b"lastModifiedBy" => metadata.last_modified_by = Some(value.to_string()),
        b"created" => metadata.created = parse_w3c_date(value),
        b"modified" => metadata.modified = parse_w3c_date(value),
        _ => {}
    }
}

/// Parse a W3CDTF timestamp (`2024-03-01T10:20:00Z`).
fn parse_w3c_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .ok()
}
