//! Document model types for Word content representation.
//!
//! This module defines the intermediate representation that bridges
//! DOCX parsing and markup rendering. It covers only what the converter
//! consumes: paragraphs with a style name, and inline runs with style flags.

mod document;
mod paragraph;

pub use document::{Document, Metadata};
pub use paragraph::{Paragraph, Run, RunStyle, DEFAULT_STYLE_NAME};
