//! Rendering result with metadata and statistics.

use crate::model::Metadata;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered markup
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Conversion statistics
    pub stats: ConversionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: ConversionStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }
}

/// Statistics collected while converting paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Paragraphs that produced output
    pub paragraph_count: u32,

    /// Headings emitted
    pub heading_count: u32,

    /// Code paragraphs emitted
    pub code_count: u32,

    /// Quote paragraphs emitted
    pub quote_count: u32,

    /// Paragraphs dropped for having no visible text
    pub skipped_count: u32,

    /// Runs formatted in plain paragraphs
    pub run_count: u32,

    /// Approximate word count of the source text
    pub word_count: u32,

    /// Character count of the source text (excluding whitespace)
    pub char_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ConversionStats) {
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.code_count += other.code_count;
        self.quote_count += other.quote_count;
        self.skipped_count += other.skipped_count;
        self.run_count += other.run_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
