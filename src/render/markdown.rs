//! MarkdownV2 rendering for DOCX documents.

use crate::error::Result;
use crate::model::Document;

use super::{Block, ConversionStats, RenderOptions, RenderResult};

/// Separator between paragraph fragments.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Convert a document to MarkdownV2 markup.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to MarkdownV2 markup with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// MarkdownV2 renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: ConversionStats,
}

impl MarkdownRenderer {
    /// Create a new renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ConversionStats::new(),
        }
    }

    /// Render a document.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        Ok(self.render_internal(doc))
    }

    /// Render a document with conversion statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc);
        Ok(RenderResult::new(content, doc.metadata.clone(), self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        let mut fragments = Vec::with_capacity(doc.paragraphs.len());

        for para in &doc.paragraphs {
            let Some(block) = Block::classify(para, &self.options) else {
                if self.options.collect_stats {
                    self.stats.skipped_count += 1;
                }
                continue;
            };

            if self.options.collect_stats {
                self.record(&block, &para.text());
            }
            fragments.push(block.render(&self.options));
        }

        log::debug!(
            "rendered {} of {} paragraphs",
            fragments.len(),
            doc.paragraphs.len()
        );
        fragments.join(PARAGRAPH_SEPARATOR)
    }

    fn record(&mut self, block: &Block<'_>, text: &str) {
        self.stats.paragraph_count += 1;
        match block {
            Block::Heading { .. } => self.stats.heading_count += 1,
            Block::Code(_) => self.stats.code_count += 1,
            Block::Quote(_) => self.stats.quote_count += 1,
            Block::Plain(runs) => self.stats.run_count += runs.len() as u32,
        }
        self.stats.count_text(text);
    }
}
