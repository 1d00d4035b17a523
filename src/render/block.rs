//! Paragraph classification.

use crate::model::{Paragraph, Run};

use super::run::format_run;
use super::{RenderOptions, StylePrefixes};

/// How a paragraph is rendered, decided once from its style name.
#[derive(Debug, Clone, PartialEq)]
pub enum Block<'a> {
    /// Heading with its level and trimmed text
    Heading {
        /// Level (1..=max heading level)
        level: u8,
        /// Trimmed paragraph text
        text: String,
    },
    /// Whole paragraph as inline code
    Code(String),
    /// Whole paragraph as a spoiler
    Quote(String),
    /// Body paragraph rendered run by run
    Plain(&'a [Run]),
}

impl<'a> Block<'a> {
    /// Classify a paragraph. Returns `None` for paragraphs without visible text.
    pub fn classify(para: &'a Paragraph, options: &RenderOptions) -> Option<Self> {
        let full_text = para.text();
        let text = full_text.trim();
        if text.is_empty() {
            return None;
        }

        let style = para.style_name.as_str();
        let StylePrefixes {
            heading,
            code,
            quote,
        } = &options.prefixes;

        let block = if style.starts_with(heading.as_str()) {
            Block::Heading {
                level: heading_level(style).min(options.max_heading_level),
                text: text.to_string(),
            }
        } else if style.starts_with(code.as_str()) {
            Block::Code(text.to_string())
        } else if style.starts_with(quote.as_str()) {
            Block::Quote(text.to_string())
        } else {
            Block::Plain(&para.runs)
        };
        Some(block)
    }

    /// Render the block as a markup fragment.
    pub fn render(&self, options: &RenderOptions) -> String {
        let reserved = &options.reserved;
        match self {
            Block::Heading { level, text } => {
                format!("{} {}", "#".repeat(*level as usize), reserved.escape(text))
            }
            Block::Code(text) => format!("`{}`", reserved.escape(text)),
            Block::Quote(text) => format!("||{}||", reserved.escape(text)),
            Block::Plain(runs) => runs.iter().map(|run| format_run(run, reserved)).collect(),
        }
    }
}

/// Heading level from a style name such as "Heading 2".
///
/// The last whitespace-separated token is used when it is all digits;
/// anything else (no numeral, "Heading2", "Heading x") is level 1, and
/// level 0 is raised to 1. Numerals past `u8::MAX` saturate, so a huge
/// level still reaches the caller's cap instead of dropping to 1.
pub fn heading_level(style_name: &str) -> u8 {
    style_name
        .split_whitespace()
        .last()
        .filter(|token| token.bytes().all(|b| b.is_ascii_digit()))
        // all digits, so a parse failure can only be overflow
        .map(|token| token.parse::<u8>().unwrap_or(u8::MAX).max(1))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(para: &Paragraph) -> Option<String> {
        let options = RenderOptions::default();
        Block::classify(para, &options).map(|b| b.render(&options))
    }

    #[test]
    fn test_heading_with_level() {
        let para = Paragraph::styled("Heading 2", "Title");
        assert_eq!(render(&para).as_deref(), Some("## Title"));
    }

    #[test]
    fn test_heading_without_numeral() {
        let para = Paragraph::styled("Heading", "Title");
        assert_eq!(render(&para).as_deref(), Some("# Title"));
    }

    #[test]
    fn test_heading_text_escaped_as_one_unit() {
        let mut para = Paragraph::new("Heading 1");
        para.add_run(crate::model::Run::bold("Part 1."));
        para.add_text(" Intro!");
        assert_eq!(render(&para).as_deref(), Some("# Part 1\\. Intro\\!"));
    }

    #[test]
    fn test_heading_level_capped() {
        let para = Paragraph::styled("Heading 9", "Deep");
        assert_eq!(render(&para).as_deref(), Some("###### Deep"));

        let options = RenderOptions::new().with_max_heading(2);
        let block = Block::classify(&para, &options).unwrap();
        assert_eq!(block.render(&options), "## Deep");
    }

    #[test]
    fn test_oversized_heading_numeral_capped() {
        let para = Paragraph::styled("Heading 99999999999", "Deep");
        assert_eq!(render(&para).as_deref(), Some("###### Deep"));
    }

    #[test]
    fn test_heading_level_parsing() {
        assert_eq!(heading_level("Heading 3"), 3);
        assert_eq!(heading_level("Heading"), 1);
        assert_eq!(heading_level("Heading2"), 1);
        assert_eq!(heading_level("Heading x"), 1);
        assert_eq!(heading_level("Heading 0"), 1);
        assert_eq!(heading_level("Heading 12"), 12);
        assert_eq!(heading_level("Heading 255"), 255);
        assert_eq!(heading_level("Heading 256"), u8::MAX);
        assert_eq!(heading_level("Heading 99999999999"), u8::MAX);
    }

    #[test]
    fn test_code_paragraph() {
        let para = Paragraph::styled("Code", "print(x)");
        assert_eq!(render(&para).as_deref(), Some("`print\\(x\\)`"));
    }

    #[test]
    fn test_quote_paragraph() {
        let para = Paragraph::styled("Quote", "  secret.  ");
        assert_eq!(render(&para).as_deref(), Some("||secret\\.||"));
    }

    #[test]
    fn test_intense_quote_is_plain() {
        let para = Paragraph::styled("Intense Quote", "x");
        let options = RenderOptions::default();
        assert!(matches!(
            Block::classify(&para, &options),
            Some(Block::Plain(_))
        ));
    }

    #[test]
    fn test_plain_runs_concatenated() {
        let mut para = Paragraph::new("Normal");
        para.add_text("Hello ");
        para.add_run(crate::model::Run::bold("world"));
        para.add_text("!");
        assert_eq!(render(&para).as_deref(), Some("Hello *world*\\!"));
    }

    #[test]
    fn test_empty_paragraph_skipped() {
        assert_eq!(render(&Paragraph::with_text("")), None);
        assert_eq!(render(&Paragraph::styled("Heading 1", "   ")), None);
        assert_eq!(render(&Paragraph::new("Code")), None);
    }

    #[test]
    fn test_custom_prefixes() {
        let options = RenderOptions::new()
            .with_prefixes(StylePrefixes::default().with_heading("Заголовок"));
        let para = Paragraph::styled("Заголовок 2", "Глава");
        let block = Block::classify(&para, &options).unwrap();
        assert_eq!(block.render(&options), "## Глава");
    }
}
