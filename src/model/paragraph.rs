//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

/// Style name Word assigns to body text when nothing else is set.
pub const DEFAULT_STYLE_NAME: &str = "Normal";

/// A paragraph of text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Display name of the paragraph style ("Heading 2", "Quote", "Normal", ...)
    pub style_name: String,

    /// Text runs in authored order
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a new empty paragraph with the given style.
    pub fn new(style_name: impl Into<String>) -> Self {
        Self {
            style_name: style_name.into(),
            runs: Vec::new(),
        }
    }

    /// Create a body paragraph holding a single unstyled run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::styled(DEFAULT_STYLE_NAME, text)
    }

    /// Create a paragraph with the given style and a single unstyled run.
    pub fn styled(style_name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut p = Self::new(style_name);
        p.add_text(text);
        p
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(Run::new(text));
    }

    /// Add a styled run.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Builder variant of [`Paragraph::add_run`].
    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Full paragraph text: the concatenation of all run texts.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.trim().is_empty())
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new(DEFAULT_STYLE_NAME)
    }
}

/// A span of text sharing one style-flag combination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Inline styling
    pub style: RunStyle,
}

impl Run {
    /// Create a new run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    /// Create a run with an explicit style.
    pub fn with_style(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::with_style(
            text,
            RunStyle {
                bold: true,
                ..Default::default()
            },
        )
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::with_style(
            text,
            RunStyle {
                italic: true,
                ..Default::default()
            },
        )
    }

    /// Create an underlined run.
    pub fn underline(text: impl Into<String>) -> Self {
        Self::with_style(
            text,
            RunStyle {
                underline: true,
                ..Default::default()
            },
        )
    }

    /// Create a struck-through run.
    pub fn strikethrough(text: impl Into<String>) -> Self {
        Self::with_style(
            text,
            RunStyle {
                strikethrough: true,
                ..Default::default()
            },
        )
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Inline style flags of a run.
///
/// Flags the source document does not express stay `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Strikethrough text (single or double)
    pub strikethrough: bool,
}

impl RunStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.underline || self.strikethrough
    }
}
