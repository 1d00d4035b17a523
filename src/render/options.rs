//! Rendering options and configuration.

use super::ReservedSet;

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Characters escaped with a backslash
    pub reserved: ReservedSet,

    /// Style-name prefixes that select paragraph kinds
    pub prefixes: StylePrefixes,

    /// Maximum heading level (1-6)
    pub max_heading_level: u8,

    /// Collect conversion statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reserved character set.
    pub fn with_reserved(mut self, reserved: ReservedSet) -> Self {
        self.reserved = reserved;
        self
    }

    /// Use the reserved set of the earlier bot releases.
    pub fn with_legacy_escaping(self) -> Self {
        self.with_reserved(ReservedSet::Legacy)
    }

    /// Set the style prefixes.
    pub fn with_prefixes(mut self, prefixes: StylePrefixes) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            reserved: ReservedSet::MarkdownV2,
            prefixes: StylePrefixes::default(),
            max_heading_level: 6,
            collect_stats: false,
        }
    }
}

/// Style-name prefixes for paragraph classification.
///
/// Checked in order: heading, code, quote. Matching is case-sensitive,
/// like Word's own style names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePrefixes {
    /// Heading styles ("Heading 1", "Heading 2", ...)
    pub heading: String,
    /// Code styles rendered as inline code
    pub code: String,
    /// Quote styles rendered as spoilers
    pub quote: String,
}

impl StylePrefixes {
    /// Set the heading prefix, e.g. for localized style names.
    pub fn with_heading(mut self, prefix: impl Into<String>) -> Self {
        self.heading = prefix.into();
        self
    }

    /// Set the code prefix.
    pub fn with_code(mut self, prefix: impl Into<String>) -> Self {
        self.code = prefix.into();
        self
    }

    /// Set the quote prefix.
    pub fn with_quote(mut self, prefix: impl Into<String>) -> Self {
        self.quote = prefix.into();
        self
    }
}

impl Default for StylePrefixes {
    fn default() -> Self {
        Self {
            heading: "Heading".to_string(),
            code: "Code".to_string(),
            quote: "Quote".to_string(),
        }
    }
}
