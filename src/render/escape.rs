//! Backslash escaping of reserved markup characters.

/// Characters Telegram MarkdownV2 treats as syntax outside of entities.
pub const MARKDOWN_V2_RESERVED: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// The narrower set used by earlier releases of the bot.
pub const LEGACY_RESERVED: &[char] = &['.', '!', '?', ')', '(', '[', ']', '%', ':', ';', '-'];

/// Which characters get a backslash in front of them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReservedSet {
    /// Full Telegram MarkdownV2 set
    #[default]
    MarkdownV2,
    /// Set of the earlier bot releases. Leaves `*`, `_` and `` ` `` unescaped,
    /// so text containing them can produce malformed markup.
    Legacy,
    /// Caller-supplied characters
    Custom(Vec<char>),
}

impl ReservedSet {
    /// Build a custom set from the characters of a string.
    pub fn custom(chars: &str) -> Self {
        ReservedSet::Custom(chars.chars().collect())
    }

    /// The reserved characters.
    pub fn chars(&self) -> &[char] {
        match self {
            ReservedSet::MarkdownV2 => MARKDOWN_V2_RESERVED,
            ReservedSet::Legacy => LEGACY_RESERVED,
            ReservedSet::Custom(chars) => chars,
        }
    }

    /// Check if a character must be escaped.
    pub fn contains(&self, c: char) -> bool {
        self.chars().contains(&c)
    }

    /// Escape every reserved character with a backslash.
    ///
    /// Not idempotent: escaping twice escapes the backslashes added by the
    /// first pass (for sets that include `\`).
    pub fn escape(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len() + text.len() / 4);
        for c in text.chars() {
            if self.contains(c) {
                result.push('\\');
            }
            result.push(c);
        }
        result
    }
}

/// Escape text with the MarkdownV2 set.
pub fn escape_markdown_v2(text: &str) -> String {
    ReservedSet::MarkdownV2.escape(text)
}
