//! Rendering module for converting documents to Telegram markup and other formats.

mod block;
mod escape;
mod json;
mod markdown;
mod options;
mod result;
mod run;
mod text;

pub use block::{heading_level, Block};
pub use escape::{escape_markdown_v2, ReservedSet, LEGACY_RESERVED, MARKDOWN_V2_RESERVED};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer, PARAGRAPH_SEPARATOR};
pub use options::{RenderOptions, StylePrefixes};
pub use result::{ConversionStats, RenderResult};
pub use run::{format_run, split_outer_whitespace};
pub use text::to_text;
