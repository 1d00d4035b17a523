//! Inline run formatting.

use crate::model::{Run, RunStyle};

use super::ReservedSet;

/// Convert one run into an escaped, style-wrapped fragment.
///
/// Markers only ever touch non-whitespace: the run's leading and trailing
/// whitespace stays outside them, and whitespace-only runs get no markers.
pub fn format_run(run: &Run, reserved: &ReservedSet) -> String {
    let text = run.text.as_str();
    if text.trim().is_empty() {
        return reserved.escape(text);
    }

    let (leading, core, trailing) = split_outer_whitespace(text);
    let wrapped = apply_style(reserved.escape(core), &run.style);

    let mut result = String::with_capacity(leading.len() + wrapped.len() + trailing.len());
    result.push_str(leading);
    result.push_str(&wrapped);
    result.push_str(trailing);
    result
}

/// Split text into leading whitespace, trimmed core, trailing whitespace.
pub fn split_outer_whitespace(text: &str) -> (&str, &str, &str) {
    let start = text.len() - text.trim_start().len();
    let end = text.trim_end().len();
    if start >= end {
        return (text, "", "");
    }
    (&text[..start], &text[start..end], &text[end..])
}

/// Wrap escaped text in style markers, innermost first.
///
/// The dialect has no combined underline+italic marker (`___x___` is
/// ambiguous), so underline+italic collapses to a single underline pair
/// and no other marker is applied.
fn apply_style(text: String, style: &RunStyle) -> String {
    if style.underline && style.italic {
        return format!("__{}__", text);
    }

    let mut result = text;

    if style.bold {
        result = format!("*{}*", result);
    }
    if style.italic {
        result = format!("_{}_", result);
    }
    if style.underline {
        result = format!("__{}__", result);
    }
    if style.strikethrough {
        result = format!("~{}~", result);
    }

    result
}
