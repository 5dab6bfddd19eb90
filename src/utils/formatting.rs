//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Literal printed for a value the feed reported as `null`.
pub const NULL_LITERAL: &str = "null";

/// Magnitude as it appears in popups: shortest decimal form (`4.5`, `1`), or `null`.
pub fn format_magnitude(mag: Option<f64>) -> String {
    match mag {
        Some(m) => m.to_string(),
        None => NULL_LITERAL.to_string(),
    }
}

pub fn format_optional_text(value: Option<&str>) -> String {
    value.unwrap_or(NULL_LITERAL).to_string()
}

/// Pads to a display width, counting wide glyphs correctly.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Cuts a string to `width` display columns, ending with `…` when shortened.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    out
}
