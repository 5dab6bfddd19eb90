//! ANSI color helper utilities for terminal output.

use crate::models::ColorCategory;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
/// 256-color orange; plain ANSI has none.
pub const ORANGE: &str = "\x1b[38;5;208m";

pub fn ansi_for_category(category: ColorCategory) -> &'static str {
    match category {
        ColorCategory::Red => RED,
        ColorCategory::Orange => ORANGE,
        ColorCategory::Yellow => YELLOW,
        ColorCategory::Green => GREEN,
        ColorCategory::Blue => BLUE,
    }
}

/// Wraps `value` in the terminal color of `category`.
pub fn colorize_category(value: &str, category: ColorCategory) -> String {
    format!("{}{}{}", ansi_for_category(category), value, RESET)
}

/// Filled square swatch, used by the legend.
pub fn swatch(category: ColorCategory) -> String {
    colorize_category("■", category)
}
