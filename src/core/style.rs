//! ANSI styling and column layout helpers

use colored::Color;

/// Resets all terminal attributes
pub const RESET: &str = "\x1b[0m";

/// Column width of the level label
pub const LEVEL_WIDTH: usize = 7;

/// Column width of the bracketed prefix, brackets included
pub const PREFIX_WIDTH: usize = 15;

pub const PREFIX_COLOR: Color = Color::Cyan;

pub const TIMESTAMP_COLOR: Color = Color::BrightBlack;

/// Right-pad `text` with spaces to at least `width` characters.
///
/// Text that already meets the width is returned unchanged, never truncated.
pub fn pad_right(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Foreground escape sequence for `color`.
///
/// Emitted unconditionally; whether a line carries color is decided by the
/// logger, not by terminal detection.
pub fn escape(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}
