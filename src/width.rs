//! Display widths for column alignment
use unicode_width::UnicodeWidthChar;

/// Columns occupied by one character: 2 for East Asian Wide/Fullwidth, 1 for everything else.
/// Driven by the Unicode East Asian Width table, never by the locale.
pub fn char_width(ch: char) -> usize {
    match UnicodeWidthChar::width(ch) {
        Some(2) => 2,
        _ => 1,
    }
}

/// Sum of `char_width` over the string
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Pad with trailing spaces up to `width` display columns
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Pad with leading spaces up to `width` display columns
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{s}", " ".repeat(fill))
}
