//! Common string helpers for fixed-width slip fields
//!
//! All widths are counted in characters, not bytes. None of the padding
//! helpers truncate: a value already at or beyond the width is returned as is.

/// Left-pad `s` with `fill` up to `width` characters
pub fn pad_left(s: &str, width: usize, fill: char) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(fill, width - len));
    out.push_str(s);
    out
}

/// Right-pad `s` with `fill` up to `width` characters
pub fn pad_right(s: &str, width: usize, fill: char) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(width);
    out.push_str(s);
    out.extend(std::iter::repeat_n(fill, width - len));
    out
}

/// Split a string into blocks of `size` characters separated by a single space
///
/// Blocks are taken left to right, so only the last block may be short.
///
/// # Example
///
/// ```
/// use esrcore::utils::break_into_blocks;
///
/// assert_eq!(break_into_blocks("123456789012", 5), "12345 67890 12");
/// ```
pub fn break_into_blocks(s: &str, size: usize) -> String {
    if size == 0 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    chars
        .chunks(size)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove every space character
pub fn strip_spaces(s: &str) -> String {
    s.chars().filter(|c| *c != ' ').collect()
}

/// Keep ASCII digits only (e.g. "01-162-8" -> "011628")
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}
