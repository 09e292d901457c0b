//! Line-boundary handling
//!
//! Sentence boundaries are represented by line breaks. Inserted markers and
//! line breaks already present in the input are treated the same way when the
//! marked text is split.

/// Marker inserted after every sentence ending that is not suppressed
pub const BOUNDARY_MARKER: char = '\n';

/// Check whether `ch` ends a line
///
/// The set matches the usual Unicode line terminators plus the ASCII
/// file/group/record separators.
#[inline]
pub fn is_line_boundary(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Check whether `text` begins with a line boundary
#[inline]
pub(crate) fn starts_with_line_boundary(text: &str) -> bool {
    text.chars().next().is_some_and(is_line_boundary)
}

/// Split `text` on every line boundary
///
/// `\r\n` counts as a single boundary. A trailing boundary does not produce a
/// trailing empty line, so the empty string yields no lines at all.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !is_line_boundary(ch) {
            continue;
        }

        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();

        if ch == '\r' {
            if let Some(&(next_idx, '\n')) = chars.peek() {
                chars.next();
                start = next_idx + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}
