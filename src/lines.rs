//! Byte offset to line number conversion.

/// 1-based line number containing `offset`.
///
/// Counts line feeds in `text[..offset]` and adds one, so `offset = 0` is
/// always line 1 and an offset at (or past) the end of text lands one past
/// the last break. Carriage returns are ordinary bytes; only `\n` terminates
/// a line, which keeps reported positions byte-exact for any line-ending
/// convention.
pub fn line_number(text: &[u8], offset: usize) -> usize {
    let end = offset.min(text.len());
    text[..end].iter().filter(|&&b| b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_zero_is_line_one() {
        assert_eq!(line_number(b"", 0), 1);
        assert_eq!(line_number(b"abc\ndef\n", 0), 1);
    }

    #[test]
    fn test_counts_breaks_before_offset() {
        let text = b"one\ntwo\nthree\n";
        assert_eq!(line_number(text, 3), 1); // the first `\n` itself
        assert_eq!(line_number(text, 4), 2); // first byte of "two"
        assert_eq!(line_number(text, 8), 3);
        assert_eq!(line_number(text, 13), 3); // last `\n`
    }

    #[test]
    fn test_end_of_text_without_trailing_break() {
        let text = b"a\nb";
        assert_eq!(line_number(text, text.len()), 2);
        // Past-the-end offsets clamp rather than panic
        assert_eq!(line_number(text, text.len() + 10), 2);
    }

    #[test]
    fn test_end_of_text_with_trailing_break() {
        let text = b"a\nb\n";
        assert_eq!(line_number(text, text.len()), 3);
    }

    #[test]
    fn test_carriage_return_is_not_a_break() {
        let text = b"a\r\nb\rc";
        assert_eq!(line_number(text, 1), 1); // at the `\r`
        assert_eq!(line_number(text, 3), 2); // after `\r\n`
        assert_eq!(line_number(text, 5), 2); // bare `\r` did not advance
    }
}
