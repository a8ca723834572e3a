//! One-word-per-line input.

use std::borrow::Cow;

/// A raw input line after its terminator is stripped.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    /// Long enough to be considered. Not yet checked against the alphabet.
    Word(Cow<'a, str>),
    /// Shorter than the configured minimum (blank lines included).
    Short,
}

/// Strip a trailing `\r` left by `\r\n` line endings.
///
/// `raw` is expected to come from `BufRead::split(b'\n')`, so the `\n`
/// itself is already gone.
pub fn strip_terminator(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

/// Classify one raw line. Length is counted in bytes after stripping.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected here;
/// the index rejects anything outside `a..=z` later.
pub fn classify(raw: &[u8], min_word_len: usize) -> Line<'_> {
    let bytes = strip_terminator(raw);
    if bytes.is_empty() || bytes.len() < min_word_len {
        return Line::Short;
    }
    Line::Word(String::from_utf8_lossy(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_lf_and_crlf() {
        assert_eq!(strip_terminator(b"cat"), b"cat");
        assert_eq!(strip_terminator(b"cat\r"), b"cat");
        assert_eq!(strip_terminator(b"cat\r\n"), b"cat");
        assert_eq!(strip_terminator(b"\r"), b"");
    }

    #[test]
    fn blank_lines_are_short() {
        assert_eq!(classify(b"", 1), Line::Short);
        assert_eq!(classify(b"\r", 1), Line::Short);
    }

    #[test]
    fn min_word_len() {
        assert_eq!(classify(b"ab\r", 3), Line::Short);
        assert_eq!(classify(b"abc\r", 3), Line::Word(Cow::Borrowed("abc")));
        assert_eq!(classify(b"a", 1), Line::Word(Cow::Borrowed("a")));
    }

    #[test]
    fn non_utf8_is_passed_through_lossily() {
        match classify(b"ca\xfft", 1) {
            Line::Word(w) => assert_eq!(w, "ca\u{fffd}t"),
            Line::Short => panic!("expected a word"),
        }
    }
}
