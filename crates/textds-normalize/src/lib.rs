//! Text normalization
//!
//! Canonicalizes raw document text before redaction and chunking. The
//! operation is total (any input produces a string) and idempotent:
//! `normalize(normalize(x)) == normalize(x)`.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref SPACE_RUN: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref BLANK_LINES: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Normalize raw text:
/// - Unicode NFC composition
/// - carriage returns stripped
/// - other ASCII control characters (0x00-0x1F except '\n', plus 0x7F)
///   mapped to a single space
/// - curly quotes and long dashes replaced with ASCII equivalents
/// - runs of space/tab collapsed to one space
/// - 3+ consecutive newlines collapsed to exactly 2
/// - leading/trailing whitespace trimmed
pub fn normalize(raw: &str) -> String {
    let mapped: String = raw
        .nfc()
        .filter(|&c| c != '\r')
        .map(|c| match c {
            '\n' => '\n',
            c if c.is_ascii_control() => ' ',
            '\u{2019}' | '\u{2018}' => '\'',
            '\u{201c}' | '\u{201d}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            c => c,
        })
        .collect();

    let collapsed = SPACE_RUN.replace_all(&mapped, " ");
    let collapsed = BLANK_LINES.replace_all(&collapsed, "\n\n");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\n  "), "");
    }

    #[test]
    fn test_control_chars_become_spaces() {
        assert_eq!(normalize("a\x00b\x07c\x7fd"), "a b c d");
    }

    #[test]
    fn test_carriage_returns_stripped() {
        assert_eq!(normalize("one\r\ntwo\r\n"), "one\ntwo");
    }

    #[test]
    fn test_smart_punctuation() {
        assert_eq!(normalize("it\u{2019}s \u{201c}fine\u{201d} \u{2014} ok"), "it's \"fine\" - ok");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(normalize("a  \t b"), "a b");
        assert_eq!(normalize("a\n\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_nfc_composition() {
        // e + combining acute composes to é
        assert_eq!(normalize("cafe\u{0301}"), "caf\u{00e9}");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "plain text",
            "  padded  \t text \n\n\n\n with breaks  ",
            "smart \u{201c}quotes\u{201d} and \u{2013} dashes",
            "ctrl\x01chars\x1f here",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
