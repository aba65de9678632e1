//! Inline substitution pipeline.
//!
//! Applies the inline markup rules to a single line of text:
//! bold (`**`), emphasis (`__`), MD5 hash substitution (`[[...]]`),
//! and character stripping (`((...))`).
//!
//! Rule order is fixed. Each rule runs over the output of the previous
//! one, so malformed nesting is resolved by ordering rather than by any
//! grammar. All patterns are non-greedy: the shortest span between a
//! pair of markers wins.

use md5::{Digest, Md5};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for bold spans: **text**
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Regex for emphasis spans: __text__
static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());

/// Regex for hash spans: [[text]]
static HASH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[(.*?)\]\]").unwrap());

/// Regex for strip spans: ((text))
static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(\((.*?)\)\)").unwrap());

/// Lowercase hex MD5 digest of the UTF-8 bytes of `text`.
///
/// One-way: hash spans are not round-trippable, and a second pass over
/// already-hashed text would re-hash it if the markers were reapplied.
pub fn md5_hex(text: &str) -> String {
    format!("{:x}", Md5::digest(text.as_bytes()))
}

/// Delete every `c` and `C` from `text`.
pub fn strip_c(text: &str) -> String {
    text.chars().filter(|c| *c != 'c' && *c != 'C').collect()
}

/// Apply all inline substitutions to a line, in rule order.
///
/// The line is assumed to already have leading/trailing whitespace
/// removed. The result may still carry block-level prefix syntax
/// (`#`, `-`), which [`crate::block::classify`] handles afterwards.
pub fn apply_inline(line: &str) -> String {
    let line = BOLD_RE.replace_all(line, "<b>$1</b>");
    let line = EMPHASIS_RE.replace_all(&line, "<em>$1</em>");
    let line = HASH_RE.replace_all(&line, |caps: &Captures| md5_hex(&caps[1]));
    let line = STRIP_RE.replace_all(&line, |caps: &Captures| strip_c(&caps[1]));
    line.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(apply_inline("Hello world"), "Hello world");
    }

    #[test]
    fn test_bold() {
        assert_eq!(apply_inline("Hello **bold** world"), "Hello <b>bold</b> world");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(apply_inline("Hello __em__ world"), "Hello <em>em</em> world");
    }

    #[test]
    fn test_bold_and_emphasis() {
        assert_eq!(
            apply_inline("**bold** and __em__"),
            "<b>bold</b> and <em>em</em>"
        );
    }

    #[test]
    fn test_bold_is_minimal_match() {
        assert_eq!(
            apply_inline("**a** mid **b**"),
            "<b>a</b> mid <b>b</b>"
        );
    }

    #[test]
    fn test_emphasis_inside_bold() {
        // Bold runs first, so the outer markers resolve before the inner ones
        assert_eq!(apply_inline("**__x__**"), "<b><em>x</em></b>");
    }

    #[test]
    fn test_md5_hex_known_digest() {
        assert_eq!(md5_hex("hello"), "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_hash_substitution() {
        assert_eq!(
            apply_inline("[[hello]]"),
            "5d41402abc4b2a76b9719d911017c592"
        );
    }

    #[test]
    fn test_hash_substitution_embedded() {
        assert_eq!(
            apply_inline("id: [[hello]]!"),
            "id: 5d41402abc4b2a76b9719d911017c592!"
        );
    }

    #[test]
    fn test_hash_empty_content() {
        // MD5 of the empty string
        assert_eq!(apply_inline("[[]]"), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_strip_c() {
        assert_eq!(strip_c("Cocoa"), "ooa");
        assert_eq!(strip_c("abc"), "ab");
        assert_eq!(strip_c("no match"), "no math");
    }

    #[test]
    fn test_strip_substitution() {
        assert_eq!(apply_inline("((Cocoa))"), "ooa");
    }

    #[test]
    fn test_strip_preserves_surrounding_text() {
        assert_eq!(apply_inline("cat ((Chicago)) cat"), "cat hiago cat");
    }

    #[test]
    fn test_multiple_spans_on_one_line() {
        assert_eq!(
            apply_inline("**a** [[hello]] ((cc)) __b__"),
            "<b>a</b> 5d41402abc4b2a76b9719d911017c592  <em>b</em>"
        );
    }

    #[test]
    fn test_unterminated_markers_pass_through() {
        assert_eq!(apply_inline("**open"), "**open");
        assert_eq!(apply_inline("[[open"), "[[open");
        assert_eq!(apply_inline("((open"), "((open");
    }

    #[test]
    fn test_no_html_escaping() {
        assert_eq!(apply_inline("a < b & c > d"), "a < b & c > d");
    }

    #[test]
    fn test_dollar_in_content_is_literal() {
        assert_eq!(apply_inline("**$1**"), "<b>$1</b>");
    }
}
