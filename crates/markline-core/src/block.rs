//! Block classification.
//!
//! Classifies a whole line by its leading syntax into exactly one
//! block shape. Inline substitutions have already run by this point,
//! so classification sees the substituted text.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for headings: 1-6 leading # characters followed by whitespace.
/// Seven or more never match (no prefix of them is followed by
/// whitespace), so such lines fall through to the paragraph rule.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());

/// Regex for unordered list items: a dash followed by whitespace.
static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-\s+(.*)$").unwrap());

/// The block shape of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading with level 1-6
    Heading { level: u8, content: String },
    /// Unordered list item
    ListItem(String),
    /// Plain paragraph
    Paragraph(String),
    /// Empty line
    Empty,
}

/// Classify a line into its block shape.
///
/// First match wins: heading, then list item, then paragraph for any
/// non-empty line, then empty. The line is expected to be trimmed.
pub fn classify(line: &str) -> Block {
    if let Some(caps) = HEADING_RE.captures(line) {
        return Block::Heading {
            level: caps[1].len() as u8,
            content: caps[2].to_string(),
        };
    }

    if let Some(caps) = LIST_ITEM_RE.captures(line) {
        return Block::ListItem(caps[1].to_string());
    }

    if !line.is_empty() {
        return Block::Paragraph(line.to_string());
    }

    Block::Empty
}
