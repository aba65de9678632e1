//! HTML rendering.
//!
//! Renders a classified [`Block`] into one line of HTML. Content is
//! emitted as-is: angle brackets and ampersands in the input pass
//! through unescaped.

use crate::block::Block;

/// Render a block as a single line of HTML.
///
/// A [`Block::Empty`] renders as the empty string, which the caller
/// still terminates with a newline to keep the 1:1 line mapping.
pub fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, content } => {
            format!("<h{0}>{1}</h{0}>", level, content)
        }
        Block::ListItem(content) => format!("<li>{}</li>", content),
        Block::Paragraph(content) => format!("<p>{}</p>", content),
        Block::Empty => String::new(),
    }
}
