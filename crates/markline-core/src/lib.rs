//! Markline Core
//!
//! Line transformation engine for markline: converts a constrained
//! subset of markdown into HTML one line at a time.
//!
//! # Overview
//!
//! Each input line goes through a fixed pipeline with no state carried
//! between lines:
//!
//! 1. Leading/trailing whitespace is stripped.
//! 2. Inline substitutions run in order: bold (`**`), emphasis (`__`),
//!    MD5 hash spans (`[[...]]`), character-strip spans (`((...))`).
//! 3. The substituted line is classified by its prefix into a heading,
//!    list item, paragraph, or empty line, and rendered as HTML.
//!
//! Exactly one output line is produced per input line, in input order.
//!
//! # Example
//!
//! ```
//! use markline_core::transform_line;
//!
//! assert_eq!(transform_line("### Title"), "<h3>Title</h3>");
//! assert_eq!(transform_line("- item one"), "<li>item one</li>");
//! assert_eq!(
//!     transform_line("**bold** and __em__"),
//!     "<p><b>bold</b> and <em>em</em></p>"
//! );
//! ```

pub mod block;
pub mod error;
pub mod html;
pub mod inline;

pub use block::{classify, Block};
pub use error::{MarklineError, Result};
pub use html::render_block;
pub use inline::{apply_inline, md5_hex, strip_c};

use std::io::{BufRead, Write};

/// Transform one raw input line into one line of HTML.
///
/// Total over all string input: substitution and hashing cannot fail.
/// Empty lines (after trimming) come back as the empty string.
pub fn transform_line(raw: &str) -> String {
    let line = raw.trim();
    let line = apply_inline(line);
    render_block(&classify(&line))
}

/// Drive the transformation over a whole stream.
///
/// Reads `reader` line by line, writes each transformed line to
/// `writer` with a trailing newline, and flushes at the end. Returns
/// the number of lines written.
pub fn convert<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        writeln!(writer, "{}", transform_line(&line))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
