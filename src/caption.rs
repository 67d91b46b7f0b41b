//! Captions shown above the progress bar and the logic fitting them on screen.
//!
//! A caption is usually the path of the file being copied. When it does not
//! fit the terminal, its head is replaced by an ellipsis and the visible part
//! is moved forward to the next separator so that the line starts on a whole
//! path component.
//!
//! # Examples
//!
//! ```rust
//! use copybar::caption::{trim_caption, Caption};
//!
//! let caption = Caption::new("/a/bb/ccc/dddd", '/');
//! assert_eq!(trim_caption(&caption, 20), "/a/bb/ccc/dddd");
//! assert_eq!(trim_caption(&caption, 10), "/dddd");
//! ```

use console::measure_text_width;
use std::path::{Path, MAIN_SEPARATOR};

/// Marker put in front of a caption whose head was cut off.
pub const ELLIPSIS: &str = "...";

/// A human readable label made of separator-delimited components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    /// Text of the caption.
    pub message: String,
    /// Character delimiting the components of `message`.
    pub separator: char,
}

impl Caption {
    /// Create a new [`Caption`].
    pub fn new(message: impl Into<String>, separator: char) -> Self {
        Self {
            message: message.into(),
            separator,
        }
    }

    /// Create a caption from a filesystem path, delimited by the platform separator.
    pub fn path(path: impl AsRef<Path>) -> Self {
        Self::new(path.as_ref().display().to_string(), MAIN_SEPARATOR)
    }
}

impl From<&str> for Caption {
    fn from(message: &str) -> Self {
        Self::new(message, MAIN_SEPARATOR)
    }
}

impl From<String> for Caption {
    fn from(message: String) -> Self {
        Self::new(message, MAIN_SEPARATOR)
    }
}

/// Fit `caption` into `width` terminal columns, keeping the tail of the message.
///
/// The returned string never takes more than `width` columns. Widths are
/// measured with [`console::measure_text_width`], so wide characters count
/// double and multi-byte text is never split inside a character.
pub fn trim_caption(caption: &Caption, width: usize) -> String {
    let message = caption.message.as_str();
    if measure_text_width(message) <= width {
        return message.to_string();
    }

    // Room for the ellipsis plus one column of slack.
    let reserved = ELLIPSIS.len() + 1;
    if width <= reserved {
        // Too narrow for an ellipsis, show what fits of the tail.
        return tail_within(message, width).to_string();
    }

    let trimmed = format!("{ELLIPSIS}{}", tail_within(message, width - reserved));

    // Drop the partial component left behind the ellipsis.
    match trimmed.find(caption.separator) {
        Some(index) if index > 0 => trimmed[index..].to_string(),
        _ => trimmed,
    }
}

/// Longest suffix of `text` that fits in `columns`.
fn tail_within(text: &str, columns: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    let mut buf = [0u8; 4];
    for (index, c) in text.char_indices().rev() {
        used += measure_text_width(c.encode_utf8(&mut buf));
        if used > columns {
            break;
        }
        start = index;
    }
    &text[start..]
}
