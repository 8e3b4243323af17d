//! Pure text shaping shared by every front end.

use std::borrow::Cow;

use crate::ANONYMOUS;

/// Number of characters kept by [`preview`].
pub const PREVIEW_CHARS: usize = 150;

/// The first [`PREVIEW_CHARS`] characters followed by `...`, or the content
/// unchanged when it is not longer than that.
pub fn preview(content: &str) -> Cow<'_, str> {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &content[..cut])),
        None => Cow::Borrowed(content),
    }
}

pub fn display_author(author: &str) -> &str {
    if author.trim().is_empty() {
        ANONYMOUS
    } else {
        author
    }
}

/// One item per `\n`-separated segment; empty segments are kept.
pub fn paragraphs(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n')
}
