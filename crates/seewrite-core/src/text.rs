use std::borrow::Cow;

/// Marker appended to text that was cut short
pub const ELLIPSIS: &str = "...";

/// Keep at most `limit` characters of `text`, appending [`ELLIPSIS`] when cut
///
/// Counts Unicode scalar values, never bytes, so multi-byte text is never
/// split inside a character.
pub fn truncate_with_ellipsis(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}
