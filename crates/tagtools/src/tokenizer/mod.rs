//! Splitting raw tag strings into trimmed, non-empty tokens.

mod plain;
mod quoted;

use crate::dialect::Dialect;

pub(crate) use plain::tokenize_plain;
pub(crate) use quoted::tokenize_quoted;

/// Split `text` into raw tags according to `dialect`.
///
/// Tokens keep their original spelling minus surrounding whitespace. Empty
/// tokens are dropped, but duplicates are kept: de-duplication happens when
/// tokens are normalized into [`Tag`](crate::Tag)s.
///
/// # Examples
/// ```
/// use tagtools::{Dialect, tokenize};
///
/// assert_eq!(tokenize(",,a b,,C", Dialect::Comma), vec!["a b", "C"]);
/// assert_eq!(tokenize(r#"a "b  c" a"#, Dialect::Flickr), vec!["a", "b  c", "a"]);
/// ```
#[must_use]
pub fn tokenize(text: &str, dialect: Dialect) -> Vec<String> {
    let config = dialect.config();
    if config.quote_aware {
        tokenize_quoted(text)
    } else {
        tokenize_plain(text, config.separator)
    }
}
