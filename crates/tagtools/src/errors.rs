//! Error types surfaced by tag serialization and dialect selection.

use thiserror::Error;

/// Errors raised while turning a list of tags back into text.
///
/// Parsing never fails; only serialization can reject its input.
///
/// # Examples
/// ```
/// use tagtools::{Dialect, TagError};
///
/// let err = Dialect::Comma.tags2str(["t,1"]).unwrap_err();
/// assert!(matches!(err, TagError::ForbiddenCharacter { separator: ',', .. }));
/// assert_eq!(err.to_string(), "tag can't include the separator ',': 't,1'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TagError {
    /// A tag contains the dialect's separator and cannot be written unquoted.
    #[error("tag can't include the separator '{separator}': '{tag}'")]
    ForbiddenCharacter {
        /// The offending tag, as passed by the caller.
        tag: String,
        /// Separator of the dialect that rejected the tag.
        separator: char,
    },
}

impl TagError {
    pub(crate) fn forbidden_character(tag: &str, separator: char) -> Self {
        Self::ForbiddenCharacter {
            tag: tag.to_owned(),
            separator,
        }
    }
}

/// Error returned when a dialect name is not recognised.
///
/// Holds the trimmed name that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag dialect: {0}")]
pub struct UnknownDialect(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_forbidden_space() {
        let err = TagError::forbidden_character("t 1", ' ');
        assert_eq!(err.to_string(), "tag can't include the separator ' ': 't 1'");
    }

    #[test]
    fn formats_unknown_dialect() {
        let err = UnknownDialect("myspace".into());
        assert_eq!(err.to_string(), "unknown tag dialect: myspace");
    }
}
