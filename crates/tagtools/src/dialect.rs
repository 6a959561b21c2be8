//! Tagging dialects and their separator, joiner and quoting settings.
//!
//! A [`Dialect`] is the only configuration the crate has: it decides how raw
//! text is split into tags and how tags are joined back together.

use std::fmt;
use std::str::FromStr;

use crate::errors::{TagError, UnknownDialect};
use crate::serializer::TagSerializer;
use crate::tag::Tag;

/// Immutable settings describing a tagging convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DialectConfig {
    /// Character used to split raw input into tags.
    pub separator: char,
    /// String placed between tags when serializing.
    pub joiner: &'static str,
    /// Whether a tag may contain the space character.
    pub allows_internal_spaces: bool,
    /// Whether double quotes group text containing spaces into one tag.
    pub quote_aware: bool,
}

const DELICIOUS: DialectConfig = DialectConfig {
    separator: ' ',
    joiner: " ",
    allows_internal_spaces: false,
    quote_aware: false,
};

const COMMA: DialectConfig = DialectConfig {
    separator: ',',
    joiner: ", ",
    allows_internal_spaces: true,
    quote_aware: false,
};

const FLICKR: DialectConfig = DialectConfig {
    separator: ' ',
    joiner: " ",
    allows_internal_spaces: true,
    quote_aware: true,
};

/// Supported tagging conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Space separated tags; a tag can't contain spaces.
    Delicious,
    /// Comma separated tags; a tag can't contain commas.
    Comma,
    /// Space separated tags; tags with spaces are wrapped in double quotes.
    Flickr,
}

impl Dialect {
    /// Every dialect, in declaration order.
    pub const ALL: [Self; 3] = [Self::Delicious, Self::Comma, Self::Flickr];

    /// Return the settings for this dialect.
    ///
    /// # Examples
    /// ```
    /// use tagtools::Dialect;
    ///
    /// let config = Dialect::Comma.config();
    /// assert_eq!(config.separator, ',');
    /// assert_eq!(config.joiner, ", ");
    /// assert!(config.allows_internal_spaces);
    /// ```
    #[must_use]
    pub const fn config(self) -> DialectConfig {
        match self {
            Self::Delicious => DELICIOUS,
            Self::Comma => COMMA,
            Self::Flickr => FLICKR,
        }
    }

    /// Return the lowercase name of the dialect.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delicious => "delicious",
            Self::Comma => "comma",
            Self::Flickr => "flickr",
        }
    }

    /// Parse `text` with this dialect and the default lowercase normalizer.
    ///
    /// See [`TagSerializer::str2tags`].
    #[must_use]
    pub fn str2tags<'a>(self, text: impl Into<Option<&'a str>>) -> Vec<Tag> {
        TagSerializer::new(self).str2tags(text)
    }

    /// Serialize `tags` with this dialect.
    ///
    /// # Errors
    /// Returns [`TagError::ForbiddenCharacter`] when a tag contains the
    /// separator of a dialect that does not quote.
    pub fn tags2str<I, S>(self, tags: I) -> Result<String, TagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TagSerializer::new(self).tags2str(tags)
    }

    /// Normalize a single tag the way [`Dialect::str2tags`] does.
    #[must_use]
    pub fn normalize(self, tag: &str) -> String {
        TagSerializer::new(self).normalize(tag)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|dialect| trimmed.eq_ignore_ascii_case(dialect.as_str()))
            .ok_or_else(|| UnknownDialect(trimmed.to_owned()))
    }
}

impl TryFrom<&str> for Dialect {
    type Error = UnknownDialect;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
