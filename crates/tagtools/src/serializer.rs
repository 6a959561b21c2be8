//! Parsing tag strings into [`Tag`]s and joining tags back into text.

use crate::dialect::{Dialect, DialectConfig};
use crate::errors::TagError;
use crate::normalize::{Lowercase, Normalize, dedupe};
use crate::tag::Tag;
use crate::tokenizer::tokenize;

/// Parses and serializes tags for one [`Dialect`].
///
/// The normalizer defaults to [`Lowercase`] and can be replaced with
/// [`with_normalizer`](Self::with_normalizer). Machine-tag recognition is off
/// until enabled with [`with_machine_tags`](Self::with_machine_tags).
///
/// # Examples
/// ```
/// use tagtools::{Dialect, TagSerializer};
///
/// let serializer = TagSerializer::new(Dialect::Comma).with_machine_tags(true);
/// let tags = serializer.str2tags("geo:city=Oslo, Trip");
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags[0].machine().map(|m| m.value()), Some("oslo"));
/// assert!(tags[1].machine().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSerializer<N = Lowercase> {
    dialect: Dialect,
    normalizer: N,
    machine_tags: bool,
}

impl TagSerializer {
    /// Create a serializer for `dialect` with lowercase normalization.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            normalizer: Lowercase,
            machine_tags: false,
        }
    }
}

impl From<Dialect> for TagSerializer {
    fn from(dialect: Dialect) -> Self {
        Self::new(dialect)
    }
}

impl<N: Normalize> TagSerializer<N> {
    /// Replace the normalizer used for de-duplication and machine-tag values.
    #[must_use]
    pub fn with_normalizer<M: Normalize>(self, normalizer: M) -> TagSerializer<M> {
        TagSerializer {
            dialect: self.dialect,
            normalizer,
            machine_tags: self.machine_tags,
        }
    }

    /// Enable or disable machine-tag decomposition during parsing.
    #[must_use]
    pub fn with_machine_tags(mut self, enabled: bool) -> Self {
        self.machine_tags = enabled;
        self
    }

    /// The dialect this serializer reads and writes.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Whether parsed tags are checked for the machine-tag syntax.
    #[must_use]
    pub const fn machine_tags(&self) -> bool {
        self.machine_tags
    }

    /// Normalize a single tag, which must have no surrounding whitespace.
    #[must_use]
    pub fn normalize(&self, tag: &str) -> String {
        self.normalizer.normalize(tag)
    }

    /// Parse a user-entered tag string.
    ///
    /// Tags come back in the order they first appear. A tag whose normalized
    /// form was already seen is dropped, so the first spelling wins. `None`,
    /// empty and whitespace-only input all yield an empty list.
    ///
    /// # Examples
    /// ```
    /// use tagtools::{Dialect, TagSerializer};
    ///
    /// let serializer = TagSerializer::new(Dialect::Delicious);
    /// let tags = serializer.str2tags("TaG taG GAT tag gat");
    /// let raw: Vec<_> = tags.iter().map(|tag| tag.raw()).collect();
    /// assert_eq!(raw, vec!["TaG", "GAT"]);
    /// assert!(serializer.str2tags(None).is_empty());
    /// ```
    #[must_use]
    pub fn str2tags<'a>(&self, text: impl Into<Option<&'a str>>) -> Vec<Tag> {
        let Some(text) = text.into().filter(|text| !text.is_empty()) else {
            return Vec::new();
        };
        let tags = dedupe(
            tokenize(text, self.dialect),
            &self.normalizer,
            self.machine_tags,
        );
        log::trace!("parsed {} {} tags", tags.len(), self.dialect);
        tags
    }

    /// Join `tags` into a string that parses back to the same tags.
    ///
    /// Flickr wraps tags containing spaces in double quotes; embedded quotes
    /// are written as-is. The other dialects refuse tags containing their
    /// separator.
    ///
    /// # Errors
    /// Returns [`TagError::ForbiddenCharacter`] for the first tag that
    /// contains the separator of a dialect that does not quote.
    ///
    /// # Examples
    /// ```
    /// use tagtools::{Dialect, TagSerializer};
    ///
    /// let flickr = TagSerializer::new(Dialect::Flickr);
    /// assert_eq!(flickr.tags2str(["t1   t2", "t3"]).as_deref(), Ok(r#""t1   t2" t3"#));
    ///
    /// let delicious = TagSerializer::new(Dialect::Delicious);
    /// assert!(delicious.tags2str(["t 1"]).is_err());
    /// ```
    pub fn tags2str<I, S>(&self, tags: I) -> Result<String, TagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let config = self.dialect.config();
        let mut out = String::new();
        for (index, tag) in tags.into_iter().enumerate() {
            if index > 0 {
                out.push_str(config.joiner);
            }
            write_tag(&mut out, tag.as_ref(), config)?;
        }
        Ok(out)
    }
}

fn write_tag(out: &mut String, tag: &str, config: DialectConfig) -> Result<(), TagError> {
    if config.quote_aware {
        if tag.contains(' ') {
            out.push('"');
            out.push_str(tag);
            out.push('"');
        } else {
            out.push_str(tag);
        }
        return Ok(());
    }
    if tag.contains(config.separator) {
        log::debug!("refusing tag {tag:?}: contains separator {:?}", config.separator);
        return Err(TagError::forbidden_character(tag, config.separator));
    }
    out.push_str(tag);
    Ok(())
}
