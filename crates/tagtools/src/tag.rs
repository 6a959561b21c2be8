//! Parsed tag values.

use std::fmt;

use tagtools_patterns::match_machine_tag;

use crate::normalize::Normalize;

/// Structured `namespace:predicate=value` content of a machine tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineTag {
    namespace: String,
    predicate: String,
    value: String,
}

impl MachineTag {
    /// Decompose `raw` when it uses the machine-tag syntax.
    ///
    /// The namespace and predicate are kept as matched; the value goes through
    /// `normalizer`.
    pub(crate) fn parse<N: Normalize>(raw: &str, normalizer: &N) -> Option<Self> {
        match_machine_tag(raw).map(|parts| Self {
            namespace: parts.namespace.to_owned(),
            predicate: parts.predicate.to_owned(),
            value: normalizer.normalize(parts.value),
        })
    }

    /// Namespace, the part before the colon.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Predicate, the part between the colon and the equals sign.
    #[must_use]
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    /// Normalized value, the part after the equals sign.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A single tag produced by parsing.
///
/// `raw` is the tag as the user typed it, without surrounding whitespace or
/// quotes. `normalized` is the key used to detect duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    raw: String,
    normalized: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    machine: Option<MachineTag>,
}

impl Tag {
    pub(crate) fn new(raw: String, normalized: String, machine: Option<MachineTag>) -> Self {
        Self {
            raw,
            normalized,
            machine,
        }
    }

    /// The tag as entered, trimmed.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized form used for de-duplication.
    #[must_use]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Machine-tag components, when parsing was asked to look for them and
    /// the raw tag matched.
    #[must_use]
    pub fn machine(&self) -> Option<&MachineTag> {
        self.machine.as_ref()
    }

    /// Whether the tag was recognised as a machine tag.
    #[must_use]
    pub fn is_machine_tag(&self) -> bool {
        self.machine.is_some()
    }

    /// Borrow the tag as a `(normalized, raw)` pair.
    ///
    /// # Examples
    /// ```
    /// use tagtools::Dialect;
    ///
    /// let tags = Dialect::Delicious.str2tags("TaG");
    /// assert_eq!(tags.first().map(|tag| tag.as_pair()), Some(("tag", "TaG")));
    /// ```
    #[must_use]
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.normalized, &self.raw)
    }

    /// Consume the tag, returning its `(normalized, raw)` pair.
    #[must_use]
    pub fn into_pair(self) -> (String, String) {
        (self.normalized, self.raw)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
