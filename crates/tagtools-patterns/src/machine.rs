//! Recognition of `namespace:predicate=value` machine tags.

use std::sync::LazyLock;

use regex::Regex;

use crate::capture::capture_groups;

/// Anchored pattern describing a machine tag.
///
/// Namespace and predicate must start with a lowercase ASCII letter followed by
/// lowercase letters, digits or underscores. The value is any non-empty run of
/// characters up to the end of the line.
pub const MACHINE_TAG_PATTERN: &str = r"^([a-z][a-z0-9_]*):([a-z][a-z0-9_]*)=(.+)$";

// The pattern is a validated literal, so compilation cannot fail.
static MACHINE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MACHINE_TAG_PATTERN).unwrap_or_else(|_| unreachable!()));

/// The three components of a machine tag, borrowed from the matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MachineTagParts<'a> {
    /// Text before the colon.
    pub namespace: &'a str,
    /// Text between the colon and the equals sign.
    pub predicate: &'a str,
    /// Everything after the first equals sign that follows the predicate.
    pub value: &'a str,
}

/// Split `raw` into its machine-tag components.
///
/// Matching is case-sensitive and runs against the tag exactly as entered, so
/// `Geo:Lat=1` is not a machine tag while `geo:lat=ABC` is.
///
/// # Examples
/// ```
/// use tagtools_patterns::match_machine_tag;
///
/// let parts = match_machine_tag("geo:lat=51.5")
///     .expect("example ensures the tag is a machine tag");
/// assert_eq!(parts.namespace, "geo");
/// assert_eq!(parts.predicate, "lat");
/// assert_eq!(parts.value, "51.5");
/// assert!(match_machine_tag("plain").is_none());
/// ```
#[must_use]
pub fn match_machine_tag(raw: &str) -> Option<MachineTagParts<'_>> {
    let groups = capture_groups(&MACHINE_TAG_RE, raw)?;
    match groups.as_slice() {
        &[Some(namespace), Some(predicate), Some(value)] => Some(MachineTagParts {
            namespace,
            predicate,
            value,
        }),
        _ => None,
    }
}

/// Report whether `raw` uses the machine-tag syntax.
#[must_use]
pub fn is_machine_tag(raw: &str) -> bool {
    MACHINE_TAG_RE.is_match(raw)
}
