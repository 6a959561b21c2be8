//! Tag normalization and first-seen de-duplication.

use std::collections::HashSet;

use crate::tag::{MachineTag, Tag};

/// Maps a raw tag to the key used to detect duplicates.
///
/// Any `Fn(&str) -> String` is a normalizer, so callers can swap the default
/// [`Lowercase`] for a closure without touching tokenization.
///
/// # Examples
/// ```
/// use tagtools::{Dialect, TagSerializer};
///
/// let keep_case =
///     TagSerializer::new(Dialect::Delicious).with_normalizer(|tag: &str| tag.to_owned());
/// let tags = keep_case.str2tags("Rust rust");
/// assert_eq!(tags.len(), 2);
/// ```
pub trait Normalize {
    /// Normalize a single tag that has no surrounding whitespace.
    fn normalize(&self, tag: &str) -> String;
}

/// Default normalizer: Unicode lowercase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lowercase;

impl Normalize for Lowercase {
    fn normalize(&self, tag: &str) -> String {
        tag.to_lowercase()
    }
}

impl<F> Normalize for F
where
    F: Fn(&str) -> String,
{
    fn normalize(&self, tag: &str) -> String {
        self(tag)
    }
}

/// Normalize `raw_tokens`, keeping the first spelling of each normalized tag.
///
/// Tokens whose normalized form is empty are dropped. When `machine_tags` is
/// set, each kept tag is also checked for the machine-tag syntax.
pub(crate) fn dedupe<N: Normalize>(
    raw_tokens: Vec<String>,
    normalizer: &N,
    machine_tags: bool,
) -> Vec<Tag> {
    let mut seen = HashSet::with_capacity(raw_tokens.len());
    let mut tags = Vec::with_capacity(raw_tokens.len());
    for raw in raw_tokens {
        let normalized = normalizer.normalize(&raw);
        if normalized.is_empty() || seen.contains(&normalized) {
            log::trace!("skipping duplicate or empty tag {raw:?}");
            continue;
        }
        let machine = if machine_tags {
            MachineTag::parse(&raw, normalizer)
        } else {
            None
        };
        seen.insert(normalized.clone());
        tags.push(Tag::new(raw, normalized, machine));
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::logger;
    use rstest::rstest;

    fn raw(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|&token| token.to_owned()).collect()
    }

    fn pairs(tags: &[Tag]) -> Vec<(&str, &str)> {
        tags.iter().map(Tag::as_pair).collect()
    }

    #[rstest]
    fn keeps_first_spelling(_logger: ()) {
        let tags = dedupe(raw(&["TaG", "taG", "GAT", "tag", "gat"]), &Lowercase, false);
        assert_eq!(pairs(&tags), vec![("tag", "TaG"), ("gat", "GAT")]);
    }

    #[test]
    fn drops_tags_that_normalize_to_nothing() {
        let strip_digits =
            |tag: &str| -> String { tag.chars().filter(|ch| !ch.is_ascii_digit()).collect() };
        let tags = dedupe(raw(&["123", "a1", "a2"]), &strip_digits, false);
        assert_eq!(pairs(&tags), vec![("a", "a1")]);
    }

    #[test]
    fn lowercases_unicode() {
        assert_eq!(Lowercase.normalize("ÉTÉ"), "été");
    }

    #[test]
    fn machine_parts_follow_the_flag() {
        let tokens = raw(&["ns:pred=Value"]);
        let plain = dedupe(tokens.clone(), &Lowercase, false);
        assert!(plain.iter().all(|tag| !tag.is_machine_tag()));

        let extended = dedupe(tokens, &Lowercase, true);
        let machine = extended.first().and_then(Tag::machine);
        assert_eq!(machine.map(MachineTag::value), Some("value"));
    }
}
