//! Positional capture helpers.

use regex::Regex;

/// Return the capture groups of `re` against `text`, or `None` when it does not match.
///
/// Group 0 (the whole match) is skipped. Groups that do not participate in the
/// match are reported as `None` so positions stay aligned with the pattern.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use tagtools_patterns::capture_groups;
/// let regex = Regex::new(r"^(\w+)=(\d+)?$")
///     .expect("example ensures fallible call succeeds");
/// assert_eq!(capture_groups(&regex, "size=42"), Some(vec![Some("size"), Some("42")]));
/// assert_eq!(capture_groups(&regex, "size="), Some(vec![Some("size"), None]));
/// assert!(capture_groups(&regex, "no match").is_none());
/// ```
#[must_use]
pub fn capture_groups<'t>(re: &Regex, text: &'t str) -> Option<Vec<Option<&'t str>>> {
    let caps = re.captures(text)?;
    Some(
        caps.iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str()))
            .collect(),
    )
}
