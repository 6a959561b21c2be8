//! Separator-based splitting used by dialects without quoting.

/// Split on every occurrence of `separator`, trimming each piece.
///
/// Consecutive separators produce empty pieces, which are discarded.
pub(crate) fn tokenize_plain(text: &str, separator: char) -> Vec<String> {
    let tokens: Vec<String> = text
        .split(separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect();
    log::trace!(
        "split {} bytes on {separator:?} into {} tokens",
        text.len(),
        tokens.len()
    );
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::logger;
    use rstest::rstest;

    #[rstest]
    #[case("", ' ', &[])]
    #[case("      ", ' ', &[])]
    #[case("   T1    T2    T3   ", ' ', &["T1", "T2", "T3"])]
    #[case(",,,T   1,,,,T 2,,,,T    3,,,", ',', &["T   1", "T 2", "T    3"])]
    #[case(",,,,,,", ',', &[])]
    #[case("a\tb c", ' ', &["a\tb", "c"])]
    fn splits_and_trims(
        _logger: (),
        #[case] text: &str,
        #[case] separator: char,
        #[case] expected: &[&str],
    ) {
        assert_eq!(tokenize_plain(text, separator), expected);
    }

    #[test]
    fn keeps_duplicates_for_the_normalizer() {
        assert_eq!(tokenize_plain("a A a", ' '), vec!["a", "A", "a"]);
    }
}
