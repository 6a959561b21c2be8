//! Quote-aware splitting for Flickr-style tag strings.
//!
//! Spaces separate tags unless they appear inside double quotes. Quotes are
//! structural and never part of a tag. Unbalanced quoting is tolerated: once
//! a space follows a quote and no further quote exists in the input, the
//! space splits even though the scanner still believes it is inside quotes.
//! This keeps a stray trailing quote from swallowing the rest of the string,
//! and it also means a lone quote in the middle of a word can join two tags
//! that a human would read as separate. Both behaviours are intentional.

use super::plain::tokenize_plain;

const QUOTE: char = '"';
const SPACE: char = ' ';

/// Split `text` on unquoted spaces, removing quote characters.
pub(crate) fn tokenize_quoted(text: &str) -> Vec<String> {
    if !text.contains(QUOTE) {
        return tokenize_plain(text, SPACE);
    }

    let chars: Vec<char> = text.trim().chars().collect();
    // Position of the final quote; a space past it has no closing quote ahead.
    let last_quote = chars.iter().rposition(|&ch| ch == QUOTE);
    let mut tokens = Vec::new();
    let mut token = String::new();
    let mut previous = None;
    let mut in_quotes = false;

    for (pos, &ch) in chars.iter().enumerate() {
        match ch {
            QUOTE => in_quotes = !in_quotes,
            SPACE if splits_at(pos, in_quotes, previous, last_quote) => {
                if !token.is_empty() {
                    if in_quotes {
                        log::debug!("unbalanced quote before char {pos}, splitting on space");
                    }
                    in_quotes = false;
                    flush_token(&mut token, &mut tokens);
                }
            }
            _ => token.push(ch),
        }
        previous = Some(ch);
    }

    flush_token(&mut token, &mut tokens);
    log::trace!("scanned {} chars into {} tokens", chars.len(), tokens.len());
    tokens
}

/// Decide whether a space at `pos` ends the current token.
///
/// Inside quotes a space only splits when it directly follows a quote and no
/// quote appears anywhere after it.
fn splits_at(
    pos: usize,
    in_quotes: bool,
    previous: Option<char>,
    last_quote: Option<usize>,
) -> bool {
    !in_quotes || (previous == Some(QUOTE) && last_quote.is_none_or(|quote| quote < pos))
}

fn flush_token(token: &mut String, tokens: &mut Vec<String>) {
    let trimmed = token.trim();
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_owned());
    }
    token.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::logger;
    use rstest::rstest;

    #[rstest]
    #[case(r#""T1""#, &["T1"])]
    #[case(r#"   "T1"   "T2"   "T3"  "#, &["T1", "T2", "T3"])]
    #[case(r#""a   b" c"#, &["a   b", "c"])]
    #[case(r#""   ""#, &[])]
    #[case(r#""""#, &[])]
    #[case(r#"""a"""#, &["a"])]
    fn removes_quotes_and_groups_spaces(
        _logger: (),
        #[case] text: &str,
        #[case] expected: &[&str],
    ) {
        assert_eq!(tokenize_quoted(text), expected);
    }

    #[rstest]
    #[case(r#"   T"1   T"2   T"3  "#, &["T1   T2", "T3"])]
    #[case(r#"a" b c"#, &["a", "b", "c"])]
    #[case(r#"a "b c"#, &["a", "b c"])]
    fn falls_back_when_quotes_are_unbalanced(
        _logger: (),
        #[case] text: &str,
        #[case] expected: &[&str],
    ) {
        assert_eq!(tokenize_quoted(text), expected);
    }

    #[test]
    fn delegates_to_plain_split_without_quotes() {
        assert_eq!(tokenize_quoted("  a  b "), vec!["a", "b"]);
    }

    #[test]
    fn keeps_duplicate_tokens() {
        assert_eq!(tokenize_quoted(r#""a" a "A""#), vec!["a", "a", "A"]);
    }

    #[rstest]
    #[case(3, false, Some('x'), Some(10), true)]
    #[case(3, true, Some('x'), Some(1), false)]
    #[case(3, true, Some(QUOTE), Some(2), true)]
    #[case(3, true, Some(QUOTE), Some(7), false)]
    fn split_rule(
        #[case] pos: usize,
        #[case] in_quotes: bool,
        #[case] previous: Option<char>,
        #[case] last_quote: Option<usize>,
        #[case] expected: bool,
    ) {
        assert_eq!(splits_at(pos, in_quotes, previous, last_quote), expected);
    }
}
