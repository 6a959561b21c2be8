//! Simple tags survive `tags2str` followed by `str2tags` in every dialect.

use rstest::rstest;
use tagtools::Dialect;

#[rstest]
fn simple_tags_round_trip(
    #[values(Dialect::Delicious, Dialect::Comma, Dialect::Flickr)] dialect: Dialect,
    #[values(
        &[],
        &["rust"],
        &["rust", "tagging", "parser"],
        &["z", "a", "m", "b"],
        &["machine:tag=value", "x_1"]
    )]
    tags: &[&str],
) {
    let Ok(text) = dialect.tags2str(tags) else {
        panic!("{dialect} should serialize {tags:?}");
    };
    let parsed: Vec<String> = dialect
        .str2tags(text.as_str())
        .iter()
        .map(|tag| tag.normalized().to_owned())
        .collect();
    assert_eq!(parsed, tags, "round trip through {text:?}");
}

#[test]
fn every_dialect_treats_blank_input_as_empty() {
    for dialect in Dialect::ALL {
        assert!(dialect.str2tags(None).is_empty());
        assert!(dialect.str2tags("").is_empty());
        assert!(dialect.str2tags("   ").is_empty());
    }
}

#[test]
fn default_normalizer_lowercases() {
    for dialect in Dialect::ALL {
        assert_eq!(dialect.normalize("TaG"), "tag");
    }
}
