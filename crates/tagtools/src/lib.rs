//! Parse user-entered tag strings and serialize tag lists back to text.
//!
//! Three tagging conventions are supported, each described by a [`Dialect`]:
//!
//! - [`Dialect::Delicious`]: tags separated by spaces, no spaces inside a tag.
//! - [`Dialect::Comma`]: tags separated by commas, spaces allowed inside a tag.
//! - [`Dialect::Flickr`]: tags separated by spaces, with double quotes grouping
//!   tags that contain spaces.
//!
//! Parsing normalizes every tag (lowercase by default), drops empty tags and
//! keeps only the first spelling of each normalized tag.
//!
//! # Examples
//! ```
//! use tagtools::Dialect;
//!
//! let tags = Dialect::Flickr.str2tags(r#"Rust "Type Systems" rust"#);
//! let pairs: Vec<_> = tags.iter().map(|tag| tag.as_pair()).collect();
//! assert_eq!(pairs, vec![("rust", "Rust"), ("type systems", "Type Systems")]);
//!
//! let text = Dialect::Flickr
//!     .tags2str(["rust", "type systems"])
//!     .expect("flickr serialization never fails");
//! assert_eq!(text, r#"rust "type systems""#);
//! ```

mod dialect;
mod errors;
mod normalize;
mod serializer;
mod tag;
mod tokenizer;

#[cfg(test)]
pub(crate) mod test_support;

pub use dialect::{Dialect, DialectConfig};
pub use errors::{TagError, UnknownDialect};
pub use normalize::{Lowercase, Normalize};
pub use serializer::TagSerializer;
pub use tag::{MachineTag, Tag};
pub use tokenizer::tokenize;
