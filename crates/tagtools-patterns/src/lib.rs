//! Machine-tag pattern matching for tagtools.
//!
//! Machine tags carry structured metadata in a single tag using the
//! `namespace:predicate=value` syntax. This crate owns the regular expression
//! that recognises them so the tokenizer crate can stay free of pattern
//! matching details.

mod capture;
mod machine;

pub use capture::capture_groups;
pub use machine::{MACHINE_TAG_PATTERN, MachineTagParts, is_machine_tag, match_machine_tag};
