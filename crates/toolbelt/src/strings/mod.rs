//! String utilities.
//!
//! Provides the case tokenizer and the case conversions built on it, plus
//! slug generation and escaping helpers.

mod case;
mod escape;
mod slug;

pub use case::{
    camel_case_from_parts, is_uppercase, kebab_case_from_parts, pascal_case_from_parts, split_by_case,
    split_by_case_with, to_camel_case, to_kebab_case, to_kebab_case_with, to_lower_first, to_pascal_case,
    to_snake_case, to_upper_first, DEFAULT_SPLITTERS,
};
pub use escape::{escape_string_regexp, remove_escape_characters};
pub use slug::slugify;
