//! toolbelt - helpers for dynamic, JSON-like data
//!
//! This crate provides structural equality, deep clone and merge, and case
//! conversion over the [`Value`] model, along with small guard, array and
//! formatting utilities.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use toolbelt::{deep_clone, deep_equal, to_kebab_case, Value};
//!
//! let config = Value::from(json!({"theme": {"primary": "blue"}}));
//! let copy = deep_clone(&config, &[]);
//! assert!(deep_equal(&config, &copy));
//!
//! assert_eq!(to_kebab_case("primaryColor"), "primary-color");
//! ```

pub mod aria;
pub mod array;
pub mod equal;
pub mod error;
pub mod guard;
pub mod object;
pub mod strings;
pub mod types;
pub mod units;
pub mod value;

// Re-exports for convenience
pub use aria::KeyCode;
pub use array::{sort_by, sum, sum_by, to_array, uniq_array, SortOrder};
pub use equal::{deep_equal, is_equal, EqualOptions};
pub use error::ValueError;
pub use guard::{is_empty, is_truthy, strip_null, strip_nullish};
pub use object::{
    deep_clone, extend_object, get_prop, has_own, is_pojo, merge_deep, object_entries, object_keys, omit_props,
    omit_props_regex, pick_props, pick_props_regex, shallow_clone, ExtendOptions, KeyPattern,
};
pub use strings::{
    escape_string_regexp, is_uppercase, remove_escape_characters, slugify, split_by_case, to_camel_case,
    to_kebab_case, to_lower_first, to_pascal_case, to_snake_case, to_upper_first,
};
pub use types::{Arrayable, Dictionary};
pub use units::{convert_to_unit, human_readable_file_size, FileSizeBase, DEFAULT_UNIT};
pub use value::{Object, Value};
