//! Structural equality over [`Value`](crate::Value)s.
//!
//! Provides the option-driven comparator [`is_equal`] and its recursive
//! preset [`deep_equal`].

mod is_equal;

pub use is_equal::{deep_equal, is_equal, EqualOptions};
