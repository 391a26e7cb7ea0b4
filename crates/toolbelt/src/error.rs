use thiserror::Error;

/// Reasons a [`Value`](crate::Value) cannot be turned into JSON.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    #[error("number {0} has no JSON representation")]
    NonFiniteNumber(f64),
    #[error("{0} values have no JSON representation")]
    Unrepresentable(&'static str),
    #[error("converting circular structure to JSON")]
    Circular,
}
