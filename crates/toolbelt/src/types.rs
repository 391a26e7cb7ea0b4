use indexmap::IndexMap;

/// A string-keyed map that keeps insertion order.
pub type Dictionary<T> = IndexMap<String, T>;

/// Either a single value or a list of values.
///
/// # Examples
///
/// ```
/// use toolbelt::types::Arrayable;
///
/// assert_eq!(Arrayable::One(1).into_vec(), vec![1]);
/// assert_eq!(Arrayable::Many(vec![1, 2]).into_vec(), vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arrayable<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Arrayable<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Arrayable::One(item) => vec![item],
            Arrayable::Many(items) => items,
        }
    }
}

impl<T> From<T> for Arrayable<T> {
    fn from(item: T) -> Self {
        Arrayable::One(item)
    }
}

impl<T> From<Arrayable<T>> for Vec<T> {
    fn from(value: Arrayable<T>) -> Self {
        value.into_vec()
    }
}
