/// Characters that always end a word.
pub const DEFAULT_SPLITTERS: [char; 4] = ['-', '_', '/', '.'];

/// Case of the previous character within the current segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Unknown,
    Upper,
    Lower,
}

impl Case {
    fn of(ch: char) -> Self {
        if is_uppercase_char(ch) {
            Case::Upper
        } else {
            Case::Lower
        }
    }
}

/// A character is uppercase when uppercasing leaves it unchanged, so digits
/// and punctuation count as uppercase.
fn is_uppercase_char(ch: char) -> bool {
    let mut upper = ch.to_uppercase();
    upper.next() == Some(ch) && upper.next().is_none()
}

/// Checks if uppercasing `s` leaves it unchanged. The empty string is
/// uppercase.
///
/// # Examples
///
/// ```
/// use toolbelt::strings::is_uppercase;
///
/// assert!(is_uppercase("ABC"));
/// assert!(is_uppercase("1"));
/// assert!(!is_uppercase("a"));
/// ```
pub fn is_uppercase(s: &str) -> bool {
    s.to_uppercase() == s
}

/// Splits a string into words with the default splitters.
///
/// # Examples
///
/// ```
/// use toolbelt::strings::split_by_case;
///
/// assert_eq!(split_by_case("fooBar"), vec!["foo", "Bar"]);
/// assert_eq!(split_by_case("FOOBar"), vec!["FOO", "Bar"]);
/// assert_eq!(split_by_case("foo--bar-Baz"), vec!["foo", "", "bar", "Baz"]);
/// ```
pub fn split_by_case(s: &str) -> Vec<String> {
    split_by_case_with(s, &DEFAULT_SPLITTERS)
}

/// Splits a string into words on `splitters` and on case transitions.
///
/// A lowercase to uppercase transition starts a new word before the
/// uppercase char. An uppercase to lowercase transition after a run of two
/// or more chars starts the new word at the last char of the run, so
/// `FOOBar` splits into `FOO` and `Bar`. Each splitter closes the current
/// word even when it is empty, which yields empty words for repeated or
/// trailing splitters.
pub fn split_by_case_with(s: &str, splitters: &[char]) -> Vec<String> {
    let mut parts = Vec::new();
    if s.is_empty() {
        return parts;
    }

    let mut buff = String::new();
    let mut buff_len = 0usize;
    let mut previous_case = Case::Unknown;
    // None until the first non-splitter char
    let mut previous_splitter: Option<bool> = None;

    for ch in s.chars() {
        if splitters.contains(&ch) {
            parts.push(std::mem::take(&mut buff));
            buff_len = 0;
            previous_case = Case::Unknown;
            continue;
        }

        let case = Case::of(ch);

        if previous_splitter == Some(false) {
            // Rising edge
            if previous_case == Case::Lower && case == Case::Upper {
                parts.push(std::mem::take(&mut buff));
                buff.push(ch);
                buff_len = 1;
                previous_case = case;
                continue;
            }

            // Falling edge
            if previous_case == Case::Upper && case == Case::Lower && buff_len > 1 {
                if let Some(last) = buff.pop() {
                    parts.push(std::mem::take(&mut buff));
                    buff.push(last);
                    buff.push(ch);
                    buff_len = 2;
                    previous_case = case;
                    continue;
                }
            }
        }

        buff.push(ch);
        buff_len += 1;
        previous_case = case;
        previous_splitter = Some(false);
    }

    parts.push(buff);
    parts
}

/// Uppercases the first char.
pub fn to_upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first char.
pub fn to_lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `foo_bar-baz` becomes `FooBarBaz`.
pub fn to_pascal_case(s: &str) -> String {
    pascal_case_from_parts(&split_by_case(s))
}

/// `FooBarBaz` becomes `fooBarBaz`.
pub fn to_camel_case(s: &str) -> String {
    camel_case_from_parts(&split_by_case(s))
}

/// `FooBAR` becomes `foo-bar`.
///
/// # Examples
///
/// ```
/// use toolbelt::strings::to_kebab_case;
///
/// assert_eq!(to_kebab_case("FooBAR"), "foo-bar");
/// assert_eq!(to_kebab_case("ALink"), "a-link");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    to_kebab_case_with(s, "-")
}

/// Lowercased words joined by `joiner`.
pub fn to_kebab_case_with(s: &str, joiner: &str) -> String {
    kebab_case_from_parts(&split_by_case(s), joiner)
}

/// `FooBarBaz` becomes `foo_bar_baz`.
pub fn to_snake_case(s: &str) -> String {
    to_kebab_case_with(s, "_")
}

pub fn pascal_case_from_parts<S: AsRef<str>>(parts: &[S]) -> String {
    parts.iter().map(|part| to_upper_first(part.as_ref())).collect()
}

pub fn camel_case_from_parts<S: AsRef<str>>(parts: &[S]) -> String {
    to_lower_first(&pascal_case_from_parts(parts))
}

pub fn kebab_case_from_parts<S: AsRef<str>>(parts: &[S], joiner: &str) -> String {
    parts
        .iter()
        .map(|part| part.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(joiner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_by_case() {
        let cases: &[(&str, &[&str])] = &[
            ("", &[]),
            ("foo", &["foo"]),
            ("fooBar", &["foo", "Bar"]),
            ("FooBarBaz", &["Foo", "Bar", "Baz"]),
            ("foo_bar-baz/qux", &["foo", "bar", "baz", "qux"]),
            ("foo--bar-Baz", &["foo", "", "bar", "Baz"]),
            ("FOOBar", &["FOO", "Bar"]),
            ("ALink", &["A", "Link"]),
        ];
        for (input, expected) in cases {
            assert_eq!(split_by_case(input), *expected, "input {input:?}");
        }
    }

    #[test]
    fn test_split_trailing_splitter_yields_empty_word() {
        assert_eq!(split_by_case("foo."), vec!["foo", ""]);
        assert_eq!(split_by_case("-foo"), vec!["", "foo"]);
    }

    #[test]
    fn test_split_digits_count_as_uppercase() {
        assert_eq!(split_by_case("foo1Bar"), vec!["foo", "1", "Bar"]);
        assert_eq!(split_by_case("v2"), vec!["v", "2"]);
    }

    #[test]
    fn test_split_case_resets_after_splitter() {
        assert_eq!(split_by_case("foo-Bar"), vec!["foo", "Bar"]);
        assert_eq!(split_by_case("FOO-bar"), vec!["FOO", "bar"]);
    }

    #[test]
    fn test_split_custom_splitters() {
        assert_eq!(split_by_case_with("foo bar:Baz", &[' ', ':']), vec!["foo", "bar", "Baz"]);
        // without splitters '-' is just another uppercase char
        assert_eq!(split_by_case_with("foo-bar", &[]), vec!["foo", "-bar"]);
    }

    #[test]
    fn test_split_multibyte() {
        assert_eq!(split_by_case("ÉCOLEÉtude"), vec!["ÉCOLE", "Étude"]);
        assert_eq!(split_by_case("straßeNeu"), vec!["straße", "Neu"]);
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("foo"), "Foo");
        assert_eq!(to_pascal_case("foo-bAr"), "FooBAr");
        assert_eq!(to_pascal_case("FooBARb"), "FooBARb");
        assert_eq!(to_pascal_case("foo_bar-baz/qux"), "FooBarBazQux");
        assert_eq!(to_pascal_case("foo--bar"), "FooBar");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("FooBarBaz"), "fooBarBaz");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("foo"), "foo");
        assert_eq!(to_kebab_case("foo/Bar"), "foo-bar");
        assert_eq!(to_kebab_case("foo-bAr"), "foo-b-ar");
        assert_eq!(to_kebab_case("foo--bar"), "foo--bar");
        assert_eq!(to_kebab_case("FooBAR"), "foo-bar");
        assert_eq!(to_kebab_case("ALink"), "a-link");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("FooBarBaz"), "foo_bar_baz");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(pascal_case_from_parts(&["foo", "bar"]), "FooBar");
        assert_eq!(camel_case_from_parts(&["Foo", "bar"]), "fooBar");
        assert_eq!(kebab_case_from_parts(&["Foo", "BAR"], "."), "foo.bar");
    }

    #[test]
    fn test_upper_first() {
        assert_eq!(to_upper_first(""), "");
        assert_eq!(to_upper_first("foo"), "Foo");
        assert_eq!(to_upper_first("Foo"), "Foo");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(to_lower_first(""), "");
        assert_eq!(to_lower_first("foo"), "foo");
        assert_eq!(to_lower_first("Foo"), "foo");
    }

    #[test]
    fn test_is_uppercase() {
        assert!(!is_uppercase("a"));
        assert!(is_uppercase(""));
        assert!(is_uppercase("A1-"));
    }
}
