use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Turns arbitrary text into a lowercase, dash separated ASCII slug.
///
/// Accents are stripped through compatibility decomposition, then every run
/// of characters outside `[a-z0-9]` collapses into a single `-` and leading
/// or trailing dashes are dropped.
///
/// # Examples
///
/// ```
/// use toolbelt::strings::slugify;
///
/// assert_eq!(slugify("this That"), "this-that");
/// assert_eq!(slugify("Woéédan"), "woeedan");
/// ```
pub fn slugify(s: &str) -> String {
    let folded: String = s
        .nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>()
        .trim()
        .to_lowercase();

    let mut slug = String::with_capacity(folded.len());
    let mut pending_dash = false;
    for ch in folded.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}
