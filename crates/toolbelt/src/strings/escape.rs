/// Escape regular expression metacharacters so `s` can be embedded in a
/// pattern and match literally.
///
/// `-` is written as `\x2d`, which stays valid inside character classes and
/// under Unicode-aware engines that reject `\-`.
///
/// # Examples
///
/// ```
/// use toolbelt::strings::escape_string_regexp;
///
/// assert_eq!(escape_string_regexp("a.b*c"), "a\\.b\\*c");
/// assert_eq!(escape_string_regexp("foo - bar"), "foo \\x2d bar");
/// ```
pub fn escape_string_regexp(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for ch in s.chars() {
        match ch {
            '|' | '\\' | '{' | '}' | '(' | ')' | '[' | ']' | '^' | '$' | '+' | '*' | '?' | '.' => {
                result.push('\\');
                result.push(ch);
            }
            '-' => result.push_str("\\x2d"),
            _ => result.push(ch),
        }
    }

    result
}

/// Drops one level of backslash escaping: every backslash followed by a
/// char other than a newline is replaced by that char.
///
/// # Examples
///
/// ```
/// use toolbelt::strings::remove_escape_characters;
///
/// assert_eq!(remove_escape_characters(r#"\"Hello \"world\"""#), r#""Hello "world"""#);
/// assert_eq!(remove_escape_characters(r#"\\"Hello"#), r#"\"Hello"#);
/// ```
pub fn remove_escape_characters(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next) = chars.peek() {
                if next != '\n' {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(ch);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_metacharacters() {
        assert_eq!(
            escape_string_regexp(r"\ ^ $ * + ? . ( ) | { } [ ]"),
            r"\\ \^ \$ \* \+ \? \. \( \) \| \{ \} \[ \]"
        );
    }

    #[test]
    fn test_escape_mixed() {
        assert_eq!(escape_string_regexp(r"**\//aa^~#$"), r"\*\*\\//aa\^~#\$");
    }

    #[test]
    fn test_escape_dash() {
        assert_eq!(escape_string_regexp("foo - bar"), r"foo \x2d bar");
    }

    #[test]
    fn test_escaped_pattern_matches_literally() {
        let input = "1+1=(2)? [yes] -> $5.00";
        let regex = regex::Regex::new(&format!("^{}$", escape_string_regexp(input))).unwrap();
        assert!(regex.is_match(input));
        assert!(!regex.is_match("11=2"));
    }

    #[test]
    fn test_remove_escape_noop() {
        assert_eq!(remove_escape_characters(r#""Hello world""#), r#""Hello world""#);
        assert_eq!(
            remove_escape_characters(r#"*P(*&)*&^%*&'$GJHASDFHKJ"#),
            r#"*P(*&)*&^%*&'$GJHASDFHKJ"#
        );
    }

    #[test]
    fn test_remove_escape_characters() {
        assert_eq!(remove_escape_characters(r#"\"Hello \"world\"""#), r#""Hello "world"""#);
    }

    #[test]
    fn test_keeps_escaped_backslash() {
        assert_eq!(remove_escape_characters(r#"\\"Hello \"world\"""#), r#"\"Hello "world"""#);
    }

    #[test]
    fn test_remove_escape_edges() {
        assert_eq!(remove_escape_characters("trailing\\"), "trailing\\");
        assert_eq!(remove_escape_characters("line\\\nbreak"), "line\\\nbreak");
    }
}
