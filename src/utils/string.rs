//! String utility functions for text processing

/// Turn every line break into a space and collapse whitespace runs.
///
/// # Examples
/// ```
/// use nodeconv::utils::string::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("{a:\r\n  1,\tb: 2}"), "{a: 1, b: 2}");
/// ```
pub fn normalize_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !in_space {
                result.push(' ');
            }
            in_space = true;
        } else {
            result.push(c);
            in_space = false;
        }
    }

    result
}

/// Remove one double quote from each end of `s`, independently.
///
/// No escape sequences are interpreted.
pub fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

/// Trim whitespace, then one quote layer.
pub fn clean_value(s: &str) -> &str {
    strip_quotes(s.trim())
}

/// Strip surrounding brace characters and whitespace from a record.
pub fn strip_braces(s: &str) -> &str {
    s.trim().trim_matches(|c| c == '{' || c == '}').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("a\n\nb"), "a b");
        assert_eq!(normalize_whitespace("  a  "), " a ");
        assert_eq!(normalize_whitespace(""), "");
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"abc\""), "abc");
        assert_eq!(strip_quotes("\"abc"), "abc");
        assert_eq!(strip_quotes("abc\""), "abc");
        assert_eq!(strip_quotes("\"\"abc\"\""), "\"abc\"");
        assert_eq!(strip_quotes("\""), "");
        assert_eq!(clean_value("  \"x y\" "), "x y");
    }

    #[test]
    fn test_strip_braces() {
        assert_eq!(strip_braces("{ name: a }"), "name: a");
        assert_eq!(strip_braces("{}"), "");
        assert_eq!(strip_braces("{ }"), "");
    }
}
