//! Path string parsing.
//!
//! A path string is `/`-delimited. Surrounding whitespace is trimmed first,
//! then surrounding `/` characters, then the remainder is split on `/`.
//! Internal empty segments are kept as literal empty keys.
//!
//! Whitespace means exactly the ASCII set in [`WHITESPACE`]: space, tab,
//! newline, carriage return, NUL and vertical tab. Other Unicode spaces such
//! as U+00A0 are part of the key.

/// Separator between keys in a path string.
pub const SEPARATOR: char = '/';

/// Characters trimmed from both ends of a path string before the separators.
pub const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Split a path string into its keys.
///
/// An empty, whitespace-only, or all-slash string yields no keys.
///
/// # Examples
///
/// ```
/// use arbor::path::parse::split_keys;
///
/// assert_eq!(split_keys("a/b/c"), vec!["a", "b", "c"]);
/// assert_eq!(split_keys("  /a/b/  "), vec!["a", "b"]);
/// assert_eq!(split_keys("foo//bar"), vec!["foo", "", "bar"]);
/// assert!(split_keys("///").is_empty());
/// ```
#[must_use]
pub fn split_keys(path: &str) -> Vec<String> {
    let trimmed = path.trim_matches(WHITESPACE).trim_matches(SEPARATOR);
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(SEPARATOR).map(str::to_owned).collect()
}

/// Join keys back into a path string.
///
/// This is the inverse of [`split_keys`] only for keys that contain no
/// separator and do not start or end the path with an empty key.
#[must_use]
pub fn join_keys<S: AsRef<str>>(keys: &[S]) -> String {
    let mut joined = String::new();
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            joined.push(SEPARATOR);
        }
        joined.push_str(key.as_ref());
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split_keys("a"), vec!["a"]);
        assert_eq!(split_keys("a/b"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_trims_whitespace_then_slashes() {
        assert_eq!(split_keys("\t /a/b/ \n"), vec!["a", "b"]);
        assert_eq!(split_keys("//a//"), vec!["a"]);
    }

    #[test]
    fn test_split_whitespace_set_is_ascii() {
        assert_eq!(split_keys("\0\x0B/a/\r\0"), vec!["a"]);
        assert_eq!(split_keys("\u{a0}a"), vec!["\u{a0}a"]);
        assert_eq!(split_keys("a\u{2003}"), vec!["a\u{2003}"]);
        // Form feed is not in the set.
        assert_eq!(split_keys("\x0Ca"), vec!["\x0Ca"]);
    }

    #[test]
    fn test_split_keeps_inner_whitespace() {
        // Whitespace is only trimmed once, before the slashes.
        assert_eq!(split_keys("/ a /"), vec![" a "]);
    }

    #[test]
    fn test_split_preserves_empty_segments() {
        assert_eq!(split_keys("foo//bar"), vec!["foo", "", "bar"]);
        assert_eq!(split_keys("a///b"), vec!["a", "", "", "b"]);
    }

    #[test]
    fn test_split_empty_inputs() {
        assert!(split_keys("").is_empty());
        assert!(split_keys("   ").is_empty());
        assert!(split_keys("/").is_empty());
        assert!(split_keys(" //// ").is_empty());
    }

    #[test]
    fn test_join() {
        assert_eq!(join_keys(&["a", "b"]), "a/b");
        assert_eq!(join_keys::<&str>(&[]), "");
        assert_eq!(join_keys(&["foo", "", "bar"]), "foo//bar");
    }
}
