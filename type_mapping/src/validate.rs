//! Validation utilities for type mapping
//!
//! Character rules for named statement placeholders.

/// Whether `c` may appear in a placeholder name after the leading `:`
#[inline]
pub fn is_placeholder_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check that `name` (without the leading `:`) is a usable placeholder name
pub fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_placeholder_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_names() {
        assert!(is_placeholder_name("name"));
        assert!(is_placeholder_name("user_id"));
        assert!(is_placeholder_name("1"));
        assert!(!is_placeholder_name(""));
        assert!(!is_placeholder_name("first name"));
        assert!(!is_placeholder_name("a-b"));
        assert!(!is_placeholder_name(":name"));
    }
}
