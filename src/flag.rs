//! Flag-format validation.

/// Whether `flag` is exactly `flag{…}` with one or more of `[A-Za-z0-9_]`
/// inside, anchored at both ends. The prefix is case-sensitive and hyphens
/// are rejected.
pub fn is_valid_flag(flag: &str) -> bool {
    let Some(inner) = flag.strip_prefix("flag{").and_then(|rest| rest.strip_suffix('}')) else {
        return false;
    };
    !inner.is_empty() && inner.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_word_characters() {
        assert!(is_valid_flag("flag{abc_123}"));
        assert!(is_valid_flag("flag{X}"));
        assert!(is_valid_flag("flag{_____}"));
    }

    #[test]
    fn rejects_empty_body() {
        assert!(!is_valid_flag("flag{}"));
    }

    #[test]
    fn prefix_is_case_sensitive() {
        assert!(!is_valid_flag("FLAG{abc}"));
        assert!(!is_valid_flag("Flag{abc}"));
    }

    #[test]
    fn rejects_non_word_characters() {
        assert!(!is_valid_flag("flag{abc-123}"));
        assert!(!is_valid_flag("flag{abc 123}"));
        assert!(!is_valid_flag("flag{ñ}"));
    }

    #[test]
    fn anchored_at_both_ends() {
        assert!(!is_valid_flag(" flag{abc}"));
        assert!(!is_valid_flag("flag{abc} "));
        assert!(!is_valid_flag("flag{abc}}"));
        assert!(!is_valid_flag("flag{abc}flag{def}"));
        assert!(!is_valid_flag("flag{"));
        assert!(!is_valid_flag(""));
    }
}
