// src/normalize.rs
//! Candidate normalization before marker matching.

/// Canonicalizes a candidate name or value prior to matching.
///
/// Strips one matching pair of surrounding quote delimiters (single,
/// double, or backtick), trims surrounding whitespace, and lower-cases the
/// result when `is_name` is set. Total over any input; an empty string
/// comes back empty.
#[must_use]
pub fn normalize(raw: &str, is_name: bool) -> String {
    let unquoted = strip_quotes(raw.trim()).trim();
    if is_name {
        unquoted.to_lowercase()
    } else {
        unquoted.to_string()
    }
}

/// Removes a single pair of matching quote characters, if present.
/// Idempotent on already-unquoted input.
fn strip_quotes(s: &str) -> &str {
    if s.len() < 2 {
        return s;
    }
    let bytes = s.as_bytes();
    let first = bytes[0];
    if first == bytes[s.len() - 1] && matches!(first, b'\'' | b'"' | b'`') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_each_quote_kind() {
        assert_eq!(normalize("\"x\"", false), "x");
        assert_eq!(normalize("'x'", false), "x");
        assert_eq!(normalize("`x`", false), "x");
    }

    #[test]
    fn test_idempotent_on_unquoted() {
        assert_eq!(normalize("\"x\"", false), normalize("x", false));
        assert_eq!(normalize("x", false), "x");
    }

    #[test]
    fn test_mismatched_quotes_untouched() {
        assert_eq!(normalize("\"x'", false), "\"x'");
        assert_eq!(normalize("'x", false), "'x");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize("  \"value\"  ", false), "value");
        assert_eq!(normalize("\" padded \"", false), "padded");
    }

    #[test]
    fn test_name_is_case_folded() {
        assert_eq!(normalize("  PrivateKey ", true), "privatekey");
    }

    #[test]
    fn test_value_case_preserved() {
        assert_eq!(normalize("\"PrivateKey\"", false), "PrivateKey");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(normalize("", false), "");
        assert_eq!(normalize("   ", false), "");
        assert_eq!(normalize("\"", false), "\"");
        assert_eq!(normalize("\"\"", false), "");
    }
}
