//! URL detection and replacement in free text.
//!
//! A substring counts as a URL when it starts with `http://`, `https://`,
//! or `www.` and runs until whitespace, a quote, an angle bracket, a
//! parenthesis, or end of string. The excluded-character set is deliberate
//! and fixed: trailing punctuation like `.` or `,` is part of the match.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Token substituted for each URL when the caller does not pick one.
pub const DEFAULT_REPLACEMENT: &str = "url";

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s'"<>()]+|www\.[^\s'"<>()]+"#).unwrap()
});

/// Replace every URL-shaped substring in `input` with `replacement`.
///
/// The replacement is inserted literally, so a token containing `$` is not
/// treated as a capture-group reference. Non-matching characters are
/// preserved verbatim; an input without URLs comes back unchanged.
pub fn redact_urls(input: &str, replacement: &str) -> String {
    URL_PATTERN.replace_all(input, NoExpand(replacement)).into_owned()
}

/// [`redact_urls`] with the default `"url"` token.
pub fn redact(input: &str) -> String {
    redact_urls(input, DEFAULT_REPLACEMENT)
}

/// Whether `input` contains at least one URL-shaped substring.
pub fn contains_url(input: &str) -> bool {
    URL_PATTERN.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_url_in_sentence() {
        assert_eq!(
            redact("check this out http://example.com/path?x=1 now"),
            "check this out url now"
        );
    }

    #[test]
    fn test_www_url_consumes_trailing_period() {
        // `.` is not in the excluded set, so the trailing period is eaten.
        assert_eq!(redact("visit www.example.org."), "visit url");
    }

    #[test]
    fn test_no_links_unchanged() {
        assert_eq!(redact("no links here"), "no links here");
    }

    #[test]
    fn test_quotes_terminate_match() {
        assert_eq!(
            redact(r#"see 'https://a.com' and "www.b.com""#),
            r#"see 'url' and "url""#
        );
    }

    #[test]
    fn test_multiple_urls() {
        assert_eq!(redact("http://a.com http://b.com"), "url url");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(redact(""), "");
    }

    #[test]
    fn test_angle_brackets_and_parens_terminate_match() {
        assert_eq!(redact("<https://a.com>"), "<url>");
        assert_eq!(redact("(see www.a.com)"), "(see url)");
    }

    #[test]
    fn test_bare_scheme_does_not_match() {
        // The character class requires at least one character after the
        // prefix, so a bare scheme at end of string stays put.
        assert_eq!(redact("trailing http://"), "trailing http://");
        assert_eq!(redact("trailing www."), "trailing www.");
    }

    #[test]
    fn test_single_trailing_character_matches() {
        assert_eq!(redact("www.a"), "url");
        assert_eq!(redact("http://x"), "url");
    }

    #[test]
    fn test_identity_on_url_free_text() {
        for s in ["", "hello world", "ftp://not.matched", "w w w . dot"] {
            assert_eq!(redact(s), s);
        }
    }

    #[test]
    fn test_no_scheme_survives_redaction() {
        let out = redact("https://a.com and http://b.org and www.c.net");
        assert!(!out.contains("http://"));
        assert!(!out.contains("https://"));
        assert!(!out.contains("www."));
    }

    #[test]
    fn test_idempotent_with_default_token() {
        let s = "mix of www.a.com text and 'https://b.com' ends";
        let once = redact(s);
        assert_eq!(redact(&once), once);
    }

    #[test]
    fn test_custom_replacement_token() {
        assert_eq!(
            redact_urls("go to https://example.com today", "[link]"),
            "go to [link] today"
        );
    }

    #[test]
    fn test_dollar_in_replacement_is_literal() {
        assert_eq!(redact_urls("https://a.com", "$0"), "$0");
    }

    #[test]
    fn test_contains_url() {
        assert!(contains_url("see www.example.com"));
        assert!(contains_url("https://x.y"));
        assert!(!contains_url("plain text"));
        assert!(!contains_url("www."));
    }
}
