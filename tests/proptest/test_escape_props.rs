//! Property-based tests for password escaping and query parsing

use proptest::prelude::*;
use tabssh::command::escape_special_chars;
use tabssh::matcher::parse_query;

const SPECIALS: &[char] = &[
    '[', ']', '$', '&', '`', '|', ';', '<', '>', '"', '\'', '\\', ' ',
];

/// Inverse of the escaper over the same special-character set
fn unescape(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(&next) = chars.peek() {
                if SPECIALS.contains(&next) {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

proptest! {
    #[test]
    fn test_escape_roundtrips(password in "\\PC{0,64}") {
        let escaped = escape_special_chars(&password);
        prop_assert_eq!(unescape(&escaped), password);
    }

    #[test]
    fn test_escape_never_shrinks(password in "\\PC{0,64}") {
        let escaped = escape_special_chars(&password);
        prop_assert!(escaped.len() >= password.len());
    }

    #[test]
    fn test_no_bare_special_survives_escaping(password in "[\\[\\]$&`|;<>\"'\\\\ a-z]{0,32}") {
        // After escaping, every backslash starts a two-character escape
        // pair and no special character appears outside one.
        let escaped = escape_special_chars(&password);
        let mut chars = escaped.chars();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                prop_assert!(chars.next().is_some(), "dangling backslash in {:?}", escaped);
                continue;
            }
            prop_assert!(!SPECIALS.contains(&ch), "bare {:?} in {:?}", ch, escaped);
        }
    }

    #[test]
    fn test_plain_passwords_untouched(password in "[a-zA-Z0-9@%^*(){}=+,._:/?~-]{0,48}") {
        prop_assert_eq!(escape_special_chars(&password), password);
    }

    #[test]
    fn test_parse_query_never_panics(text in "\\PC{0,48}", max_tabs in 1u32..100) {
        let parsed = parse_query(&text, max_tabs);
        prop_assert!(parsed.tab_count >= 1);
        prop_assert!(parsed.tab_count <= max_tabs);
    }

    #[test]
    fn test_parse_query_clamps_counts(count in 0u64..1_000_000, max_tabs in 1u32..50) {
        let parsed = parse_query(&format!("{} host", count), max_tabs);
        prop_assert!(parsed.tab_count >= 1);
        prop_assert!(parsed.tab_count <= max_tabs);
        prop_assert_eq!(parsed.filter.as_str(), "host");
    }
}
