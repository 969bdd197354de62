use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

fn code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // en, pt_BR, sr@latin, zh-Hans
    RE.get_or_init(|| Regex::new(r"^[a-z]{2,3}([_@-][A-Za-z0-9]+)*$").unwrap())
}

pub fn is_valid(code: &str) -> bool {
    code_re().is_match(code)
}

/// Malformed codes, first occurrence order, each listed once.
pub fn invalid_codes<'a>(codes: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    codes
        .into_iter()
        .filter(|c| !is_valid(c) && seen.insert(*c))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_codes() {
        for code in ["en", "fr", "ast", "pt_BR", "en-GB", "sr@latin", "zh-Hans", "ca_ES@valencia"] {
            assert!(is_valid(code), "{code} should be valid");
        }
    }

    #[test]
    fn test_invalid_codes() {
        for code in ["", "e", "EN", "english", "en_", "en BR", "42", "_en"] {
            assert!(!is_valid(code), "{code} should be invalid");
        }
    }

    #[test]
    fn test_invalid_codes_dedup_in_order() {
        let out = invalid_codes(["en", "EN", "x", "EN", "fr"]);
        assert_eq!(out, ["EN", "x"]);
    }
}
