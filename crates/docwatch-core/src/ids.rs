//! Identifier recognisers.

use once_cell::sync::Lazy;
use regex::Regex;

static CVE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^CVE-\d{4}-\d{4,7}").expect("static CVE pattern"));

/// True when `s` starts with a CVE identifier (`CVE-YYYY-NNNN` up to seven
/// trailing digits), case-insensitively. Text after the identifier is allowed.
pub fn is_cve(s: &str) -> bool {
    CVE_PREFIX.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_ids() {
        assert!(is_cve("CVE-2021-3449"));
        assert!(is_cve("CVE-2014-0160"));
        assert!(is_cve("CVE-2023-1234567"));
    }

    #[test]
    fn case_insensitive() {
        assert!(is_cve("cve-2021-44228"));
        assert!(is_cve("Cve-2021-44228"));
    }

    #[test]
    fn prefix_match_allows_trailing_text() {
        assert!(is_cve("CVE-2021-44228 (log4shell)"));
        assert!(is_cve("CVE-2021-12345678"));
    }

    #[test]
    fn rejects_malformed() {
        assert!(!is_cve(""));
        assert!(!is_cve("CVE-21-1234"));
        assert!(!is_cve("CVE-2021-123"));
        assert!(!is_cve("GHSA-xxxx-yyyy-zzzz"));
        assert!(!is_cve(" CVE-2021-3449"));
        assert!(!is_cve("see CVE-2021-3449"));
    }
}
