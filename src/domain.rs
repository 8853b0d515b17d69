//! Syntactic domain name validation.

use once_cell::sync::Lazy;
use regex::Regex;

// Conservative approximation of DNS label rules: each label is 1-63 chars,
// first char alphanumeric or underscore, rest alphanumeric, underscore or
// hyphen. Underscores are allowed so that records like _domainkey.example.com
// validate. A single trailing dot or underscore is tolerated on the whole
// string.
static DOMAIN_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9_][a-zA-Z0-9_-]{0,62})(\.[a-zA-Z0-9_][a-zA-Z0-9_-]{0,62})*[._]?$")
        .expect("domain name pattern compiles")
});

/// Check whether a string is a syntactically valid domain name.
///
/// Purely syntactic, no network access. Empty or whitespace-only input is
/// invalid.
pub fn is_valid_domain_name(domain: &str) -> bool {
    if domain.trim().is_empty() {
        return false;
    }
    DOMAIN_NAME.is_match(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_domains() {
        for domain in [
            "example.com",
            "app-v1.fr.domain.live",
            "_domainkey.example.com",
            "example.com.",
            "localhost",
            "xn--bcher-kva.example",
        ] {
            assert!(is_valid_domain_name(domain), "{domain} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_domains() {
        for domain in [
            "",
            "   ",
            "domain com",
            "example..com",
            ".example.com",
            "exa mple.com",
            "-example.com",
        ] {
            assert!(!is_valid_domain_name(domain), "{domain} should be invalid");
        }
    }

    #[test]
    fn rejects_labels_over_63_chars() {
        let label = "a".repeat(64);
        assert!(!is_valid_domain_name(&format!("{label}.com")));
        let label = "a".repeat(63);
        assert!(is_valid_domain_name(&format!("{label}.com")));
    }
}
