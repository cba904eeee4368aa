//! Email address helpers

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Loose syntactic check: something@something.tld with no whitespace
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Mask an address for logs, keeping the first character and the domain
///
/// `alice@example.com` becomes `a****@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            let hidden = local.chars().count().saturating_sub(1).max(1);
            format!("{}{}@{}", first, "*".repeat(hidden), domain)
        }
        None => "*".repeat(email.chars().count().min(8)),
    }
}
