//! Email matcher
//!
//! A permissive heuristic, not an RFC 5321 grammar. The pattern is the
//! contract and is kept bit-exact: top-level segments longer than four
//! letters and internationalised domains are rejected.

use std::sync::LazyLock;

/// The email pattern, anchored at both ends.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$";

static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(EMAIL_PATTERN).unwrap());

/// Returns `true` if `text` matches [`EMAIL_PATTERN`] in full.
///
/// ```
/// use fieldguard::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("user@example.technology"));
/// ```
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_REGEX.is_match(text)
}
