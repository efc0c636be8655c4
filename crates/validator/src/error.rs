//! Error types
//!
//! A failed constraint is never an error: it is reported through
//! [`ValidationResult`](crate::ValidationResult). [`ValidatorError`] covers
//! the cases where validation cannot produce a trustworthy verdict at all.

use std::num::ParseIntError;

use crate::tag::Tag;

/// Error returned when a validation pass cannot run to completion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// The input is not a record (e.g. a JSON array or scalar).
    #[error("expected a record with named fields, found {found}")]
    NotARecord {
        /// Kind of value that was supplied.
        found: &'static str,
    },

    /// A bound tag does not hold an integer. Only raised in strict mode;
    /// lenient mode skips the check instead.
    #[error("field `{field}`: tag `{tag}` has non-integer value {raw:?}")]
    MalformedTag {
        /// Field carrying the tag.
        field: String,
        /// The offending tag.
        tag: Tag,
        /// The raw text as declared.
        raw: String,
        /// Why the text did not parse.
        #[source]
        source: ParseIntError,
    },

    /// A struct tag string could not be parsed.
    #[error("malformed struct tag {tag:?}: {reason}")]
    TagSyntax {
        /// The full tag string.
        tag: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field_and_tag() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = ValidatorError::MalformedTag {
            field: "Age".to_owned(),
            tag: Tag::Max,
            raw: "abc".to_owned(),
            source,
        };
        assert_eq!(
            err.to_string(),
            "field `Age`: tag `max` has non-integer value \"abc\""
        );
    }

    #[test]
    fn not_a_record_display() {
        let err = ValidatorError::NotARecord { found: "array" };
        assert_eq!(err.to_string(), "expected a record with named fields, found array");
    }
}
