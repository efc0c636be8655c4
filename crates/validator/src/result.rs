//! Validation results

use std::fmt;

/// Verdict for one field.
///
/// A valid field carries an empty message. An invalid field's message is
/// `"<field>: <failure>[, <failure>...]"`, listing every failed check in
/// evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ValidationResult {
    /// Field name.
    pub field: String,
    /// Whether every active check passed.
    pub valid: bool,
    /// Human-readable failure summary; empty when valid.
    pub message: String,
}

impl ValidationResult {
    /// A passing result.
    pub fn passed(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            valid: true,
            message: String::new(),
        }
    }

    /// A failing result; `failures` must not be empty.
    pub fn failed<I, S>(field: impl Into<String>, failures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let field = field.into();
        let joined = failures
            .into_iter()
            .map(|s| s.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(", ");
        debug_assert!(!joined.is_empty(), "a failed result needs at least one failure");
        Self {
            message: format!("{field}: {joined}"),
            field,
            valid: false,
        }
    }

    /// Whether the field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{}: ok", self.field)
        } else {
            f.write_str(&self.message)
        }
    }
}

/// Whether every field in `results` passed.
#[must_use]
pub fn all_valid(results: &[ValidationResult]) -> bool {
    results.iter().all(ValidationResult::is_valid)
}

/// The failing results, in field order.
pub fn failures(results: &[ValidationResult]) -> impl Iterator<Item = &ValidationResult> {
    results.iter().filter(|r| !r.valid)
}
