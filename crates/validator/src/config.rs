//! Validator configuration
//!
//! The crate never loads configuration itself. [`ValidatorConfig`] is plain
//! data that an embedding application builds in code or deserializes from
//! its own config format.

use crate::value::LengthMode;

/// What to do with a bound tag whose value is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Treat the tag as absent and log at debug level.
    #[default]
    Lenient,
    /// Abort the pass with [`ValidatorError::MalformedTag`](crate::ValidatorError::MalformedTag).
    Strict,
}

/// Settings for a [`Validator`](crate::Validator).
///
/// ```
/// use fieldguard::{LengthMode, Strictness, ValidatorConfig};
///
/// let cfg: ValidatorConfig = serde_json::from_str(r#"{ "strictness": "strict" }"#).unwrap();
/// assert_eq!(cfg.strictness, Strictness::Strict);
/// assert_eq!(cfg.length_mode, LengthMode::Bytes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Handling of malformed bound tags.
    pub strictness: Strictness,
    /// How `maxLen` / `minLen` measure text.
    pub length_mode: LengthMode,
}

impl ValidatorConfig {
    /// Lenient, byte-length configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strictness: Strictness::Lenient,
            length_mode: LengthMode::Bytes,
        }
    }
}
