//! Prelude module for convenient imports.
//!
//! `use fieldguard::prelude::*;` brings in the derive, the validator, the
//! result type and the traits needed to write a `Record` impl by hand.

pub use crate::config::{Strictness, ValidatorConfig};
pub use crate::error::ValidatorError;
pub use crate::Record;
pub use crate::record::Field;
pub use crate::result::{ValidationResult, all_valid, failures};
pub use crate::tag::{Constraint, Tag};
pub use crate::validator::{Validator, validate};
pub use crate::value::{AsFieldValue, FieldValue, LengthMode};

#[cfg(feature = "json")]
pub use crate::json::{JsonRecord, Schema, validate_json};
