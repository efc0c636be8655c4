//! # fieldguard
//!
//! Declarative, tag-driven validation of struct fields.
//!
//! Attach constraint tags to a struct's fields, then validate an instance to
//! get one [`ValidationResult`] per field, in declaration order. Every check
//! is independent and per-field; there are no cross-field rules.
//!
//! ## Quick Start
//!
//! ```
//! use fieldguard::Record;
//!
//! #[derive(Record)]
//! struct AvengersMember {
//!     #[validate(required, maxLen = 50, rename = "Name")]
//!     name: String,
//!     #[validate(min = 18, max = 100, rename = "Age")]
//!     age: i32,
//!     #[validate(required, email, rename = "Email")]
//!     email: String,
//! }
//!
//! let member = AvengersMember {
//!     name: String::new(),
//!     age: 150,
//!     email: "bad".into(),
//! };
//!
//! let messages: Vec<String> = fieldguard::validate(&member)
//!     .into_iter()
//!     .map(|r| r.message)
//!     .collect();
//!
//! assert_eq!(messages, [
//!     "Name: Field is required",
//!     "Age: Value exceeds the maximum allowed",
//!     "Email: Invalid email format",
//! ]);
//! ```
//!
//! ## Tags
//!
//! Checks run in this order, whatever order the tags are written in:
//!
//! | Tag | Applies to | Fails when |
//! |-----|------------|------------|
//! | `required` | any | value is its type's zero value |
//! | `max` | numbers | value > bound |
//! | `min` | numbers | value < bound |
//! | `maxLen` | text | length > bound |
//! | `minLen` | text | length < bound |
//! | `email` | text | value does not match [`EMAIL_PATTERN`] |
//!
//! A tag on a field of the wrong kind is skipped. A bound that is not an
//! integer (`max = "abc"`) is skipped too, unless the [`Validator`] is in
//! [`Strictness::Strict`] mode.
//!
//! Only structs with named fields can derive [`Record`]:
//!
//! ```compile_fail
//! #[derive(fieldguard::Record)]
//! enum NotARecord {
//!     A,
//! }
//! ```

pub mod config;
pub mod email;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod prelude;
pub mod record;
pub mod result;
pub mod struct_tag;
pub mod tag;
pub mod validator;
pub mod value;

pub use config::{Strictness, ValidatorConfig};
pub use email::{EMAIL_PATTERN, is_valid_email};
pub use error::ValidatorError;
pub use record::{Field, Record};
pub use result::{ValidationResult, all_valid, failures};
pub use struct_tag::parse_struct_tag;
pub use tag::{Constraint, Tag};
pub use validator::{Validator, validate};
pub use value::{AsFieldValue, FieldValue, LengthMode, Number};

/// `#[derive(Record)]`, generating a [`Record`] impl from `#[validate(...)]`
/// field attributes.
#[cfg(feature = "derive")]
pub use fieldguard_macros::Record;
