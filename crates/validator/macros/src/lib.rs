//! # fieldguard-macros
//!
//! Derive macros for `fieldguard`. Use them through the re-export,
//! `fieldguard::Record`, rather than depending on this crate directly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derives `fieldguard::Record` for a struct with named fields.
///
/// Every field becomes one entry of the record, in declaration order.
/// Constraints are declared with `#[validate(...)]`:
///
/// | Attribute | Check |
/// |-----------|-------|
/// | `required` | value is not its type's zero value |
/// | `max = N` | number is at most `N` |
/// | `min = N` | number is at least `N` |
/// | `maxLen = N` / `max_len = N` | text is at most `N` long |
/// | `minLen = N` / `min_len = N` | text is at least `N` long |
/// | `email` | text looks like an email address |
/// | `rename = "Name"` | report the field under another name |
///
/// Bounds may be integer literals or string literals. String literals are
/// kept verbatim and parsed when validating, so `max = "abc"` compiles and
/// is treated as absent at run time. Flags may be written bare or with a
/// string value; an empty string leaves the flag inactive.
///
/// Field types must implement `fieldguard::AsFieldValue`.
///
/// # Examples
///
/// ```ignore
/// use fieldguard::Record;
///
/// #[derive(Record)]
/// struct SignUp {
///     #[validate(required, minLen = 3, maxLen = 20)]
///     username: String,
///
///     #[validate(required, email)]
///     email: String,
///
///     #[validate(min = 13)]
///     age: Option<u8>,
///
///     // No constraints: always valid, still reported.
///     referrer: Option<String>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
