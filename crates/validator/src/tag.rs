//! Constraint tags
//!
//! The six tag names recognised on a record field, and the [`Constraint`]
//! pairing a tag with the raw text it was declared with.

use std::borrow::Cow;
use std::fmt;

/// Tag name activating the zero-value check.
pub const REQUIRED_TAG: &str = "required";
/// Tag name activating the numeric upper bound.
pub const MAX_TAG: &str = "max";
/// Tag name activating the numeric lower bound.
pub const MIN_TAG: &str = "min";
/// Tag name activating the text length upper bound.
pub const MAX_LEN_TAG: &str = "maxLen";
/// Tag name activating the text length lower bound.
pub const MIN_LEN_TAG: &str = "minLen";
/// Tag name activating the email format check.
pub const EMAIL_TAG: &str = "email";

// ============================================================================
// TAG
// ============================================================================

/// A recognised constraint tag.
///
/// Variants are declared in evaluation order; [`Tag::ALL`] iterates them in
/// the same order the validator runs the checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    /// Value must differ from its type's zero value.
    Required,
    /// Numeric value must be `<=` the bound.
    Max,
    /// Numeric value must be `>=` the bound.
    Min,
    /// Text length must be `<=` the bound.
    MaxLen,
    /// Text length must be `>=` the bound.
    MinLen,
    /// Text must look like an email address.
    Email,
}

impl Tag {
    /// All tags, in evaluation order.
    pub const ALL: [Tag; 6] = [
        Tag::Required,
        Tag::Max,
        Tag::Min,
        Tag::MaxLen,
        Tag::MinLen,
        Tag::Email,
    ];

    /// The tag's key as written in a struct tag.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Tag::Required => REQUIRED_TAG,
            Tag::Max => MAX_TAG,
            Tag::Min => MIN_TAG,
            Tag::MaxLen => MAX_LEN_TAG,
            Tag::MinLen => MIN_LEN_TAG,
            Tag::Email => EMAIL_TAG,
        }
    }

    /// Looks a tag up by key. Keys are case-sensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.key() == key)
    }

    /// Whether the tag's raw value is an integer bound.
    #[must_use]
    pub const fn takes_bound(self) -> bool {
        matches!(self, Tag::Max | Tag::Min | Tag::MaxLen | Tag::MinLen)
    }

    /// Message reported when the check behind this tag fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Tag::Required => "Field is required",
            Tag::Max => "Value exceeds the maximum allowed",
            Tag::Min => "Value is below the minimum allowed",
            Tag::MaxLen => "Exceeds maximum length allowed",
            Tag::MinLen => "Below the minimum length allowed",
            Tag::Email => "Invalid email format",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// CONSTRAINT
// ============================================================================

/// A tag attached to a field, with the raw text it was declared with.
///
/// The raw text is kept verbatim: bounds are parsed when the check runs, so
/// a malformed bound is a validation-time concern rather than a declaration
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Constraint {
    /// Which check this constraint activates.
    pub tag: Tag,
    /// Declared value. An empty value leaves the tag inactive.
    pub raw: Cow<'static, str>,
}

impl Constraint {
    /// Creates a constraint from static text. Usable in `const` items, which
    /// is how derived records store their descriptor tables.
    #[must_use]
    pub const fn new(tag: Tag, raw: &'static str) -> Self {
        Self {
            tag,
            raw: Cow::Borrowed(raw),
        }
    }

    /// Creates a constraint owning its raw text.
    #[must_use]
    pub fn owned(tag: Tag, raw: impl Into<String>) -> Self {
        Self {
            tag,
            raw: Cow::Owned(raw.into()),
        }
    }

    /// A flag-style constraint (`required`, `email`) set to `"true"`.
    #[must_use]
    pub const fn flag(tag: Tag) -> Self {
        Self::new(tag, "true")
    }

    /// Whether this constraint activates its check.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.raw.is_empty()
    }
}

/// Returns the first active constraint for `tag`, mirroring how a struct
/// tag lookup resolves duplicate keys.
pub(crate) fn lookup(constraints: &[Constraint], tag: Tag) -> Option<&Constraint> {
    constraints
        .iter()
        .find(|c| c.tag == tag)
        .filter(|c| c.is_active())
}
