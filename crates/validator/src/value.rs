//! Field value views
//!
//! [`FieldValue`] is the borrowed, type-erased view of a field that the
//! checks operate on. [`AsFieldValue`] produces it; derived records call it
//! once per field.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count text length for `maxLen` / `minLen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures `input` according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// Borrowed view of a single field's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Absent value (`None`, JSON `null`).
    Nil,
    /// Boolean.
    Bool(bool),
    /// Any integer type, widened.
    Int(i128),
    /// Any float type, widened.
    Float(f64),
    /// A single character.
    Char(char),
    /// Text.
    Text(&'a str),
    /// A collection, reduced to its length.
    Collection {
        /// Number of elements.
        len: usize,
    },
    /// A value the checks cannot look inside; only its zero-ness is known.
    Opaque {
        /// Whether the value equals its type's default.
        zero: bool,
    },
}

impl FieldValue<'_> {
    /// Whether this is its type's zero/empty/default value.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match *self {
            FieldValue::Nil => true,
            FieldValue::Bool(b) => !b,
            FieldValue::Int(n) => n == 0,
            FieldValue::Float(x) => x == 0.0,
            FieldValue::Char(c) => c == '\0',
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Collection { len } => len == 0,
            FieldValue::Opaque { zero } => zero,
        }
    }

    /// Numeric view, when the value is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            FieldValue::Int(n) => Some(Number::Int(n)),
            FieldValue::Float(x) => Some(Number::Float(x)),
            _ => None,
        }
    }

    /// Text view, when the value is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the value's kind, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Nil => "nil",
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::Char(_) => "char",
            FieldValue::Text(_) => "text",
            FieldValue::Collection { .. } => "collection",
            FieldValue::Opaque { .. } => "opaque",
        }
    }
}

/// A numeric field value, compared against integer bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer value.
    Int(i128),
    /// Floating-point value.
    Float(f64),
}

impl Number {
    /// Whether the value is strictly greater than `bound`.
    #[must_use]
    pub fn exceeds(self, bound: i64) -> bool {
        match self {
            Number::Int(n) => n > i128::from(bound),
            Number::Float(x) => x > bound as f64,
        }
    }

    /// Whether the value is strictly less than `bound`.
    #[must_use]
    pub fn falls_below(self, bound: i64) -> bool {
        match self {
            Number::Int(n) => n < i128::from(bound),
            Number::Float(x) => x < bound as f64,
        }
    }
}

// ============================================================================
// AS FIELD VALUE
// ============================================================================

/// Produces the [`FieldValue`] view of a field.
///
/// Implemented for primitives, text, options, smart pointers and the std
/// collections. Implement it for your own types to make them usable as
/// fields of a derived record; [`FieldValue::Opaque`] is the usual answer for
/// a type the checks should only test for zero-ness.
///
/// ```
/// use fieldguard::{AsFieldValue, FieldValue};
///
/// #[derive(Default, PartialEq)]
/// struct UserId(u64);
///
/// impl AsFieldValue for UserId {
///     fn as_field_value(&self) -> FieldValue<'_> {
///         FieldValue::Int(i128::from(self.0))
///     }
/// }
///
/// assert!(UserId(0).as_field_value().is_zero());
/// ```
pub trait AsFieldValue {
    /// Returns the borrowed view of `self`.
    fn as_field_value(&self) -> FieldValue<'_>;
}

macro_rules! int_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                #[inline]
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(i128::from(*self))
                }
            }
        )*
    };
}

int_field_value!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl AsFieldValue for isize {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self as i128)
    }
}

impl AsFieldValue for usize {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self as i128)
    }
}

impl AsFieldValue for u128 {
    // Values above i128::MAX saturate; they exceed every i64 bound either way.
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(i128::try_from(*self).unwrap_or(i128::MAX))
    }
}

impl AsFieldValue for f32 {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(f64::from(*self))
    }
}

impl AsFieldValue for f64 {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl AsFieldValue for bool {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl AsFieldValue for char {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Char(*self)
    }
}

impl AsFieldValue for str {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for String {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_str())
    }
}

impl AsFieldValue for Cow<'_, str> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self.as_ref())
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(inner) => inner.as_field_value(),
            None => FieldValue::Nil,
        }
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Box<T> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Rc<T> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Arc<T> {
    #[inline]
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

macro_rules! collection_field_value {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> AsFieldValue for $ty {
                #[inline]
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Collection { len: self.len() }
                }
            }
        )*
    };
}

collection_field_value!(
    [T] [T],
    [T] Vec<T>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
    [K, V, S] IndexMap<K, V, S>,
);

impl AsFieldValue for serde_json::Value {
    fn as_field_value(&self) -> FieldValue<'_> {
        use serde_json::Value;

        match self {
            Value::Null => FieldValue::Nil,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    FieldValue::Int(i128::from(u))
                } else {
                    FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => FieldValue::Text(s),
            Value::Array(items) => FieldValue::Collection { len: items.len() },
            Value::Object(map) => FieldValue::Collection { len: map.len() },
        }
    }
}
