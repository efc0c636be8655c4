//! Record introspection
//!
//! A [`Record`] enumerates its fields as [`Field`] descriptors: name, value
//! view and declared constraints. `#[derive(Record)]` generates the
//! implementation from `#[validate(...)]` attributes; hand-written impls and
//! the JSON adapter use the same shape.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::tag::Constraint;
use crate::value::FieldValue;

/// One introspected field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    /// Name reported in the validation result.
    pub name: Cow<'a, str>,
    /// View of the field's current value.
    pub value: FieldValue<'a>,
    /// Constraints declared on the field, in declaration order.
    pub constraints: &'a [Constraint],
}

impl<'a> Field<'a> {
    /// Creates a field descriptor.
    pub fn new(
        name: impl Into<Cow<'a, str>>,
        value: FieldValue<'a>,
        constraints: &'a [Constraint],
    ) -> Self {
        Self {
            name: name.into(),
            value,
            constraints,
        }
    }
}

/// A structured value whose fields can be validated.
///
/// ```
/// use fieldguard::{Constraint, Field, Record, Tag, AsFieldValue};
///
/// struct Login {
///     user: String,
/// }
///
/// impl Record for Login {
///     fn fields(&self) -> Vec<Field<'_>> {
///         const USER: &[Constraint] = &[Constraint::flag(Tag::Required)];
///         vec![Field::new("user", self.user.as_field_value(), USER)]
///     }
/// }
///
/// let results = fieldguard::validate(&Login { user: String::new() });
/// assert!(!results[0].valid);
/// ```
pub trait Record {
    /// Returns one descriptor per field, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Name used in diagnostics.
    fn record_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }

    fn record_name(&self) -> Cow<'_, str> {
        (**self).record_name()
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }

    fn record_name(&self) -> Cow<'_, str> {
        (**self).record_name()
    }
}

impl<R: Record + ?Sized> Record for Rc<R> {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }

    fn record_name(&self) -> Cow<'_, str> {
        (**self).record_name()
    }
}

impl<R: Record + ?Sized> Record for Arc<R> {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }

    fn record_name(&self) -> Cow<'_, str> {
        (**self).record_name()
    }
}
