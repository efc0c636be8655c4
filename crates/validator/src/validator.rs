//! The field validator
//!
//! One pass over a record's fields. Each field's active constraints are
//! evaluated in [`Tag::ALL`] order, independently of each other and of every
//! other field; all failures on a field are reported together.

use std::convert::Infallible;
use std::num::ParseIntError;

use crate::config::{Strictness, ValidatorConfig};
use crate::email::is_valid_email;
use crate::error::ValidatorError;
use crate::record::{Field, Record};
use crate::result::ValidationResult;
use crate::tag::{Constraint, Tag, lookup};
use crate::value::LengthMode;

// ============================================================================
// MALFORMED BOUND POLICY
// ============================================================================

/// Decides what a non-integer bound does to the pass.
trait MalformedPolicy {
    type Error;

    fn on_malformed(
        field: &Field<'_>,
        constraint: &Constraint,
        source: ParseIntError,
    ) -> Result<(), Self::Error>;
}

struct SkipMalformed;

impl MalformedPolicy for SkipMalformed {
    type Error = Infallible;

    fn on_malformed(
        field: &Field<'_>,
        constraint: &Constraint,
        source: ParseIntError,
    ) -> Result<(), Infallible> {
        tracing::debug!(
            field = %field.name,
            tag = %constraint.tag,
            raw = %constraint.raw,
            error = %source,
            "ignoring tag with non-integer value"
        );
        Ok(())
    }
}

struct RejectMalformed;

impl MalformedPolicy for RejectMalformed {
    type Error = ValidatorError;

    fn on_malformed(
        field: &Field<'_>,
        constraint: &Constraint,
        source: ParseIntError,
    ) -> Result<(), ValidatorError> {
        Err(ValidatorError::MalformedTag {
            field: field.name.clone().into_owned(),
            tag: constraint.tag,
            raw: constraint.raw.clone().into_owned(),
            source,
        })
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates records according to a [`ValidatorConfig`].
///
/// `Validator` holds no state besides its configuration; it is `Copy` and
/// can be shared freely across threads.
///
/// ```
/// use fieldguard::{Record, Strictness, Validator};
///
/// #[derive(Record)]
/// struct Member {
///     #[validate(max = "lots")]
///     age: u32,
/// }
///
/// let member = Member { age: 300 };
///
/// // Lenient: the malformed bound is ignored.
/// let results = Validator::new().validate(&member).unwrap();
/// assert!(results[0].valid);
///
/// // Strict: the malformed bound aborts the pass.
/// let err = Validator::new().strictness(Strictness::Strict).validate(&member);
/// assert!(err.is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// A lenient validator measuring text in bytes.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(ValidatorConfig::new())
    }

    /// A validator using `config`.
    #[must_use]
    pub const fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Sets how malformed bound tags are handled.
    #[must_use = "builder methods must be chained or built"]
    pub const fn strictness(mut self, strictness: Strictness) -> Self {
        self.config.strictness = strictness;
        self
    }

    /// Sets how text length is measured.
    #[must_use = "builder methods must be chained or built"]
    pub const fn length_mode(mut self, length_mode: LengthMode) -> Self {
        self.config.length_mode = length_mode;
        self
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates every field of `record`, returning one result per field in
    /// declaration order.
    ///
    /// Only fails in [`Strictness::Strict`] mode, on the first bound tag that
    /// is not an integer.
    pub fn validate<R>(&self, record: &R) -> Result<Vec<ValidationResult>, ValidatorError>
    where
        R: Record + ?Sized,
    {
        match self.config.strictness {
            Strictness::Lenient => {
                let Ok(results) = self.run::<SkipMalformed, R>(record);
                Ok(results)
            }
            Strictness::Strict => self.run::<RejectMalformed, R>(record),
        }
    }

    /// Validates a single field descriptor.
    pub fn validate_field(&self, field: &Field<'_>) -> Result<ValidationResult, ValidatorError> {
        match self.config.strictness {
            Strictness::Lenient => {
                let Ok(result) = self.evaluate::<SkipMalformed>(field);
                Ok(result)
            }
            Strictness::Strict => self.evaluate::<RejectMalformed>(field),
        }
    }

    pub(crate) fn validate_lenient<R>(&self, record: &R) -> Vec<ValidationResult>
    where
        R: Record + ?Sized,
    {
        let Ok(results) = self.run::<SkipMalformed, R>(record);
        results
    }

    fn run<P, R>(&self, record: &R) -> Result<Vec<ValidationResult>, P::Error>
    where
        P: MalformedPolicy,
        R: Record + ?Sized,
    {
        let span = tracing::debug_span!("validate", record = %record.record_name());
        let _entered = span.enter();

        record
            .fields()
            .iter()
            .map(|field| self.evaluate::<P>(field))
            .collect()
    }

    fn evaluate<P: MalformedPolicy>(&self, field: &Field<'_>) -> Result<ValidationResult, P::Error> {
        let mut failures = Vec::new();

        for tag in Tag::ALL {
            let Some(constraint) = lookup(field.constraints, tag) else {
                continue;
            };
            if self.check::<P>(field, constraint)? == Outcome::Fail {
                failures.push(tag.failure_message());
            }
        }

        let result = if failures.is_empty() {
            ValidationResult::passed(field.name.as_ref())
        } else {
            ValidationResult::failed(field.name.as_ref(), failures)
        };
        tracing::trace!(field = %field.name, valid = result.valid, "field checked");
        Ok(result)
    }

    fn check<P: MalformedPolicy>(
        &self,
        field: &Field<'_>,
        constraint: &Constraint,
    ) -> Result<Outcome, P::Error> {
        let value = &field.value;
        let tag = constraint.tag;

        let outcome = match tag {
            Tag::Required => Outcome::from_pass(!value.is_zero()),
            Tag::Email => match value.as_text() {
                Some(text) => Outcome::from_pass(is_valid_email(text)),
                None => Outcome::mismatch(field, tag),
            },
            Tag::Max | Tag::Min => {
                let Some(bound) = parse_bound::<P>(field, constraint)? else {
                    return Ok(Outcome::Skipped);
                };
                match value.as_number() {
                    Some(n) if tag == Tag::Max => Outcome::from_pass(!n.exceeds(bound)),
                    Some(n) => Outcome::from_pass(!n.falls_below(bound)),
                    None => Outcome::mismatch(field, tag),
                }
            }
            Tag::MaxLen | Tag::MinLen => {
                let Some(bound) = parse_bound::<P>(field, constraint)? else {
                    return Ok(Outcome::Skipped);
                };
                match value.as_text() {
                    Some(text) => {
                        let len = self.config.length_mode.measure(text) as i128;
                        let bound = i128::from(bound);
                        Outcome::from_pass(if tag == Tag::MaxLen {
                            len <= bound
                        } else {
                            len >= bound
                        })
                    }
                    None => Outcome::mismatch(field, tag),
                }
            }
        };
        Ok(outcome)
    }
}

fn parse_bound<P: MalformedPolicy>(
    field: &Field<'_>,
    constraint: &Constraint,
) -> Result<Option<i64>, P::Error> {
    match constraint.raw.parse::<i64>() {
        Ok(bound) => Ok(Some(bound)),
        Err(source) => P::on_malformed(field, constraint, source).map(|()| None),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Pass,
    Fail,
    Skipped,
}

impl Outcome {
    fn from_pass(pass: bool) -> Self {
        if pass { Outcome::Pass } else { Outcome::Fail }
    }

    fn mismatch(field: &Field<'_>, tag: Tag) -> Self {
        tracing::trace!(
            field = %field.name,
            tag = %tag,
            kind = field.value.kind(),
            "tag does not apply to this value kind"
        );
        Outcome::Skipped
    }
}

/// Validates `record` with the default lenient configuration.
///
/// Never fails: malformed bound tags are ignored and tags that do not apply
/// to a field's type are skipped.
///
/// ```
/// use fieldguard::Record;
///
/// #[derive(Record)]
/// struct AvengersMember {
///     #[validate(required, maxLen = 50)]
///     name: String,
///     #[validate(min = 18, max = 100)]
///     age: i32,
///     #[validate(required, email)]
///     email: String,
/// }
///
/// let member = AvengersMember {
///     name: "Iron Man".into(),
///     age: 45,
///     email: "ironman@example.com".into(),
/// };
/// assert!(fieldguard::validate(&member).iter().all(|r| r.valid));
/// ```
pub fn validate<R>(record: &R) -> Vec<ValidationResult>
where
    R: Record + ?Sized,
{
    Validator::new().validate_lenient(record)
}
