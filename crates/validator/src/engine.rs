//! Record validation
//!
//! Walks a record's field table in declaration order, parses each field's
//! spec and runs every clause against the field's normalized value.

use crate::constraint::{SyntaxError, parse_spec};
use crate::foundation::{
    Error, Field, Inspect, Shape, ValidationErrors, ValidationFailure, ValidationResult,
};
use crate::validators::{self, LengthMode};

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validation settings.
///
/// The default counts text length in UTF-8 bytes; this is what
/// [`validate`] uses.
///
/// # Examples
///
/// ```rust,ignore
/// use structval::{LengthMode, Validator};
///
/// let validator = Validator::new().with_length_mode(LengthMode::Chars);
/// validator.validate(&form)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Validator {
    length_mode: LengthMode,
}

impl Validator {
    /// Creates a validator with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            length_mode: LengthMode::Bytes,
        }
    }

    /// Sets how `len`, `min` and `max` measure text.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// The configured length mode.
    #[must_use]
    pub const fn length_mode(&self) -> LengthMode {
        self.length_mode
    }

    /// Validates every annotated field of `value`.
    ///
    /// Returns [`Error::NotAStruct`] without looking further when `value` is
    /// not a record, and [`Error::Invalid`] with every failure otherwise.
    pub fn validate<T: Inspect + ?Sized>(&self, value: &T) -> ValidationResult {
        let fields = visible_fields(value)?;

        tracing::debug!(
            record = std::any::type_name::<T>(),
            fields = fields.len(),
            "validating record"
        );

        let mut errors = ValidationErrors::new();
        for field in &fields {
            self.validate_field(field, &mut errors);
        }

        if errors.has_errors() {
            tracing::debug!(
                record = std::any::type_name::<T>(),
                failures = errors.len(),
                "record failed validation"
            );
        }

        errors.into_result(()).map_err(Error::Invalid)
    }

    fn validate_field(&self, field: &Field<'_>, errors: &mut ValidationErrors) {
        let Some(spec) = field.spec().filter(|spec| !spec.is_empty()) else {
            return;
        };

        if !field.is_exported() {
            errors.add(ValidationFailure::UnexportedField {
                field: field.name_owned(),
            });
            return;
        }

        let Some(value) = field.value() else {
            tracing::debug!(
                field = field.name(),
                spec,
                "annotated field has no readable value, skipping"
            );
            return;
        };

        let name = field.name_owned();
        for clause in parse_spec(spec) {
            match clause {
                Ok(constraint) => {
                    tracing::trace!(field = field.name(), %constraint, "evaluating constraint");
                    validators::evaluate(
                        constraint,
                        &name,
                        field.element_kind(),
                        value,
                        self.length_mode,
                        errors,
                    );
                }
                Err(SyntaxError::UnknownConstraint { name: unknown }) => {
                    tracing::debug!(field = field.name(), constraint = %unknown, "ignoring unknown constraint");
                }
                Err(err) => errors.add(ValidationFailure::InvalidSyntax {
                    field: name.clone(),
                    reason: err.to_string(),
                }),
            }
        }
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Validates `value` with default settings.
///
/// # Examples
///
/// ```rust,ignore
/// use structval::{Inspect, validate};
///
/// #[derive(Inspect)]
/// struct Signup {
///     #[validate("min:18")]
///     pub age: i64,
///     #[validate("len:4;in:AAAA,BBBB")]
///     pub code: String,
/// }
///
/// let err = validate(&Signup { age: 17, code: "CCCC".into() }).unwrap_err();
/// assert_eq!(err.failures().len(), 2);
/// ```
pub fn validate<T: Inspect + ?Sized>(value: &T) -> ValidationResult {
    Validator::new().validate(value)
}

/// Lists a record's fields in declaration order, embedded fields included.
///
/// Fails with [`Error::NotAStruct`] for anything that is not a record.
pub fn visible_fields<T: Inspect + ?Sized>(value: &T) -> Result<Vec<Field<'_>>, Error> {
    match value.shape() {
        Shape::Record(fields) => Ok(fields),
        Shape::Value(kind) => {
            tracing::debug!(%kind, "refusing to validate a non-record value");
            Err(Error::NotAStruct(kind))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
