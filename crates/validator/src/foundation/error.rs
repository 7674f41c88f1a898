//! Error types for validation failures
//!
//! A single call reports every violation at once: per-field problems are
//! collected as [`ValidationFailure`]s into [`ValidationErrors`], and only a
//! value that is not a record at all short-circuits with
//! [`Error::NotAStruct`].

use std::borrow::Cow;
use std::fmt;

use super::record::ValueKind;

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// One violation found while validating a record.
///
/// The `Display` rendering is the human-readable message; [`code`](Self::code)
/// gives a stable identifier for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "code", rename_all = "snake_case"))]
pub enum ValidationFailure {
    /// A private field carries a constraint spec.
    #[error("validation for unexported field {field} is not allowed")]
    UnexportedField {
        /// Field name.
        field: Cow<'static, str>,
    },

    /// A clause or membership literal could not be parsed.
    #[error("invalid validator syntax in field {field}: {reason}")]
    InvalidSyntax {
        /// Field name.
        field: Cow<'static, str>,
        /// What was wrong with the clause or literal.
        reason: String,
    },

    /// `len:` did not hold for some element.
    #[error("field {field} has an invalid length")]
    #[cfg_attr(feature = "serde", serde(rename = "len"))]
    Length {
        /// Field name.
        field: Cow<'static, str>,
    },

    /// `min:` did not hold for some element.
    #[error("field {field} has value less than min")]
    #[cfg_attr(feature = "serde", serde(rename = "min"))]
    Minimum {
        /// Field name.
        field: Cow<'static, str>,
    },

    /// `max:` did not hold for some element.
    #[error("field {field} has value bigger than max")]
    #[cfg_attr(feature = "serde", serde(rename = "max"))]
    Maximum {
        /// Field name.
        field: Cow<'static, str>,
    },

    /// `in:` did not hold for some element.
    #[error("field {field} does not occur in [{}]", .literals.join(" "))]
    #[cfg_attr(feature = "serde", serde(rename = "in"))]
    Membership {
        /// Field name.
        field: Cow<'static, str>,
        /// The literals as written in the spec, including any that failed to parse.
        literals: Vec<String>,
    },
}

impl ValidationFailure {
    /// Name of the field the failure belongs to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::UnexportedField { field }
            | Self::InvalidSyntax { field, .. }
            | Self::Length { field }
            | Self::Minimum { field }
            | Self::Maximum { field }
            | Self::Membership { field, .. } => field,
        }
    }

    /// Stable identifier of the failure kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnexportedField { .. } => "unexported_field",
            Self::InvalidSyntax { .. } => "invalid_syntax",
            Self::Length { .. } => "len",
            Self::Minimum { .. } => "min",
            Self::Maximum { .. } => "max",
            Self::Membership { .. } => "in",
        }
    }

    /// Returns `true` for spec problems rather than value problems.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::InvalidSyntax { .. })
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Every failure of one validation call, in field order then clause order.
///
/// Renders as one message per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValidationErrors {
    failures: Vec<ValidationFailure>,
}

impl ValidationErrors {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Appends a failure.
    pub fn add(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// Appends several failures, keeping their order.
    pub fn extend(&mut self, failures: impl IntoIterator<Item = ValidationFailure>) {
        self.failures.extend(failures);
    }

    /// Returns true if there are any failures.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns the number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failures in order.
    #[must_use]
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Iterates over the failures.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationFailure> {
        self.failures.iter()
    }

    /// Failures recorded for one field.
    pub fn for_field<'s>(&'s self, field: &'s str) -> impl Iterator<Item = &'s ValidationFailure> {
        self.failures.iter().filter(move |f| f.field() == field)
    }

    /// `Ok(ok_value)` when empty, `Err(self)` otherwise.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }

    /// Converts the failures to a JSON array of `{code, field, ...}` objects.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.failures
                .iter()
                .map(|failure| {
                    let mut value = serde_json::to_value(failure)
                        .unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()));
                    if let serde_json::Value::Object(map) = &mut value {
                        map.insert(
                            "message".to_owned(),
                            serde_json::Value::String(failure.to_string()),
                        );
                    }
                    value
                })
                .collect(),
        )
    }
}

impl FromIterator<ValidationFailure> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationFailure;
    type IntoIter = std::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TOP-LEVEL ERROR
// ============================================================================

/// Result of a failed [`validate`](crate::validate) call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value is not a record; no field was looked at.
    #[error("wrong argument given, should be a struct (got {0})")]
    NotAStruct(ValueKind),

    /// The record has at least one violation.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl Error {
    /// The individual failures; empty for [`Error::NotAStruct`].
    #[must_use]
    pub fn failures(&self) -> &[ValidationFailure] {
        match self {
            Error::NotAStruct(_) => &[],
            Error::Invalid(errors) => errors.failures(),
        }
    }

    /// Returns `true` if the value was rejected before any field was checked.
    #[must_use]
    pub fn is_not_a_struct(&self) -> bool {
        matches!(self, Error::NotAStruct(_))
    }

    /// The collected failures, if this is [`Error::Invalid`].
    #[must_use]
    pub fn into_validation_errors(self) -> Option<ValidationErrors> {
        match self {
            Error::Invalid(errors) => Some(errors),
            Error::NotAStruct(_) => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
