//! Record introspection
//!
//! [`Inspect`] is the one adapter between a concrete type and the validation
//! engine. Records describe themselves as an ordered table of [`Field`]s;
//! everything else reports the kind of value it is so the engine can refuse
//! it up front.
//!
//! The table is normally generated by `#[derive(Inspect)]`, but it can be
//! written by hand:
//!
//! ```rust
//! use structval::foundation::{Field, Inspect, Shape, Visibility};
//!
//! struct Login {
//!     user: String,
//!     attempts: u32,
//! }
//!
//! impl Inspect for Login {
//!     fn shape(&self) -> Shape<'_> {
//!         Shape::Record(vec![
//!             Field::new("user", Visibility::Exported)
//!                 .with_spec("min:3")
//!                 .with_value(&self.user),
//!             Field::new("attempts", Visibility::Exported)
//!                 .with_spec("max:5")
//!                 .with_value(&self.attempts),
//!         ])
//!     }
//! }
//! ```

use super::value::{AsFieldValue, ElementKind, FieldValue};
use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

// ============================================================================
// SHAPE
// ============================================================================

/// Coarse kind of a non-record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Integer primitive.
    Integer,
    /// Text.
    Text,
    /// Array, vector or slice.
    Sequence,
    /// Any other primitive.
    Other,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Integer => "integer",
            ValueKind::Text => "text",
            ValueKind::Sequence => "sequence",
            ValueKind::Other => "primitive",
        })
    }
}

/// What an [`Inspect`] value looks like to the engine.
#[derive(Debug, Clone)]
pub enum Shape<'a> {
    /// An aggregate of named fields, in declaration order.
    Record(Vec<Field<'a>>),
    /// Anything that is not a record.
    Value(ValueKind),
}

impl<'a> Shape<'a> {
    /// Returns the fields of a record, or `None` for plain values.
    #[must_use]
    pub fn into_fields(self) -> Option<Vec<Field<'a>>> {
        match self {
            Shape::Record(fields) => Some(fields),
            Shape::Value(_) => None,
        }
    }

    /// Returns `true` if this is a record.
    #[must_use]
    pub fn is_record(&self) -> bool {
        matches!(self, Shape::Record(_))
    }
}

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// Whether the engine may read a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Public field; its value is readable.
    Exported,
    /// Private field; its value is never read.
    Unexported,
}

/// One entry of a record's field table.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    name: Cow<'static, str>,
    visibility: Visibility,
    spec: Option<&'static str>,
    element_kind: ElementKind,
    value: Option<FieldValue<'a>>,
}

impl<'a> Field<'a> {
    /// Creates a descriptor with no constraint spec and no value.
    pub fn new(name: impl Into<Cow<'static, str>>, visibility: Visibility) -> Self {
        Self {
            name: name.into(),
            visibility,
            spec: None,
            element_kind: ElementKind::Unsupported,
            value: None,
        }
    }

    /// Attaches the raw constraint spec, e.g. `"len:4;in:AAAA,BBBB"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_spec(mut self, spec: &'static str) -> Self {
        self.spec = Some(spec);
        self
    }

    /// Attaches the field's value together with its declared element kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value<T: AsFieldValue + ?Sized>(mut self, value: &'a T) -> Self {
        self.element_kind = T::ELEMENT_KIND;
        self.value = Some(value.field_value());
        self
    }

    /// Reported field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owned copy of the field name, for failures.
    pub(crate) fn name_owned(&self) -> Cow<'static, str> {
        self.name.clone()
    }

    /// Field visibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns `true` for exported fields.
    #[must_use]
    pub fn is_exported(&self) -> bool {
        self.visibility == Visibility::Exported
    }

    /// The raw constraint spec, if the field has one.
    #[must_use]
    pub fn spec(&self) -> Option<&'static str> {
        self.spec
    }

    /// Declared element kind. `Unsupported` when no value was attached.
    #[must_use]
    pub fn element_kind(&self) -> ElementKind {
        self.element_kind
    }

    /// The normalized value, present only when one was attached.
    #[must_use]
    pub fn value(&self) -> Option<&FieldValue<'a>> {
        self.value.as_ref()
    }
}

// ============================================================================
// INSPECT
// ============================================================================

/// Runtime description of a value for validation.
///
/// Derive it on structs with `#[derive(Inspect)]`. The implementations below
/// cover primitives and collections, which are never records: validating
/// them fails with [`Error::NotAStruct`](crate::Error::NotAStruct).
pub trait Inspect {
    /// Describes this value.
    fn shape(&self) -> Shape<'_>;
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

macro_rules! plain_value {
    ($kind:expr => $($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn shape(&self) -> Shape<'_> {
                    Shape::Value($kind)
                }
            }
        )*
    };
}

plain_value!(ValueKind::Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
plain_value!(ValueKind::Text => str, String, Box<str>);
plain_value!(ValueKind::Other => bool, char, f32, f64, ());

impl Inspect for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Text)
    }
}

impl<T> Inspect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Sequence)
    }
}

impl<T, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Sequence)
    }
}

impl<T> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Sequence)
    }
}

impl<T> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Value(ValueKind::Sequence)
    }
}

// ============================================================================
// TESTS
// ============================================================================
