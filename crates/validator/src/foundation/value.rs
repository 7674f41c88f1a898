//! Field value normalization
//!
//! Every annotated field is presented to the evaluators as an ordered run of
//! [`Atom`]s. Scalars become a single atom, ordered collections become one
//! atom per element, so each constraint is collection-aware for free.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

// ============================================================================
// ELEMENT KIND
// ============================================================================

/// Statically declared kind of a field's element.
///
/// For a collection field this is the kind of its elements, which is what
/// `in:` uses to decide how its literals are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Signed or unsigned integer.
    Integer,
    /// UTF-8 text.
    Text,
    /// Anything the evaluators do not check.
    Unsupported,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementKind::Integer => "integer",
            ElementKind::Text => "text",
            ElementKind::Unsupported => "unsupported",
        })
    }
}

// ============================================================================
// ATOM
// ============================================================================

/// A single scalar unwrapped from a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom<'a> {
    /// Integer value, widened to `i64`.
    Int(i64),
    /// Borrowed text.
    Text(&'a str),
    /// A value of a kind no evaluator checks; always skipped.
    Unsupported,
}

impl Atom<'_> {
    /// Returns the kind of this atom.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self {
            Atom::Int(_) => ElementKind::Integer,
            Atom::Text(_) => ElementKind::Text,
            Atom::Unsupported => ElementKind::Unsupported,
        }
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A field value, either one atom or an ordered sequence of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A plain scalar field.
    Scalar(Atom<'a>),
    /// An array, vector or slice field, in element order.
    Sequence(Vec<Atom<'a>>),
}

impl<'a> FieldValue<'a> {
    /// Normalizes any supported field into a `FieldValue`.
    pub fn of<T: AsFieldValue + ?Sized>(value: &'a T) -> Self {
        value.field_value()
    }

    /// Returns the atoms in order. A scalar yields a one-element slice.
    #[must_use]
    pub fn atoms(&self) -> &[Atom<'a>] {
        match self {
            FieldValue::Scalar(atom) => std::slice::from_ref(atom),
            FieldValue::Sequence(atoms) => atoms,
        }
    }

    /// Returns `true` for collection-typed fields.
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        matches!(self, FieldValue::Sequence(_))
    }
}

// ============================================================================
// CONVERSION TRAITS
// ============================================================================

/// A type whose values are single atoms.
pub trait Atomic {
    /// The kind every value of this type maps to.
    const KIND: ElementKind;

    /// Converts the value into an atom.
    fn atom(&self) -> Atom<'_>;
}

/// A type that can be presented to the evaluators as a [`FieldValue`].
///
/// Implemented for every [`Atomic`] type and for ordered collections of them.
/// `#[derive(Inspect)]` requires this on every exported, annotated field.
pub trait AsFieldValue {
    /// Declared element kind, known without looking at a value.
    const ELEMENT_KIND: ElementKind;

    /// Normalizes the value.
    fn field_value(&self) -> FieldValue<'_>;
}

macro_rules! atomic_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Atomic for $ty {
                const KIND: ElementKind = ElementKind::Integer;

                #[inline]
                fn atom(&self) -> Atom<'_> {
                    Atom::Int(i64::from(*self))
                }
            }
        )*
    };
}

atomic_int!(i8, i16, i32, i64, u8, u16, u32);

// Wider integers only become atoms when they fit in an i64.
macro_rules! atomic_wide_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Atomic for $ty {
                const KIND: ElementKind = ElementKind::Integer;

                #[inline]
                fn atom(&self) -> Atom<'_> {
                    i64::try_from(*self).map_or(Atom::Unsupported, Atom::Int)
                }
            }
        )*
    };
}

atomic_wide_int!(isize, usize, u64, i128, u128);

macro_rules! atomic_unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Atomic for $ty {
                const KIND: ElementKind = ElementKind::Unsupported;

                #[inline]
                fn atom(&self) -> Atom<'_> {
                    Atom::Unsupported
                }
            }
        )*
    };
}

atomic_unsupported!(bool, char, f32, f64);

impl Atomic for String {
    const KIND: ElementKind = ElementKind::Text;

    fn atom(&self) -> Atom<'_> {
        Atom::Text(self.as_str())
    }
}

impl Atomic for &str {
    const KIND: ElementKind = ElementKind::Text;

    fn atom(&self) -> Atom<'_> {
        Atom::Text(self)
    }
}

impl Atomic for Cow<'_, str> {
    const KIND: ElementKind = ElementKind::Text;

    fn atom(&self) -> Atom<'_> {
        Atom::Text(self.as_ref())
    }
}

impl Atomic for Box<str> {
    const KIND: ElementKind = ElementKind::Text;

    fn atom(&self) -> Atom<'_> {
        Atom::Text(self)
    }
}

macro_rules! scalar_field {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsFieldValue for $ty {
                const ELEMENT_KIND: ElementKind = <$ty as Atomic>::KIND;

                #[inline]
                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::Scalar(self.atom())
                }
            }
        )*
    };
}

scalar_field!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, f32, f64, String,
    &str,
    Box<str>,
);

impl AsFieldValue for Cow<'_, str> {
    const ELEMENT_KIND: ElementKind = ElementKind::Text;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Scalar(self.atom())
    }
}

impl AsFieldValue for str {
    const ELEMENT_KIND: ElementKind = ElementKind::Text;

    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Scalar(Atom::Text(self))
    }
}

fn sequence<'a, T, I>(items: I) -> FieldValue<'a>
where
    T: Atomic + 'a,
    I: IntoIterator<Item = &'a T>,
{
    FieldValue::Sequence(items.into_iter().map(Atomic::atom).collect())
}

impl<T: Atomic> AsFieldValue for [T] {
    const ELEMENT_KIND: ElementKind = T::KIND;

    fn field_value(&self) -> FieldValue<'_> {
        sequence(self)
    }
}

impl<T: Atomic, const N: usize> AsFieldValue for [T; N] {
    const ELEMENT_KIND: ElementKind = T::KIND;

    fn field_value(&self) -> FieldValue<'_> {
        sequence(self)
    }
}

impl<T: Atomic> AsFieldValue for Vec<T> {
    const ELEMENT_KIND: ElementKind = T::KIND;

    fn field_value(&self) -> FieldValue<'_> {
        sequence(self)
    }
}

impl<T: Atomic> AsFieldValue for Box<[T]> {
    const ELEMENT_KIND: ElementKind = T::KIND;

    fn field_value(&self) -> FieldValue<'_> {
        sequence(self.iter())
    }
}

impl<T: Atomic> AsFieldValue for VecDeque<T> {
    const ELEMENT_KIND: ElementKind = T::KIND;

    fn field_value(&self) -> FieldValue<'_> {
        sequence(self)
    }
}

impl<T: Atomic> AsFieldValue for &[T] {
    const ELEMENT_KIND: ElementKind = T::KIND;

    fn field_value(&self) -> FieldValue<'_> {
        sequence(self.iter())
    }
}

// ============================================================================
// TESTS
// ============================================================================
