//! Core validation types
//!
//! This module contains the building blocks every other part of the crate
//! is written against:
//!
//! - **Introspection**: [`Inspect`], [`Shape`], [`Field`], [`Visibility`]
//! - **Values**: [`Atom`], [`FieldValue`], [`AsFieldValue`], [`ElementKind`]
//! - **Errors**: [`ValidationFailure`], [`ValidationErrors`], [`Error`]
//!
//! # Architecture
//!
//! ## 1. One introspection seam
//!
//! The engine never looks at a concrete type. A record describes itself once,
//! as an ordered table of field descriptors, and the evaluators only ever see
//! normalized values:
//!
//! ```rust,ignore
//! #[derive(Inspect)]
//! struct User {
//!     #[validate("min:18")]
//!     pub age: i64,
//! }
//! ```
//!
//! ## 2. Scalars and collections look the same
//!
//! [`FieldValue`] is either `Scalar(atom)` or `Sequence(atoms)`; evaluators
//! iterate [`FieldValue::atoms`] and never branch on which one they got.
//!
//! ## 3. Report everything
//!
//! Failures accumulate into [`ValidationErrors`]. Only a non-record input
//! stops early, with [`Error::NotAStruct`].

pub mod error;
pub mod record;
pub mod value;

pub use error::{Error, ValidationErrors, ValidationFailure};
pub use record::{Field, Inspect, Shape, ValueKind, Visibility};
pub use value::{AsFieldValue, Atom, Atomic, ElementKind, FieldValue};

/// A validation result carrying every failure of one call.
pub type ValidationResult<T = ()> = Result<T, Error>;
