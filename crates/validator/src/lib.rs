//! # structval
//!
//! Declarative validation of struct fields. Constraints live next to the
//! fields as short spec strings, and one call reports every violation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use structval::prelude::*;
//!
//! #[derive(Inspect)]
//! struct Signup {
//!     #[validate("min:18")]
//!     pub age: i64,
//!     #[validate("len:4;in:AAAA,BBBB")]
//!     pub code: String,
//! }
//!
//! let err = validate(&Signup { age: 17, code: "CCCC".into() }).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "field age has value less than min\nfield code does not occur in [AAAA BBBB]"
//! );
//! ```
//!
//! ## Spec syntax
//!
//! `name:argument` clauses separated by `;`:
//!
//! - `len:N` - every text element is exactly N long
//! - `min:N` / `max:N` - every integer is `>= N` / `<= N`; for text, its
//!   *length* is compared
//! - `in:a,b,c` - every element equals one of the literals, which are typed
//!   after the field (integer or text)
//!
//! Collection fields (`Vec<T>`, `[T; N]`, slices) are checked element by
//! element and pass only if every element passes.
//!
//! ## Deriving
//!
//! `#[derive(Inspect)]` (feature `derive`, on by default) lists every field
//! in declaration order. Only plain `pub` fields are readable; a spec on any
//! other field is reported as a failure. Besides the spec string the
//! attribute takes `rename = "..."`, `flatten` (splice an embedded record's
//! fields in place) and `skip`.
//!
//! ## Errors
//!
//! Only a value that is not a record stops validation early
//! ([`Error::NotAStruct`]). Everything else is collected into
//! [`ValidationErrors`]: malformed clauses, annotated private fields and the
//! constraint violations themselves.
//!
//! ## Limitations
//!
//! Elements of kinds other than integer and text (floats, booleans, integers
//! that do not fit in `i64`) are skipped by every constraint: they neither
//! pass nor fail it.

pub mod constraint;
mod engine;
pub mod foundation;
pub mod prelude;
pub mod validators;

pub use engine::{Validator, validate, visible_fields};
pub use foundation::{
    AsFieldValue, Atom, Atomic, ElementKind, Error, Field, FieldValue, Inspect, Shape,
    ValidationErrors, ValidationFailure, ValidationResult, ValueKind, Visibility,
};
pub use validators::LengthMode;

/// `#[derive(Inspect)]`: generates the field table for a struct.
#[cfg(feature = "derive")]
pub use structval_macros::Inspect;
