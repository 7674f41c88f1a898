//! Prelude module for convenient imports.
//!
//! Provides a single `use structval::prelude::*;` import that brings in the
//! entry points, the introspection trait (and its derive) and the error types.

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::engine::{Validator, validate, visible_fields};
pub use crate::validators::LengthMode;

// ============================================================================
// FOUNDATION: Introspection, values, errors
// ============================================================================

pub use crate::foundation::{
    AsFieldValue, Error, Field, FieldValue, Inspect, Shape, ValidationErrors, ValidationFailure,
    ValidationResult, Visibility,
};

// ============================================================================
// DERIVE-GATED
// ============================================================================

#[cfg(feature = "derive")]
pub use structval_macros::Inspect;
