//! Shared infrastructure for derive macros
//!
//! # Modules
//!
//! - [`validation`] - Input validation helpers

pub(crate) mod validation;
