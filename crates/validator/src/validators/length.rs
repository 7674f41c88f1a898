//! Text length measurement and the `len:` evaluator
//!
//! By default, length is the number of UTF-8 bytes.
//! [`LengthMode::Chars`] counts Unicode scalar values instead.

use crate::foundation::{Atom, FieldValue};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> i64 {
        let len = match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        };
        i64::try_from(len).unwrap_or(i64::MAX)
    }
}

// ============================================================================
// EXACT LENGTH
// ============================================================================

/// `len:N` holds when every text element is exactly `expected` long.
///
/// Non-text elements are skipped.
pub fn check_length(value: &FieldValue<'_>, expected: i64, mode: LengthMode) -> bool {
    value.atoms().iter().all(|atom| match atom {
        Atom::Text(text) => mode.measure(text) == expected,
        Atom::Int(_) | Atom::Unsupported => true,
    })
}

// ============================================================================
// TESTS
// ============================================================================
