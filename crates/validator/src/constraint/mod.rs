//! Constraint spec parsing
//!
//! A field's spec is a `;`-separated list of `name:argument` clauses:
//!
//! ```text
//! tag      := clause (";" clause)*
//! clause   := name ":" argument
//! name     := "len" | "min" | "max" | "in"
//! argument := integer                  ; len, min, max
//!           | literal ("," literal)*   ; in
//! ```
//!
//! [`parse_spec`] turns the text into typed [`Constraint`]s, one result per
//! clause, so a bad clause never hides the ones after it.

mod parse;

pub use parse::{Clauses, SyntaxError, parse_spec};

use std::fmt;
use std::str::FromStr;

// ============================================================================
// CONSTRAINT KIND
// ============================================================================

/// The closed set of constraint kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// `len:N` - exact text length.
    Length,
    /// `min:N` - lower bound on integers, or on text length.
    Minimum,
    /// `max:N` - upper bound on integers, or on text length.
    Maximum,
    /// `in:a,b,c` - set membership.
    Membership,
}

impl ConstraintKind {
    /// All kinds, in the order they are documented.
    pub const ALL: [ConstraintKind; 4] = [
        ConstraintKind::Length,
        ConstraintKind::Minimum,
        ConstraintKind::Maximum,
        ConstraintKind::Membership,
    ];

    /// The clause name used in specs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ConstraintKind::Length => "len",
            ConstraintKind::Minimum => "min",
            ConstraintKind::Maximum => "max",
            ConstraintKind::Membership => "in",
        }
    }

    /// Whether the argument is a single integer.
    #[must_use]
    pub const fn takes_integer(self) -> bool {
        !matches!(self, ConstraintKind::Membership)
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConstraintKind {
    type Err = SyntaxError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| SyntaxError::UnknownConstraint {
                name: name.to_owned(),
            })
    }
}

// ============================================================================
// CONSTRAINT
// ============================================================================

/// One parsed clause.
///
/// Integer arguments are already parsed; the membership list stays raw
/// because its literal type depends on the field it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint<'s> {
    /// `len:N`
    Length(i64),
    /// `min:N`
    Minimum(i64),
    /// `max:N`
    Maximum(i64),
    /// `in:...`, the text after the `:`.
    Membership(&'s str),
}

impl Constraint<'_> {
    /// The kind of this constraint.
    #[must_use]
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Length(_) => ConstraintKind::Length,
            Constraint::Minimum(_) => ConstraintKind::Minimum,
            Constraint::Maximum(_) => ConstraintKind::Maximum,
            Constraint::Membership(_) => ConstraintKind::Membership,
        }
    }
}

impl fmt::Display for Constraint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Length(n) | Constraint::Minimum(n) | Constraint::Maximum(n) => {
                write!(f, "{}:{n}", self.kind())
            }
            Constraint::Membership(list) => write!(f, "in:{list}"),
        }
    }
}
