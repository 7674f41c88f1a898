//! Spec string parsing

use super::{Constraint, ConstraintKind};

/// Why a clause or literal could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The clause has no `:` between name and argument.
    #[error("clause {clause:?} has no ':' separator")]
    MissingSeparator {
        /// The offending clause.
        clause: String,
    },

    /// A `len`, `min` or `max` argument is not an integer.
    #[error("argument {argument:?} of '{kind}' is not an integer")]
    InvalidInteger {
        /// Constraint the argument belongs to.
        kind: ConstraintKind,
        /// The offending argument.
        argument: String,
    },

    /// An `in` literal is not an integer although the field is.
    #[error("literal {literal:?} of 'in' is not an integer")]
    InvalidLiteral {
        /// The offending literal.
        literal: String,
    },

    /// The clause name is not one of `len`, `min`, `max`, `in`.
    #[error("unknown constraint {name:?}")]
    UnknownConstraint {
        /// The unrecognized name.
        name: String,
    },
}

/// Iterator over the clauses of a spec, see [`parse_spec`].
#[derive(Debug, Clone)]
pub struct Clauses<'s> {
    inner: Option<std::str::Split<'s, char>>,
}

impl<'s> Iterator for Clauses<'s> {
    type Item = Result<Constraint<'s>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().map(parse_clause)
    }
}

/// Splits a spec on `;` and parses each clause.
///
/// Yields one result per clause, in order. An empty spec yields nothing.
///
/// # Examples
///
/// ```rust
/// use structval::constraint::{Constraint, SyntaxError, parse_spec};
///
/// let parsed: Vec<_> = parse_spec("len:4;min;in:A,B").collect();
/// assert_eq!(parsed[0], Ok(Constraint::Length(4)));
/// assert!(matches!(parsed[1], Err(SyntaxError::MissingSeparator { .. })));
/// assert_eq!(parsed[2], Ok(Constraint::Membership("A,B")));
/// ```
pub fn parse_spec(spec: &str) -> Clauses<'_> {
    Clauses {
        inner: (!spec.is_empty()).then(|| spec.split(';')),
    }
}

fn parse_clause(clause: &str) -> Result<Constraint<'_>, SyntaxError> {
    let Some((name, argument)) = clause.split_once(':') else {
        return Err(SyntaxError::MissingSeparator {
            clause: clause.to_owned(),
        });
    };

    let kind: ConstraintKind = name.parse()?;
    if !kind.takes_integer() {
        return Ok(Constraint::Membership(argument));
    }

    let n = argument
        .parse::<i64>()
        .map_err(|_| SyntaxError::InvalidInteger {
            kind,
            argument: argument.to_owned(),
        })?;

    Ok(match kind {
        ConstraintKind::Length => Constraint::Length(n),
        ConstraintKind::Minimum => Constraint::Minimum(n),
        ConstraintKind::Maximum => Constraint::Maximum(n),
        ConstraintKind::Membership => Constraint::Membership(argument),
    })
}
