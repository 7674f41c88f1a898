//! Constraint evaluators
//!
//! One evaluator per [`ConstraintKind`](crate::constraint::ConstraintKind):
//!
//! - **Length**: [`check_length`] (`len:N`, text only)
//! - **Range**: [`check_minimum`], [`check_maximum`] (`min:N`, `max:N`;
//!   integers by value, text by length)
//! - **Membership**: [`check_membership`] (`in:a,b,c`)
//!
//! Every evaluator walks the field's atoms and passes only if all of them
//! pass. Atoms of unsupported kinds (floats, booleans, out-of-range wide
//! integers) are skipped and never make a check fail.

pub mod length;
pub mod membership;
pub mod range;

pub use length::{LengthMode, check_length};
pub use membership::{AllowedSet, Membership, check_membership};
pub use range::{check_maximum, check_minimum};

use std::borrow::Cow;

use crate::constraint::Constraint;
use crate::foundation::{ElementKind, FieldValue, ValidationErrors, ValidationFailure};

/// Applies one constraint to one field value, recording what failed.
///
/// At most one semantic failure is recorded per call, however many elements
/// violate the constraint. Membership literals that do not parse are
/// recorded as syntax failures before it.
pub fn evaluate(
    constraint: Constraint<'_>,
    field: &Cow<'static, str>,
    element_kind: ElementKind,
    value: &FieldValue<'_>,
    mode: LengthMode,
    errors: &mut ValidationErrors,
) {
    let failure = match constraint {
        Constraint::Length(expected) => (!check_length(value, expected, mode))
            .then(|| ValidationFailure::Length {
                field: field.clone(),
            }),
        Constraint::Minimum(min) => {
            (!check_minimum(value, min, mode)).then(|| ValidationFailure::Minimum {
                field: field.clone(),
            })
        }
        Constraint::Maximum(max) => {
            (!check_maximum(value, max, mode)).then(|| ValidationFailure::Maximum {
                field: field.clone(),
            })
        }
        Constraint::Membership(list) => {
            let (membership, syntax) = Membership::parse(list, element_kind);
            errors.extend(syntax.into_iter().map(|err| ValidationFailure::InvalidSyntax {
                field: field.clone(),
                reason: err.to_string(),
            }));
            (!check_membership(value, &membership)).then(|| ValidationFailure::Membership {
                field: field.clone(),
                literals: membership.literals().iter().map(|s| (*s).to_owned()).collect(),
            })
        }
    };

    if let Some(failure) = failure {
        errors.add(failure);
    }
}
