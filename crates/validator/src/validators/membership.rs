//! `in:` evaluator

use crate::constraint::SyntaxError;
use crate::foundation::{Atom, ElementKind, FieldValue};

/// The allowed values of an `in:` clause, typed after the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedSet<'s> {
    /// Integer field: literals parsed as `i64`.
    Integers(Vec<i64>),
    /// Text field: literals taken verbatim.
    Text(Vec<&'s str>),
    /// Field kind the evaluator does not check.
    Unchecked,
}

/// A parsed `in:` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership<'s> {
    literals: Vec<&'s str>,
    allowed: AllowedSet<'s>,
}

impl<'s> Membership<'s> {
    /// Splits `list` on `,` and types each literal after `kind`.
    ///
    /// For integer fields, literals that do not parse are reported and left
    /// out of the set; the rest still count. Well-formed literals outside the
    /// `i64` range are not errors, but are left out too: no atom can hold them.
    pub fn parse(list: &'s str, kind: ElementKind) -> (Self, Vec<SyntaxError>) {
        let literals: Vec<&str> = list.split(',').collect();
        let mut errors = Vec::new();

        let allowed = match kind {
            ElementKind::Integer => AllowedSet::Integers(
                literals
                    .iter()
                    .filter_map(|literal| match literal.parse::<i128>() {
                        Ok(n) => i64::try_from(n).ok(),
                        Err(_) => {
                            errors.push(SyntaxError::InvalidLiteral {
                                literal: (*literal).to_owned(),
                            });
                            None
                        }
                    })
                    .collect(),
            ),
            ElementKind::Text => AllowedSet::Text(literals.clone()),
            ElementKind::Unsupported => AllowedSet::Unchecked,
        };

        (Self { literals, allowed }, errors)
    }

    /// The literals as written, including ones that failed to parse.
    #[must_use]
    pub fn literals(&self) -> &[&'s str] {
        &self.literals
    }

    /// The typed set.
    #[must_use]
    pub fn allowed(&self) -> &AllowedSet<'s> {
        &self.allowed
    }

    /// Whether `atom` is in the set; `None` when the atom is not checked.
    pub fn contains(&self, atom: &Atom<'_>) -> Option<bool> {
        match (atom, &self.allowed) {
            (Atom::Unsupported, _) | (_, AllowedSet::Unchecked) => None,
            (Atom::Int(n), AllowedSet::Integers(set)) => Some(set.contains(n)),
            (Atom::Text(text), AllowedSet::Text(set)) => Some(set.iter().any(|s| s == text)),
            (Atom::Int(_), AllowedSet::Text(_)) | (Atom::Text(_), AllowedSet::Integers(_)) => {
                Some(false)
            }
        }
    }
}

/// `in:...` holds when every checked element is in the set.
pub fn check_membership(value: &FieldValue<'_>, membership: &Membership<'_>) -> bool {
    value
        .atoms()
        .iter()
        .all(|atom| membership.contains(atom).unwrap_or(true))
}
