//! Three-valued logic for classification predicates.
//!
//! Calcium-style symbolic engines cannot always decide membership questions
//! (`is_zero`, `is_undefined`, ...) exactly -- a cheap structural or
//! numerical test may fail to separate "definitely not" from "can't tell".
//! `Trivalent` makes that distinction explicit in the type system instead of
//! overloading `Option<bool>`, where `None` would be ambiguous between "no"
//! and "unknown".

use std::ops::Not;

/// A three-valued boolean: `True`, `False`, or `Unknown`.
///
/// `Unknown` is a first-class outcome, not a failure -- see the crate-level
/// error handling discussion. Predicates that consult a numerical enclosure
/// return `Unknown` rather than guessing whenever the enclosure does not
/// separate the cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trivalent {
    True,
    False,
    Unknown,
}

impl Trivalent {
    pub fn from_bool(b: bool) -> Self {
        if b { Trivalent::True } else { Trivalent::False }
    }

    pub fn is_true(self) -> bool {
        matches!(self, Trivalent::True)
    }

    pub fn is_false(self) -> bool {
        matches!(self, Trivalent::False)
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Trivalent::Unknown)
    }

    /// Three-valued AND: `Unknown` only when neither side is definitely `False`.
    pub fn and(self, other: Trivalent) -> Trivalent {
        match (self, other) {
            (Trivalent::False, _) | (_, Trivalent::False) => Trivalent::False,
            (Trivalent::True, Trivalent::True) => Trivalent::True,
            _ => Trivalent::Unknown,
        }
    }

    /// Three-valued OR: `Unknown` only when neither side is definitely `True`.
    pub fn or(self, other: Trivalent) -> Trivalent {
        match (self, other) {
            (Trivalent::True, _) | (_, Trivalent::True) => Trivalent::True,
            (Trivalent::False, Trivalent::False) => Trivalent::False,
            _ => Trivalent::Unknown,
        }
    }
}

impl Not for Trivalent {
    type Output = Trivalent;
    fn not(self) -> Trivalent {
        match self {
            Trivalent::True => Trivalent::False,
            Trivalent::False => Trivalent::True,
            Trivalent::Unknown => Trivalent::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_flips_true_false_fixes_unknown() {
        assert_eq!(!Trivalent::True, Trivalent::False);
        assert_eq!(!Trivalent::False, Trivalent::True);
        assert_eq!(!Trivalent::Unknown, Trivalent::Unknown);
    }

    #[test]
    fn and_false_dominates() {
        assert_eq!(Trivalent::False.and(Trivalent::Unknown), Trivalent::False);
        assert_eq!(Trivalent::Unknown.and(Trivalent::False), Trivalent::False);
    }

    #[test]
    fn or_true_dominates() {
        assert_eq!(Trivalent::True.or(Trivalent::Unknown), Trivalent::True);
        assert_eq!(Trivalent::Unknown.or(Trivalent::True), Trivalent::True);
    }

    #[test]
    fn unknown_propagates_without_opposite_dominance() {
        assert_eq!(Trivalent::Unknown.and(Trivalent::True), Trivalent::Unknown);
        assert_eq!(Trivalent::Unknown.or(Trivalent::False), Trivalent::Unknown);
    }
}
