//! Per-symbol predicates
//!
//! Predicates are total: every symbol gets a `bool`, including symbols
//! outside the alphabet the caller had in mind (other case, digits,
//! punctuation).

mod parse;
mod set;

pub use parse::CharPredicate;
pub use set::SymbolSet;

use std::hash::Hash;

/// Pure test applied to each scanned symbol.
pub trait Predicate<S> {
    /// Whether `symbol` contributes to the accumulator.
    fn test(&self, symbol: &S) -> bool;
}

impl<S, F> Predicate<S> for F
where
    F: Fn(&S) -> bool,
{
    fn test(&self, symbol: &S) -> bool {
        self(symbol)
    }
}

/// Combinators available on every predicate.
pub trait PredicateExt<S>: Predicate<S> + Sized {
    /// Logical negation.
    fn negate(self) -> Not<Self> {
        Not(self)
    }
}

impl<S, P: Predicate<S>> PredicateExt<S> for P {}

/// Matches every symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl<S> Predicate<S> for Always {
    fn test(&self, _symbol: &S) -> bool {
        true
    }
}

/// Matches one symbol exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Is<S>(pub S);

impl<S: PartialEq> Predicate<S> for Is<S> {
    fn test(&self, symbol: &S) -> bool {
        *symbol == self.0
    }
}

/// Matches everything except one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsNot<S>(pub S);

impl<S: PartialEq> Predicate<S> for IsNot<S> {
    fn test(&self, symbol: &S) -> bool {
        *symbol != self.0
    }
}

/// Matches members of a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberOf<S: Eq + Hash>(pub SymbolSet<S>);

impl<S: Eq + Hash> Predicate<S> for MemberOf<S> {
    fn test(&self, symbol: &S) -> bool {
        self.0.contains(symbol)
    }
}

/// Matches symbols outside a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotMemberOf<S: Eq + Hash>(pub SymbolSet<S>);

impl<S: Eq + Hash> Predicate<S> for NotMemberOf<S> {
    fn test(&self, symbol: &S) -> bool {
        !self.0.contains(symbol)
    }
}

/// Negation of an inner predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<P>(pub P);

impl<S, P: Predicate<S>> Predicate<S> for Not<P> {
    fn test(&self, symbol: &S) -> bool {
        !self.0.test(symbol)
    }
}
