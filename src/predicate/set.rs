//! Hash-set backed symbol membership

use std::collections::HashSet;
use std::hash::Hash;

/// Small fixed set of symbols with element-wise membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet<S: Eq + Hash> {
    members: HashSet<S>,
}

impl<S: Eq + Hash> SymbolSet<S> {
    /// Build a set from any collection of symbols.
    pub fn new(members: impl IntoIterator<Item = S>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    /// Membership test. Exact comparison, no normalisation.
    pub fn contains(&self, symbol: &S) -> bool {
        self.members.contains(symbol)
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Iterate over members in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.members.iter()
    }

    /// True for the empty set.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl SymbolSet<char> {
    /// Uppercase vowels `A E I O U`.
    pub fn vowels() -> Self {
        Self::new("AEIOU".chars())
    }

    /// Vowels in both cases.
    pub fn vowels_any_case() -> Self {
        Self::new("AEIOUaeiou".chars())
    }

    /// Decimal digits `0`..=`9`.
    pub fn digits() -> Self {
        Self::new('0'..='9')
    }

    /// Copy of the set with every ASCII letter upper-cased.
    pub fn to_ascii_uppercase(&self) -> Self {
        self.iter().map(char::to_ascii_uppercase).collect()
    }

    /// Characters of `text`, one member each.
    pub fn of_chars(text: &str) -> Self {
        Self::new(text.chars())
    }
}

impl<S: Eq + Hash> FromIterator<S> for SymbolSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
