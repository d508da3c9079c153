//! Immutable symbol sequences and the read side of a scan
//!
//! A [`Sequence`] is built once and never mutated while it is scanned.
//! Reading happens through a [`Cursor`], which owns the scan position and
//! never indexes past the end.

mod cursor;

pub use cursor::Cursor;

use std::fmt;
use std::sync::Arc;

/// Ordered, finite, 0-indexed list of symbols.
///
/// Backed by `Arc<[S]>` so clones are cheap and independent scans can share
/// the same storage across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence<S> {
    symbols: Arc<[S]>,
}

impl<S> Sequence<S> {
    /// Wrap an owned vector of symbols.
    pub fn new(symbols: Vec<S>) -> Self {
        Self {
            symbols: Arc::from(symbols.into_boxed_slice()),
        }
    }

    /// Empty sequence.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True when there is nothing to scan.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `position`, if any.
    pub fn get(&self, position: usize) -> Option<&S> {
        self.symbols.get(position)
    }

    /// Iterate over symbols in order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.symbols.iter()
    }

    /// Borrow the backing slice.
    pub fn as_slice(&self) -> &[S] {
        &self.symbols
    }

    /// Open a cursor positioned at the first symbol.
    pub fn cursor(&self) -> Cursor<'_, S> {
        Cursor::new(self)
    }

    /// Position of the first occurrence of `symbol`.
    pub fn position_of(&self, symbol: &S) -> Option<usize>
    where
        S: PartialEq,
    {
        self.symbols.iter().position(|candidate| candidate == symbol)
    }
}

impl Sequence<char> {
    /// Copy of the sequence with every ASCII letter upper-cased.
    ///
    /// Membership tests are case-sensitive; this is the explicit
    /// normalisation step for callers that want `a` and `A` to match.
    pub fn to_ascii_uppercase(&self) -> Self {
        self.iter().map(char::to_ascii_uppercase).collect()
    }

    /// Render the sequence back to a `String`.
    pub fn to_text(&self) -> String {
        self.iter().collect()
    }
}

impl<S> Default for Sequence<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S> From<Vec<S>> for Sequence<S> {
    fn from(symbols: Vec<S>) -> Self {
        Self::new(symbols)
    }
}

impl<S: Clone> From<&[S]> for Sequence<S> {
    fn from(symbols: &[S]) -> Self {
        Self::new(symbols.to_vec())
    }
}

impl From<&str> for Sequence<char> {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl From<String> for Sequence<char> {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl<S> FromIterator<S> for Sequence<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, S> IntoIterator for &'a Sequence<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Sequence<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.iter() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Read access an input collaborator must provide to be scanned.
///
/// Symbols are addressed by position; `symbol_at` returning `None` is how
/// exhaustion is signalled.
pub trait SymbolSource<S> {
    /// Symbol at `position`, or `None` once the source is exhausted.
    fn symbol_at(&self, position: usize) -> Option<&S>;

    /// Total number of symbols available.
    fn len(&self) -> usize;

    /// True when the source holds no symbols.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> SymbolSource<S> for Sequence<S> {
    fn symbol_at(&self, position: usize) -> Option<&S> {
        self.get(position)
    }

    fn len(&self) -> usize {
        Sequence::len(self)
    }
}

impl<S> SymbolSource<S> for &[S] {
    fn symbol_at(&self, position: usize) -> Option<&S> {
        self.get(position)
    }

    fn len(&self) -> usize {
        <[S]>::len(self)
    }
}

impl<S> SymbolSource<S> for Vec<S> {
    fn symbol_at(&self, position: usize) -> Option<&S> {
        self.get(position)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_text() {
        let seq = Sequence::from("BAAC*");
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.get(4), Some(&'*'));
        assert_eq!(seq.get(5), None);
        assert_eq!(seq.position_of(&'*'), Some(4));
    }

    #[test]
    fn clones_share_storage() {
        let seq = Sequence::new(vec![34564u32, 91218, 310101]);
        let copy = seq.clone();
        assert_eq!(seq.as_slice().as_ptr(), copy.as_slice().as_ptr());
    }

    #[test]
    fn uppercase_normalisation_only_touches_ascii_letters() {
        let seq = Sequence::from("ab$Cd1");
        assert_eq!(seq.to_ascii_uppercase().to_text(), "AB$CD1");
    }

    #[test]
    fn slice_and_vec_are_symbol_sources() {
        let symbols = vec!['x', 'y'];
        assert_eq!(SymbolSource::<char>::len(&symbols), 2);
        assert_eq!(symbols.as_slice().symbol_at(1), Some(&'y'));
        assert!(SymbolSource::<char>::is_empty(&Vec::<char>::new()));
    }
}
