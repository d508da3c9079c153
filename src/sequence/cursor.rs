//! Forward-only read head over a symbol source

use super::SymbolSource;
use crate::ScanError;

/// Read head for a single scan.
///
/// The position is local to the cursor; nothing about it is shared between
/// scans. `peek` is the non-failing read the scanner uses, `read` is the
/// strict variant that reports [`ScanError::OutOfBounds`].
pub struct Cursor<'a, S> {
    source: &'a dyn SymbolSource<S>,
    position: usize,
}

impl<'a, S> Cursor<'a, S> {
    /// Place a cursor at the first position of `source`.
    pub fn new(source: &'a dyn SymbolSource<S>) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Current position (0-indexed).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Symbol under the cursor, or `None` once past the last position.
    pub fn peek(&self) -> Option<&'a S> {
        self.source.symbol_at(self.position)
    }

    /// Symbol under the cursor, failing when past the last position.
    pub fn read(&self) -> Result<&'a S, ScanError> {
        self.peek().ok_or(ScanError::OutOfBounds {
            position: self.position,
            len: self.source.len(),
        })
    }

    /// Move one position forward. Advancing past the end is allowed and
    /// leaves the cursor exhausted.
    pub fn advance(&mut self) {
        if self.position <= self.source.len() {
            self.position += 1;
        }
    }

    /// True when no symbol remains under the cursor.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Length of the underlying source.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }
}

impl<S> std::fmt::Debug for Cursor<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.source.len())
            .finish()
    }
}
