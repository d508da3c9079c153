//! Textual predicate descriptions for character scans
//!
//! Syntax: `is:C`, `not:C`, `in:CHARS`, `not-in:CHARS`, `vowel`,
//! `consonant`, `digit`, `any`.

use std::str::FromStr;

use super::{Predicate, SymbolSet};
use crate::ScanError;

/// Character predicate built from a description string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharPredicate {
    /// Exactly this character.
    Is(char),
    /// Anything but this character.
    Not(char),
    /// Any member of the set.
    In(SymbolSet<char>),
    /// Anything outside the set.
    NotIn(SymbolSet<char>),
    /// Every character.
    Any,
}

impl CharPredicate {
    /// Same predicate with its operands upper-cased, for use against an
    /// upper-cased sequence.
    pub fn to_ascii_uppercase(&self) -> Self {
        match self {
            CharPredicate::Is(c) => CharPredicate::Is(c.to_ascii_uppercase()),
            CharPredicate::Not(c) => CharPredicate::Not(c.to_ascii_uppercase()),
            CharPredicate::In(set) => CharPredicate::In(set.to_ascii_uppercase()),
            CharPredicate::NotIn(set) => CharPredicate::NotIn(set.to_ascii_uppercase()),
            CharPredicate::Any => CharPredicate::Any,
        }
    }
}

impl Predicate<char> for CharPredicate {
    fn test(&self, symbol: &char) -> bool {
        match self {
            CharPredicate::Is(c) => symbol == c,
            CharPredicate::Not(c) => symbol != c,
            CharPredicate::In(set) => set.contains(symbol),
            CharPredicate::NotIn(set) => !set.contains(symbol),
            CharPredicate::Any => true,
        }
    }
}

impl FromStr for CharPredicate {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => return Ok(CharPredicate::Any),
            "vowel" => return Ok(CharPredicate::In(SymbolSet::vowels())),
            "consonant" => return Ok(CharPredicate::NotIn(SymbolSet::vowels())),
            "digit" => return Ok(CharPredicate::In(SymbolSet::digits())),
            _ => {}
        }

        let (kind, operand) = s.split_once(':').ok_or_else(|| {
            ScanError::InvalidPredicate(format!(
                "'{s}' is not one of any, vowel, consonant, digit, is:C, not:C, in:CHARS, not-in:CHARS"
            ))
        })?;

        match kind {
            "is" => single_char(operand).map(CharPredicate::Is),
            "not" => single_char(operand).map(CharPredicate::Not),
            "in" => non_empty_set(operand).map(CharPredicate::In),
            "not-in" => non_empty_set(operand).map(CharPredicate::NotIn),
            other => Err(ScanError::InvalidPredicate(format!(
                "unknown predicate kind '{other}'"
            ))),
        }
    }
}

fn single_char(operand: &str) -> Result<char, ScanError> {
    let mut chars = operand.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ScanError::InvalidPredicate(format!(
            "expected exactly one character, got '{operand}'"
        ))),
    }
}

fn non_empty_set(operand: &str) -> Result<SymbolSet<char>, ScanError> {
    if operand.is_empty() {
        return Err(ScanError::InvalidPredicate(
            "character set must not be empty".to_string(),
        ));
    }
    Ok(SymbolSet::of_chars(operand))
}
