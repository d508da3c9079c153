//! Termination policy and loop shape

use std::fmt;
use std::str::FromStr;

use crate::ScanError;

/// When a scan stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TerminationPolicy<S> {
    /// Stop at the first occurrence of the sentinel symbol. If it never
    /// occurs, the end of the sequence acts as an implicit sentinel.
    StopAtSymbol(S),
    /// Process every symbol.
    StopAtEnd,
}

impl<S> TerminationPolicy<S> {
    /// Sentinel symbol, if the policy has one.
    pub fn terminator(&self) -> Option<&S> {
        match self {
            TerminationPolicy::StopAtSymbol(symbol) => Some(symbol),
            TerminationPolicy::StopAtEnd => None,
        }
    }

    /// True if `symbol` is this policy's sentinel.
    pub fn is_terminator(&self, symbol: &S) -> bool
    where
        S: PartialEq,
    {
        self.terminator().is_some_and(|t| t == symbol)
    }
}

/// Where the terminator check sits relative to the predicate.
///
/// - `Lookahead`: peek before processing each position. The terminator is
///   never handed to the predicate.
/// - `PostTest`: the first symbol is always processed; afterwards the loop
///   advances and checks the newly read symbol. A terminator at position 0
///   is therefore processed as data, a terminator anywhere else is not.
///
/// Both shapes process every symbol under [`TerminationPolicy::StopAtEnd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LoopConvention {
    /// Pre-test loop (`mientras letra <> "*"`).
    #[default]
    Lookahead,
    /// Post-test loop (`repetir ... hasta que`).
    PostTest,
}

impl LoopConvention {
    /// Stable lowercase identifier, also accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoopConvention::Lookahead => "lookahead",
            LoopConvention::PostTest => "post-test",
        }
    }
}

impl fmt::Display for LoopConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoopConvention {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lookahead" | "pre-test" => Ok(LoopConvention::Lookahead),
            "post-test" | "posttest" => Ok(LoopConvention::PostTest),
            other => Err(ScanError::InvalidConfiguration(format!(
                "unknown loop convention '{other}' (expected lookahead or post-test)"
            ))),
        }
    }
}
