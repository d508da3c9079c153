//! Scan accumulators
//!
//! An accumulator starts at its zero value (`0` or empty) and is mutated
//! only by the scan loop, once per symbol that passes the predicate.

use std::fmt;

/// Running result of a scan.
pub trait Accumulator<S> {
    /// Final value produced by the scan.
    type Output;

    /// Record a symbol that satisfied the predicate.
    fn absorb(&mut self, symbol: &S);

    /// Consume the accumulator and return its value.
    fn finish(self) -> Self::Output;
}

/// Counts matching symbols. Starts at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: usize,
}

impl Counter {
    /// Zeroed counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<S> Accumulator<S> for Counter {
    type Output = usize;

    fn absorb(&mut self, _symbol: &S) {
        self.count += 1;
    }

    fn finish(self) -> usize {
        self.count
    }
}

/// Collects matching symbols in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collector<S> {
    symbols: Vec<S>,
}

impl<S> Collector<S> {
    /// Empty collector.
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Symbols gathered so far.
    pub fn collected(&self) -> &[S] {
        &self.symbols
    }
}

impl<S> Default for Collector<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> Accumulator<S> for Collector<S> {
    type Output = Vec<S>;

    fn absorb(&mut self, symbol: &S) {
        self.symbols.push(symbol.clone());
    }

    fn finish(self) -> Vec<S> {
        self.symbols
    }
}

/// Accumulation mode chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AccumulationMode {
    /// Count matching symbols.
    #[default]
    Count,
    /// Copy matching symbols to an output sequence.
    Collect,
}

/// Result of a scan whose mode was chosen at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScanOutput<S> {
    /// Number of matching symbols.
    Count(usize),
    /// Matching symbols in scan order.
    Collected(Vec<S>),
}

impl<S> ScanOutput<S> {
    /// The count, if this output came from a counting scan.
    pub fn as_count(&self) -> Option<usize> {
        match self {
            ScanOutput::Count(count) => Some(*count),
            ScanOutput::Collected(_) => None,
        }
    }

    /// The collected symbols, if this output came from a collecting scan.
    pub fn as_collected(&self) -> Option<&[S]> {
        match self {
            ScanOutput::Count(_) => None,
            ScanOutput::Collected(symbols) => Some(symbols),
        }
    }
}

/// Either accumulator, picked by [`AccumulationMode`].
#[derive(Debug, Clone)]
pub enum ModalAccumulator<S> {
    /// Counting mode.
    Count(Counter),
    /// Collecting mode.
    Collect(Collector<S>),
}

impl<S> ModalAccumulator<S> {
    /// Zero value for the requested mode.
    pub fn for_mode(mode: AccumulationMode) -> Self {
        match mode {
            AccumulationMode::Count => ModalAccumulator::Count(Counter::new()),
            AccumulationMode::Collect => ModalAccumulator::Collect(Collector::new()),
        }
    }
}

impl<S: Clone> Accumulator<S> for ModalAccumulator<S> {
    type Output = ScanOutput<S>;

    fn absorb(&mut self, symbol: &S) {
        match self {
            ModalAccumulator::Count(counter) => Accumulator::<S>::absorb(counter, symbol),
            ModalAccumulator::Collect(collector) => collector.absorb(symbol),
        }
    }

    fn finish(self) -> ScanOutput<S> {
        match self {
            ModalAccumulator::Count(counter) => ScanOutput::Count(counter.count()),
            ModalAccumulator::Collect(collector) => ScanOutput::Collected(collector.finish()),
        }
    }
}

impl fmt::Display for ScanOutput<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanOutput::Count(count) => write!(f, "{count}"),
            ScanOutput::Collected(symbols) => {
                for symbol in symbols {
                    write!(f, "{symbol}")?;
                }
                Ok(())
            }
        }
    }
}
