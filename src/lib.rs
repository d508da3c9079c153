//! # Sentinel-terminated sequence scanning
//!
//! Single-pass scanner over a fixed sequence of symbols. Each scan walks the
//! sequence from the start, applies a predicate to every symbol it reaches,
//! and stops at a sentinel symbol or at the end of the sequence.
//!
//! ## Pieces
//!
//! 1. **Sequence**: immutable, 0-indexed symbols read through a cursor
//! 2. **Termination**: `StopAtSymbol(s)` or `StopAtEnd`, in one of two loop shapes
//! 3. **Predicate**: total `&S -> bool`
//! 4. **Accumulator**: a counter or a collector
//!
//! A sentinel that never appears is not an error: the end of the sequence
//! acts as an implicit sentinel and the result equals a `StopAtEnd` scan.
//!
//! ## Usage Example
//!
//! ```
//! use sentinel_scan::{Is, ScanConfig, Scanner, Sequence};
//!
//! let scanner = Scanner::new(ScanConfig::stop_at('*'));
//! let result = scanner.count(&Sequence::from("BAAC*"), &Is('A'));
//! assert_eq!(result.output, 2);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod sequence;    // Immutable sequences and cursors
pub mod machine;     // Scan state machine and termination policy
pub mod predicate;   // Per-symbol predicates and symbol sets
pub mod accumulator; // Counting and collecting accumulators
pub mod trace;       // Examined-position tracking
pub mod exercise;    // Named scan instances and registry

// Re-exports for convenience
pub use sequence::{Cursor, Sequence, SymbolSource};
pub use machine::{LoopConvention, ScanMachine, ScanState, Step, StopReason, TerminationPolicy};
pub use predicate::{
    Always, Is, IsNot, MemberOf, Not, NotMemberOf, Predicate, PredicateExt, SymbolSet,
};
pub use accumulator::{AccumulationMode, Accumulator, Collector, Counter, ScanOutput};
pub use trace::ScanTrace;
pub use exercise::{Exercise, ExerciseRegistry, ExerciseReport};

use std::fmt;

use accumulator::ModalAccumulator;
use thiserror::Error;
use tracing::debug;

/// Errors reported by the crate.
///
/// Scanning itself cannot fail: reading past the end is recovered inside the
/// scan as an implicit stop. These variants come from strict reads and from
/// turning user input into a scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// Strict read past the end of the sequence
    #[error("read at position {position} is out of bounds for sequence of length {len}")]
    OutOfBounds {
        /// Position that was read
        position: usize,
        /// Length of the sequence
        len: usize,
    },

    /// Predicate description could not be understood
    #[error("invalid predicate: {0}")]
    InvalidPredicate(String),

    /// Scan parameters are inconsistent
    #[error("invalid scan configuration: {0}")]
    InvalidConfiguration(String),

    /// No exercise registered under this name
    #[error("unknown exercise '{0}'")]
    UnknownExercise(String),
}

/// Parameters fixed for the lifetime of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig<S> {
    /// When to stop
    pub policy: TerminationPolicy<S>,

    /// Where the terminator check sits in the loop
    pub convention: LoopConvention,

    /// Emit a `trace` event for every processed symbol
    pub trace_steps: bool,
}

impl<S> ScanConfig<S> {
    /// Stop at the first occurrence of `terminator` (lookahead loop).
    pub fn stop_at(terminator: S) -> Self {
        Self::with_policy(TerminationPolicy::StopAtSymbol(terminator))
    }

    /// Process the whole sequence.
    pub fn stop_at_end() -> Self {
        Self::with_policy(TerminationPolicy::StopAtEnd)
    }

    /// Explicit policy, default loop shape.
    pub fn with_policy(policy: TerminationPolicy<S>) -> Self {
        Self {
            policy,
            convention: LoopConvention::default(),
            trace_steps: false,
        }
    }

    /// Select the loop shape.
    pub fn with_convention(mut self, convention: LoopConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Enable per-step trace events.
    pub fn with_step_tracing(mut self, enabled: bool) -> Self {
        self.trace_steps = enabled;
        self
    }
}

/// Output of a scan plus the record of what it examined
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult<T> {
    /// Final accumulator value
    pub output: T,

    /// Examined positions and stop reason
    pub trace: ScanTrace,
}

impl<T> ScanResult<T> {
    /// Why the scan halted.
    pub fn stop_reason(&self) -> StopReason {
        self.trace.stop_reason()
    }

    /// Map the output, keeping the trace.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ScanResult<U> {
        ScanResult {
            output: f(self.output),
            trace: self.trace,
        }
    }
}

/// Drives one scan per call
///
/// Holds no per-scan state: cursor, accumulator and trace are created
/// inside each call, so a `Scanner` can be reused and shared freely.
#[derive(Debug, Clone)]
pub struct Scanner<S> {
    machine: ScanMachine<S>,
    config: ScanConfig<S>,
}

impl<S: PartialEq + Clone + fmt::Debug> Scanner<S> {
    /// Create a scanner for the given configuration.
    pub fn new(config: ScanConfig<S>) -> Self {
        Self {
            machine: ScanMachine::new(config.policy.clone(), config.convention),
            config,
        }
    }

    /// Configuration this scanner was built with.
    pub fn config(&self) -> &ScanConfig<S> {
        &self.config
    }

    /// Run a scan with an explicit accumulator.
    ///
    /// This is the main loop:
    /// 1. Ask the machine whether the position under the cursor is processed
    /// 2. If so, test it and feed matches to the accumulator
    /// 3. Advance until the machine reaches `Done`
    pub fn scan<Src, P, A>(&self, source: &Src, predicate: &P, mut accumulator: A) -> ScanResult<A::Output>
    where
        Src: SymbolSource<S>,
        P: Predicate<S> + ?Sized,
        A: Accumulator<S>,
    {
        let mut cursor = Cursor::new(source);
        let mut trace = ScanTrace::new(source.len());
        let mut state = ScanState::initial();

        loop {
            let step = self.machine.next_step(&cursor);
            state = match self.machine.transition(state, step) {
                ScanState::Done(reason) => {
                    if reason.is_implicit() {
                        debug!(
                            len = source.len(),
                            terminator = ?self.config.policy.terminator(),
                            "terminator not found; treating end of sequence as implicit stop"
                        );
                    }
                    let trace = trace.finish(reason);
                    debug!(
                        examined = trace.examined_count(),
                        matched = trace.matched(),
                        %reason,
                        "scan complete"
                    );
                    return ScanResult {
                        output: accumulator.finish(),
                        trace,
                    };
                }
                next => next,
            };

            // next_step only emits Process for a readable position
            if let (Step::Process(position), Some(symbol)) = (step, cursor.peek()) {
                let matched = predicate.test(symbol);
                if self.config.trace_steps {
                    tracing::trace!(position, ?symbol, matched, "scan step");
                }
                if matched {
                    accumulator.absorb(symbol);
                }
                trace.mark_examined(position, matched);
            }
            cursor.advance();
        }
    }

    /// Count symbols satisfying `predicate`.
    pub fn count<Src, P>(&self, source: &Src, predicate: &P) -> ScanResult<usize>
    where
        Src: SymbolSource<S>,
        P: Predicate<S> + ?Sized,
    {
        self.scan(source, predicate, Counter::new())
    }

    /// Copy out the symbols satisfying `predicate`, in order.
    pub fn collect<Src, P>(&self, source: &Src, predicate: &P) -> ScanResult<Vec<S>>
    where
        Src: SymbolSource<S>,
        P: Predicate<S> + ?Sized,
    {
        self.scan(source, predicate, Collector::new())
    }

    /// Scan with the accumulator picked at runtime.
    pub fn run<Src, P>(&self, source: &Src, predicate: &P, mode: AccumulationMode) -> ScanResult<ScanOutput<S>>
    where
        Src: SymbolSource<S>,
        P: Predicate<S> + ?Sized,
    {
        self.scan(source, predicate, ModalAccumulator::for_mode(mode))
    }
}
