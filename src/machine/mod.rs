//! Scan state machine
//!
//! Two states:
//! - `Scanning { position }` (initial), self-transition per processed symbol
//! - `Done(reason)` (terminal)
//!
//! The machine only decides *whether* the position under the cursor is
//! processed or the scan stops. Predicates and accumulators are applied by
//! the driver in [`crate::Scanner`].

mod policy;

pub use policy::{LoopConvention, TerminationPolicy};

use std::fmt;

use crate::sequence::Cursor;

/// Why a scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StopReason {
    /// The sentinel was observed at `position`.
    Terminator {
        /// Position of the sentinel that halted the scan.
        position: usize,
    },
    /// `StopAtEnd` scan consumed every symbol.
    EndOfSequence,
    /// `StopAtSymbol` scan ran off the end without meeting its sentinel.
    /// The end of the sequence was taken as an implicit sentinel.
    Exhausted {
        /// Length of the scanned sequence.
        len: usize,
    },
}

impl StopReason {
    /// True when the scan had to fall back to the end of the sequence.
    pub fn is_implicit(&self) -> bool {
        matches!(self, StopReason::Exhausted { .. })
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Terminator { position } => {
                write!(f, "stopped at terminator, position {position}")
            }
            StopReason::EndOfSequence => f.write_str("reached end of sequence"),
            StopReason::Exhausted { len } => {
                write!(f, "terminator not found, stopped at end ({len} symbols)")
            }
        }
    }
}

/// State of a running scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Cursor is at `position` and the scan has not halted.
    Scanning {
        /// Current cursor position.
        position: usize,
    },
    /// Terminal state.
    Done(StopReason),
}

impl ScanState {
    /// Initial state, cursor at the first position.
    pub fn initial() -> Self {
        ScanState::Scanning { position: 0 }
    }

    /// True once the scan has halted.
    pub fn is_done(&self) -> bool {
        matches!(self, ScanState::Done(_))
    }
}

/// Decision for the position under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Hand the symbol at `position` to the predicate.
    Process(usize),
    /// Halt without processing.
    Stop(StopReason),
}

/// Termination logic for one scan: a policy plus a loop shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanMachine<S> {
    policy: TerminationPolicy<S>,
    convention: LoopConvention,
}

impl<S: PartialEq> ScanMachine<S> {
    /// Build a machine from its policy and loop shape.
    pub fn new(policy: TerminationPolicy<S>, convention: LoopConvention) -> Self {
        Self { policy, convention }
    }

    /// Termination policy in force.
    pub fn policy(&self) -> &TerminationPolicy<S> {
        &self.policy
    }

    /// Loop shape in force.
    pub fn convention(&self) -> LoopConvention {
        self.convention
    }

    /// Decide what happens at the cursor's current position.
    pub fn next_step(&self, cursor: &Cursor<'_, S>) -> Step {
        let position = cursor.position();
        // `len` bounds the scan even if the source answers past it.
        if cursor.is_exhausted() {
            return Step::Stop(self.exhaustion(cursor.source_len()));
        }
        let Some(symbol) = cursor.peek() else {
            return Step::Stop(self.exhaustion(cursor.source_len()));
        };

        // Post-test loops run the body once before the first check.
        if position == 0 && self.convention == LoopConvention::PostTest {
            return Step::Process(position);
        }

        if self.policy.is_terminator(symbol) {
            Step::Stop(StopReason::Terminator { position })
        } else {
            Step::Process(position)
        }
    }

    /// Apply a step to the current state.
    pub fn transition(&self, state: ScanState, step: Step) -> ScanState {
        match (state, step) {
            (ScanState::Done(reason), _) => ScanState::Done(reason),
            (ScanState::Scanning { .. }, Step::Process(position)) => ScanState::Scanning {
                position: position + 1,
            },
            (ScanState::Scanning { .. }, Step::Stop(reason)) => ScanState::Done(reason),
        }
    }

    fn exhaustion(&self, len: usize) -> StopReason {
        match self.policy {
            TerminationPolicy::StopAtEnd => StopReason::EndOfSequence,
            TerminationPolicy::StopAtSymbol(_) => StopReason::Exhausted { len },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sequence;

    fn steps(machine: &ScanMachine<char>, text: &str) -> (Vec<usize>, StopReason) {
        let seq = Sequence::from(text);
        let mut cursor = seq.cursor();
        let mut state = ScanState::initial();
        let mut processed = Vec::new();
        loop {
            let step = machine.next_step(&cursor);
            state = machine.transition(state, step);
            match state {
                ScanState::Scanning { .. } => {
                    if let Step::Process(position) = step {
                        processed.push(position);
                    }
                    cursor.advance();
                }
                ScanState::Done(reason) => return (processed, reason),
            }
        }
    }

    #[test]
    fn lookahead_never_processes_the_terminator() {
        let machine = ScanMachine::new(TerminationPolicy::StopAtSymbol('Z'), LoopConvention::Lookahead);
        let (processed, reason) = steps(&machine, "BCDZ");
        assert_eq!(processed, vec![0, 1, 2]);
        assert_eq!(reason, StopReason::Terminator { position: 3 });
    }

    #[test]
    fn post_test_processes_a_leading_terminator() {
        let machine = ScanMachine::new(TerminationPolicy::StopAtSymbol('Z'), LoopConvention::PostTest);
        let (processed, reason) = steps(&machine, "ZZZZ");
        assert_eq!(processed, vec![0]);
        assert_eq!(reason, StopReason::Terminator { position: 1 });
    }

    #[test]
    fn missing_terminator_falls_back_to_end() {
        let machine = ScanMachine::new(TerminationPolicy::StopAtSymbol('*'), LoopConvention::Lookahead);
        let (processed, reason) = steps(&machine, "abc");
        assert_eq!(processed, vec![0, 1, 2]);
        assert_eq!(reason, StopReason::Exhausted { len: 3 });
        assert!(reason.is_implicit());
    }

    #[test]
    fn done_is_absorbing() {
        let machine = ScanMachine::<char>::new(TerminationPolicy::StopAtEnd, LoopConvention::Lookahead);
        let done = ScanState::Done(StopReason::EndOfSequence);
        assert_eq!(machine.transition(done, Step::Process(4)), done);
    }

    #[test]
    fn empty_sequence_stops_immediately_under_both_shapes() {
        for convention in [LoopConvention::Lookahead, LoopConvention::PostTest] {
            let machine = ScanMachine::new(TerminationPolicy::<char>::StopAtEnd, convention);
            let (processed, reason) = steps(&machine, "");
            assert!(processed.is_empty());
            assert_eq!(reason, StopReason::EndOfSequence);
        }
    }
}
