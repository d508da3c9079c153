//! Examined-position trace
//!
//! One bit per sequence position, set when that position was handed to the
//! predicate. Lets callers check exactly which positions a scan looked at.

use bitvec::prelude::*;

use crate::machine::StopReason;

/// Record of a finished scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTrace {
    /// Examined flags (1 bit per position)
    examined: BitVec,
    /// Symbols that satisfied the predicate
    matched: usize,
    stop: StopReason,
}

impl ScanTrace {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            examined: bitvec![0; len],
            matched: 0,
            stop: StopReason::EndOfSequence,
        }
    }

    pub(crate) fn mark_examined(&mut self, position: usize, matched: bool) {
        self.examined.set(position, true);
        if matched {
            self.matched += 1;
        }
    }

    pub(crate) fn finish(mut self, stop: StopReason) -> Self {
        self.stop = stop;
        self
    }

    /// Whether `position` was passed to the predicate.
    pub fn examined(&self, position: usize) -> bool {
        self.examined.get(position).map(|bit| *bit).unwrap_or(false)
    }

    /// Number of positions passed to the predicate.
    pub fn examined_count(&self) -> usize {
        self.examined.count_ones()
    }

    /// Positions passed to the predicate, ascending.
    pub fn examined_positions(&self) -> Vec<usize> {
        self.examined.iter_ones().collect()
    }

    /// Number of symbols that satisfied the predicate.
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Why the scan halted.
    pub fn stop_reason(&self) -> StopReason {
        self.stop
    }

    /// Length of the scanned sequence.
    pub fn sequence_len(&self) -> usize {
        self.examined.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_are_reported_in_order() {
        let mut trace = ScanTrace::new(5);
        trace.mark_examined(2, true);
        trace.mark_examined(0, false);
        let trace = trace.finish(StopReason::Terminator { position: 3 });

        assert_eq!(trace.examined_positions(), vec![0, 2]);
        assert_eq!(trace.examined_count(), 2);
        assert_eq!(trace.matched(), 1);
        assert!(!trace.examined(1));
        assert!(!trace.examined(99));
        assert_eq!(trace.stop_reason(), StopReason::Terminator { position: 3 });
    }
}
