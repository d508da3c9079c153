//! Exercise trait and the report it produces

use std::fmt;

use crate::{ScanError, ScanResult, StopReason};

/// A named, ready-to-run scan over a fixed sequence.
pub trait Exercise: Send + Sync + 'static {
    /// Unique exercise name.
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Run the scan and package the outcome.
    ///
    /// The built-in exercises scan fixed data and always succeed. Exercises
    /// registered from outside can fail, for example on a predicate or
    /// terminator parsed at run time, and the registry passes the error on.
    fn run(&self) -> Result<ExerciseReport, ScanError>;
}

/// Scalar value produced by an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ReportValue {
    /// Result of a counting scan.
    Count(usize),
    /// Result of a collecting scan, rendered as text.
    Text(String),
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Count(count) => write!(f, "{count}"),
            ReportValue::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// Outcome of running an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExerciseReport {
    /// Exercise name.
    pub name: String,
    /// Count or collected text.
    pub value: ReportValue,
    /// Why the scan halted.
    pub stop: StopReason,
    /// Positions handed to the predicate.
    pub examined: usize,
}

impl ExerciseReport {
    /// Report for a counting scan.
    pub fn from_count(name: &str, result: &ScanResult<usize>) -> Self {
        Self {
            name: name.to_string(),
            value: ReportValue::Count(result.output),
            stop: result.stop_reason(),
            examined: result.trace.examined_count(),
        }
    }

    /// Report for a collecting scan over characters.
    pub fn from_chars(name: &str, result: &ScanResult<Vec<char>>) -> Self {
        Self {
            name: name.to_string(),
            value: ReportValue::Text(result.output.iter().collect()),
            stop: result.stop_reason(),
            examined: result.trace.examined_count(),
        }
    }

    /// The count, if this was a counting exercise.
    pub fn count(&self) -> Option<usize> {
        match self.value {
            ReportValue::Count(count) => Some(count),
            ReportValue::Text(_) => None,
        }
    }

    /// The collected text, if this was a collecting exercise.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            ReportValue::Count(_) => None,
            ReportValue::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for ExerciseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}; {} examined)",
            self.name, self.value, self.stop, self.examined
        )
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::exercise::CountMembers;

    #[test]
    fn report_serializes_to_json() {
        let report = CountMembers::default().run().unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "count-members",
                "value": { "Count": 3 },
                "stop": "EndOfSequence",
                "examined": 3,
            })
        );
    }
}
