//! Named scan instances
//!
//! Each exercise fixes a sequence, a termination policy, a predicate and an
//! accumulation mode. The registry lets callers run them by name.

mod api;
mod catalog;
mod registry;

pub use api::{Exercise, ExerciseReport, ReportValue};
pub use catalog::{
    CountConsonants, CountLetterA, CountMembers, DiscardDollar, DOLLAR_TEXT, LETTERS_WITH_STAR,
    LETTERS_WITH_Z, MEMBER_NUMBERS,
};
pub use registry::{ExerciseInfo, ExerciseRegistry};
