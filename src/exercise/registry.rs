//! Name-keyed exercise registry

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::exercise::{
    CountConsonants, CountLetterA, CountMembers, DiscardDollar, Exercise, ExerciseReport,
};
use crate::ScanError;

/// Metadata describing a registered exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseInfo {
    /// Registry key.
    pub name: String,
    /// One-line description.
    pub description: String,
}

/// Registry of available exercises, keyed by name.
#[derive(Default)]
pub struct ExerciseRegistry {
    entries: BTreeMap<String, Arc<dyn Exercise>>,
}

impl ExerciseRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry pre-populated with the built-in catalog.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(CountLetterA::default());
        registry.register(CountConsonants::default());
        registry.register(DiscardDollar::default());
        registry.register(CountMembers::default());
        registry
    }

    /// Register an exercise and return a handle to it. An exercise with
    /// the same name is replaced.
    pub fn register<E: Exercise>(&mut self, exercise: E) -> Arc<E> {
        let arc = Arc::new(exercise);
        let name = arc.name().to_string();
        if self.entries.insert(name.clone(), arc.clone()).is_some() {
            debug!(%name, "replaced registered exercise");
        }
        arc
    }

    /// Look up an exercise by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Exercise>> {
        self.entries.get(name).cloned()
    }

    /// Run the named exercise.
    pub fn run(&self, name: &str) -> Result<ExerciseReport, ScanError> {
        let exercise = self
            .get(name)
            .ok_or_else(|| ScanError::UnknownExercise(name.to_string()))?;
        exercise.run()
    }

    /// Run every exercise, in name order.
    pub fn run_all(&self) -> Result<Vec<ExerciseReport>, ScanError> {
        self.entries.values().map(|exercise| exercise.run()).collect()
    }

    /// List all registered exercises, sorted by name.
    pub fn list(&self) -> Vec<ExerciseInfo> {
        self.entries
            .iter()
            .map(|(name, exercise)| ExerciseInfo {
                name: name.clone(),
                description: exercise.description().to_string(),
            })
            .collect()
    }

    /// Number of registered exercises.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ExerciseRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExerciseRegistry")
            .field("exercises", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_sorted() {
        let registry = ExerciseRegistry::with_builtin();
        let names: Vec<_> = registry.list().into_iter().map(|info| info.name).collect();
        assert_eq!(
            names,
            vec!["count-consonants", "count-letter-a", "count-members", "discard-dollar"]
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = ExerciseRegistry::with_builtin();
        assert_eq!(
            registry.run("count-vowels").unwrap_err(),
            ScanError::UnknownExercise("count-vowels".to_string())
        );
    }

    #[test]
    fn registering_twice_replaces() {
        let mut registry = ExerciseRegistry::new();
        registry.register(CountMembers::default());
        registry.register(CountMembers::new(vec![1u32, 2]));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.run("count-members").unwrap().count(), Some(2));
    }

    struct ParsedAtRunTime(&'static str);

    impl Exercise for ParsedAtRunTime {
        fn name(&self) -> &'static str {
            "parsed-at-run-time"
        }

        fn description(&self) -> &'static str {
            "count symbols matching a predicate given as text"
        }

        fn run(&self) -> Result<ExerciseReport, ScanError> {
            let predicate: crate::predicate::CharPredicate = self.0.parse()?;
            let result = crate::Scanner::new(crate::ScanConfig::stop_at_end())
                .count(&crate::Sequence::from("AB1"), &predicate);
            Ok(ExerciseReport::from_count(self.name(), &result))
        }
    }

    #[test]
    fn registered_exercise_errors_are_passed_on() {
        let mut registry = ExerciseRegistry::with_builtin();
        registry.register(ParsedAtRunTime("vowel"));
        assert_eq!(registry.run("parsed-at-run-time").unwrap().count(), Some(1));

        registry.register(ParsedAtRunTime("is:"));
        assert!(matches!(
            registry.run("parsed-at-run-time"),
            Err(ScanError::InvalidPredicate(_))
        ));
        assert!(registry.run_all().is_err());
    }
}
