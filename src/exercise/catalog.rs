//! Built-in exercises over literal data

use crate::exercise::{Exercise, ExerciseReport};
use crate::{
    Always, Is, IsNot, LoopConvention, NotMemberOf, ScanConfig, ScanError, Scanner, Sequence,
    SymbolSet,
};

/// Letters ending in `*`.
pub const LETTERS_WITH_STAR: &str =
    "ABSCDRKSASJDJKESASSESAA3IESAAASKAAAJAESJAAAJASEAJAAAEOPLSALDER*";

/// Letters ending in `Z`.
pub const LETTERS_WITH_Z: &str = "AJSKELSKDKRSLALERWERZ";

/// Characters with scattered `$` to discard.
pub const DOLLAR_TEXT: &str = "iefjeoijfoejfofj$ojdopfjepofepfe$$$$$opffjkopfrp$$@sdedodekjp";

/// Registered member numbers.
pub const MEMBER_NUMBERS: [u32; 3] = [34564, 91218, 310101];

/// Count the letter `A` before the `*` mark.
#[derive(Debug, Clone)]
pub struct CountLetterA {
    sequence: Sequence<char>,
}

impl CountLetterA {
    /// Exercise over a custom sequence.
    pub fn new(sequence: impl Into<Sequence<char>>) -> Self {
        Self {
            sequence: sequence.into(),
        }
    }
}

impl Default for CountLetterA {
    fn default() -> Self {
        Self::new(LETTERS_WITH_STAR)
    }
}

impl Exercise for CountLetterA {
    fn name(&self) -> &'static str {
        "count-letter-a"
    }

    fn description(&self) -> &'static str {
        "Count letters 'A' in a sequence terminated by '*'."
    }

    fn run(&self) -> Result<ExerciseReport, ScanError> {
        let scanner = Scanner::new(ScanConfig::stop_at('*'));
        let result = scanner.count(&self.sequence, &Is('A'));
        Ok(ExerciseReport::from_count(self.name(), &result))
    }
}

/// Count non-vowels before the `Z` mark.
///
/// Uses the post-test loop shape: the first symbol is always examined.
/// Vowels are the uppercase set `A E I O U`; anything else, digits
/// included, counts.
#[derive(Debug, Clone)]
pub struct CountConsonants {
    sequence: Sequence<char>,
}

impl CountConsonants {
    /// Exercise over a custom sequence.
    pub fn new(sequence: impl Into<Sequence<char>>) -> Self {
        Self {
            sequence: sequence.into(),
        }
    }
}

impl Default for CountConsonants {
    fn default() -> Self {
        Self::new(LETTERS_WITH_Z)
    }
}

impl Exercise for CountConsonants {
    fn name(&self) -> &'static str {
        "count-consonants"
    }

    fn description(&self) -> &'static str {
        "Count consonants in a sequence terminated by 'Z'."
    }

    fn run(&self) -> Result<ExerciseReport, ScanError> {
        let config = ScanConfig::stop_at('Z').with_convention(LoopConvention::PostTest);
        let result = Scanner::new(config).count(&self.sequence, &NotMemberOf(SymbolSet::vowels()));
        Ok(ExerciseReport::from_count(self.name(), &result))
    }
}

/// Copy a sequence, dropping every `$`.
#[derive(Debug, Clone)]
pub struct DiscardDollar {
    sequence: Sequence<char>,
}

impl DiscardDollar {
    /// Exercise over a custom sequence.
    pub fn new(sequence: impl Into<Sequence<char>>) -> Self {
        Self {
            sequence: sequence.into(),
        }
    }
}

impl Default for DiscardDollar {
    fn default() -> Self {
        Self::new(DOLLAR_TEXT)
    }
}

impl Exercise for DiscardDollar {
    fn name(&self) -> &'static str {
        "discard-dollar"
    }

    fn description(&self) -> &'static str {
        "Copy a character sequence to the output, discarding '$'."
    }

    fn run(&self) -> Result<ExerciseReport, ScanError> {
        let scanner = Scanner::new(ScanConfig::stop_at_end());
        let result = scanner.collect(&self.sequence, &IsNot('$'));
        Ok(ExerciseReport::from_chars(self.name(), &result))
    }
}

/// Count registered member numbers.
#[derive(Debug, Clone)]
pub struct CountMembers {
    members: Sequence<u32>,
}

impl CountMembers {
    /// Exercise over custom member numbers.
    pub fn new(members: impl Into<Sequence<u32>>) -> Self {
        Self {
            members: members.into(),
        }
    }
}

impl Default for CountMembers {
    fn default() -> Self {
        Self::new(MEMBER_NUMBERS.to_vec())
    }
}

impl Exercise for CountMembers {
    fn name(&self) -> &'static str {
        "count-members"
    }

    fn description(&self) -> &'static str {
        "Count the entries of a sequence of member numbers."
    }

    fn run(&self) -> Result<ExerciseReport, ScanError> {
        let scanner = Scanner::new(ScanConfig::stop_at_end());
        let result = scanner.count(&self.members, &Always);
        Ok(ExerciseReport::from_count(self.name(), &result))
    }
}
