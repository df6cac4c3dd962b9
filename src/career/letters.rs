//! Organisation-wide rules limiting new horizontal progressions

use super::level::{Letter, ParseLevelError};
use super::policy::CareerPolicy;
use serde::{Deserialize, Serialize};

/// How many new letters the projection may grant beyond those already acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LetterGrantMode {
    /// Freeze every employee at the letters already acquired
    NoNewLetters,
    /// Allow a single letter above the acquired one
    OneNewLetter,
    /// Grant every letter the career allows to employees already at the ceiling
    #[default]
    AllLetters,
}

/// Letters an employee holds according to HR, with the rung they were earned on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquiredLetters {
    pub letter: Letter,
    pub current_rung: u32,
}

impl AcquiredLetters {
    pub fn new(letter: Letter, current_rung: u32) -> Self {
        Self { letter, current_rung }
    }

    /// Parse the HR letter column, where `BASE` or a blank cell means `0`
    pub fn parse_letter(text: &str) -> Result<Letter, ParseLevelError> {
        match text.trim() {
            "" | "BASE" => Ok(Letter::Base),
            other => other.parse(),
        }
    }

    /// Holds every letter the unified career allows on the current rung
    fn at_ceiling(&self) -> bool {
        let ceiling = CareerPolicy::unified().ceiling_letter(self.current_rung.max(1));
        self.letter >= ceiling
    }
}

impl LetterGrantMode {
    /// External letter cap for the timeline, `None` meaning the career ceiling applies
    ///
    /// Employees without HR letter data are never capped, whatever the mode.
    pub fn max_letter(&self, acquired: Option<&AcquiredLetters>) -> Option<Letter> {
        let acquired = acquired?;
        match self {
            LetterGrantMode::AllLetters if acquired.at_ceiling() => None,
            LetterGrantMode::AllLetters | LetterGrantMode::NoNewLetters => Some(acquired.letter),
            LetterGrantMode::OneNewLetter => Some(acquired.letter.next()),
        }
    }
}
