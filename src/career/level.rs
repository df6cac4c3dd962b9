//! Pay-scale level: a vertical rung plus a horizontal letter

use super::policy::CareerVariant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A level that cannot exist, either in the alphabet or in a bound career
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidLevel {
    #[error("rung must be at least 1, got {0}")]
    RungOutOfRange(i64),

    #[error("horizontal rank {0} is outside the letter alphabet 0..=5")]
    LetterOutOfRange(i64),

    #[error("level {level} does not exist in the {career} career")]
    OutsideCareer { level: Level, career: CareerVariant },
}

/// Malformed level text coming from upstream records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLevelError {
    #[error("level {0:?} is not in the rung.letter format (e.g. 8.B)")]
    Format(String),

    #[error("level {0:?} has an invalid rung")]
    Rung(String),

    #[error("unknown letter {0:?}, expected one of 0, A, B, C, D, E")]
    Letter(String),
}

/// Horizontal position within a rung
///
/// The declaration order is the legal order; the rank doubles as the number of
/// horizontal progressions already granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Letter {
    /// No horizontal progression yet, written `0`
    #[serde(rename = "0")]
    Base,
    A,
    B,
    C,
    D,
    E,
}

impl Letter {
    pub const ALL: [Letter; 6] = [Letter::Base, Letter::A, Letter::B, Letter::C, Letter::D, Letter::E];

    /// Position in the alphabet (0 for `Base`)
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: i64) -> Result<Letter, InvalidLevel> {
        usize::try_from(rank)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(InvalidLevel::LetterOutOfRange(rank))
    }

    /// Next letter, saturating at `E`
    pub fn next(self) -> Letter {
        Self::from_rank(i64::from(self.rank()) + 1).unwrap_or(Letter::E)
    }

    pub fn symbol(self) -> char {
        match self {
            Letter::Base => '0',
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Letter {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Letter::Base),
            "A" => Ok(Letter::A),
            "B" => Ok(Letter::B),
            "C" => Ok(Letter::C),
            "D" => Ok(Letter::D),
            "E" => Ok(Letter::E),
            other => Err(ParseLevelError::Letter(other.to_string())),
        }
    }
}

/// A position on the pay scale
///
/// Ordering is lexicographic on (rung, letter). Career-specific bounds are
/// enforced by [`CareerPolicy`](super::CareerPolicy), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Level {
    rung: u32,
    letter: Letter,
}

impl Level {
    pub fn new(rung: u32, letter: Letter) -> Result<Self, InvalidLevel> {
        if rung == 0 {
            return Err(InvalidLevel::RungOutOfRange(0));
        }
        Ok(Self { rung, letter })
    }

    pub fn rung(&self) -> u32 {
        self.rung
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    /// Number of horizontal progressions this letter represents
    pub fn horizontal_progressions(&self) -> u8 {
        self.letter.rank()
    }

    /// Same rung with a different letter
    pub fn with_letter(&self, letter: Letter) -> Level {
        Level { rung: self.rung, letter }
    }

    /// Move up `vertical` rungs and `horizontal` letters
    pub fn successor(&self, vertical: u32, horizontal: u8) -> Result<Level, InvalidLevel> {
        self.shifted(i64::from(vertical), i64::from(horizontal))
    }

    /// Move down `vertical` rungs and `horizontal` letters
    pub fn predecessor(&self, vertical: u32, horizontal: u8) -> Result<Level, InvalidLevel> {
        self.shifted(-i64::from(vertical), -i64::from(horizontal))
    }

    fn shifted(&self, vertical: i64, horizontal: i64) -> Result<Level, InvalidLevel> {
        let rung = i64::from(self.rung) + vertical;
        if rung < 1 || rung > i64::from(u32::MAX) {
            return Err(InvalidLevel::RungOutOfRange(rung));
        }
        let letter = Letter::from_rank(i64::from(self.letter.rank()) + horizontal)?;
        Level::new(rung as u32, letter)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.rung, self.letter)
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parse `"8.B"`; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (rung, letter) = match trimmed.split('.').collect::<Vec<_>>().as_slice() {
            [rung, letter] => (*rung, *letter),
            _ => return Err(ParseLevelError::Format(s.to_string())),
        };

        if rung.is_empty() || !rung.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseLevelError::Rung(s.to_string()));
        }
        let rung: u32 = rung
            .parse()
            .map_err(|_| ParseLevelError::Rung(s.to_string()))?;
        let letter: Letter = letter.parse()?;

        Level::new(rung, letter).map_err(|_| ParseLevelError::Rung(s.to_string()))
    }
}

impl TryFrom<String> for Level {
    type Error = ParseLevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lvl(rung: u32, letter: Letter) -> Level {
        Level::new(rung, letter).unwrap()
    }

    #[test]
    fn test_rejects_malformed_text() {
        for text in ["", " ", "0.A", "1.F", "1.1.A", "x.A", "-3.B", "+3.A", "3 .A"] {
            assert!(text.parse::<Level>().is_err(), "{text:?} should not parse");
        }
    }

    #[test]
    fn test_parses_and_prints() {
        assert_eq!("1.0".parse::<Level>().unwrap(), lvl(1, Letter::Base));
        assert_eq!(" 20.D ".parse::<Level>().unwrap(), lvl(20, Letter::D));
        assert_eq!(" 36.E ".parse::<Level>().unwrap().to_string(), "36.E");

        let level: Level = "13.C".parse().unwrap();
        assert_eq!(level.rung(), 13);
        assert_eq!(level.letter(), Letter::C);
    }

    #[test]
    fn test_letter_rank_counts_horizontal_progressions() {
        for (rank, letter) in Letter::ALL.iter().enumerate() {
            assert_eq!(lvl(1, *letter).horizontal_progressions() as usize, rank);
        }
        assert!(Letter::Base < Letter::A && Letter::D < Letter::E);
        assert_eq!(Letter::E.next(), Letter::E);
    }

    #[test]
    fn test_successor() {
        let cases = [
            (lvl(1, Letter::Base), 0, 0, lvl(1, Letter::Base)),
            (lvl(5, Letter::A), 0, 1, lvl(5, Letter::B)),
            (lvl(10, Letter::B), 1, 0, lvl(11, Letter::B)),
            (lvl(15, Letter::C), 3, 2, lvl(18, Letter::E)),
            (lvl(15, Letter::A), 2, 3, lvl(17, Letter::D)),
        ];
        for (from, v, h, expected) in cases {
            assert_eq!(from.successor(v, h).unwrap(), expected);
        }
    }

    #[test]
    fn test_predecessor() {
        let cases = [
            (lvl(1, Letter::Base), 0, 0, lvl(1, Letter::Base)),
            (lvl(5, Letter::A), 0, 1, lvl(5, Letter::Base)),
            (lvl(10, Letter::B), 1, 0, lvl(9, Letter::B)),
            (lvl(15, Letter::C), 3, 2, lvl(12, Letter::A)),
            (lvl(15, Letter::C), 2, 3, lvl(13, Letter::Base)),
        ];
        for (from, v, h, expected) in cases {
            assert_eq!(from.predecessor(v, h).unwrap(), expected);
        }
    }

    #[test]
    fn test_steps_outside_alphabet_fail() {
        assert_eq!(
            lvl(3, Letter::E).successor(0, 1),
            Err(InvalidLevel::LetterOutOfRange(6))
        );
        assert_eq!(
            lvl(3, Letter::A).predecessor(0, 2),
            Err(InvalidLevel::LetterOutOfRange(-1))
        );
        assert_eq!(
            lvl(2, Letter::A).predecessor(2, 0),
            Err(InvalidLevel::RungOutOfRange(0))
        );
        assert!(Level::new(0, Letter::A).is_err());
    }

    #[test]
    fn test_round_trip_inside_alphabet() {
        for rung in 1..=20 {
            for letter in Letter::ALL {
                let start = lvl(rung, letter);
                for v in 0..4 {
                    for h in 0..=(5 - letter.rank()) {
                        let there = start.successor(v, h).unwrap();
                        assert_eq!(there.predecessor(v, h).unwrap(), start);
                    }
                }
            }
        }
    }

    #[test]
    fn test_ordering_is_rung_then_letter() {
        assert!(lvl(3, Letter::E) < lvl(4, Letter::Base));
        assert!(lvl(4, Letter::A) < lvl(4, Letter::B));
    }

    #[test]
    fn test_serde_uses_text_form() {
        let json = serde_json::to_string(&lvl(8, Letter::B)).unwrap();
        assert_eq!(json, "\"8.B\"");
        let back: Level = serde_json::from_str("\"12.0\"").unwrap();
        assert_eq!(back, lvl(12, Letter::Base));
    }
}
