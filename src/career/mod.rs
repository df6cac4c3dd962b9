//! Pay-scale levels and the career rules that move employees along them

mod interstitial;
mod letters;
mod level;
mod policy;

pub use interstitial::InterstitialSchedule;
pub use letters::{AcquiredLetters, LetterGrantMode};
pub use level::{InvalidLevel, Letter, Level, ParseLevelError};
pub use policy::{
    CareerPolicy, CareerVariant, JobClass, ParseCodeError, ProgressionRecord, TopUp,
    ORDINARY_RUNGS, SPECIAL_CYCLE, SPECIAL_RUNGS,
};
