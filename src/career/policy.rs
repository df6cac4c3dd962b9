//! Career policies: vertical and horizontal advancement rules per hiring cohort

use super::interstitial::InterstitialSchedule;
use super::level::{InvalidLevel, Letter, Level};
use crate::calendar::add_months;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of vertical progressions in one special-bonus cycle
pub const SPECIAL_CYCLE: u8 = 3;

/// Rungs granted by an ordinary vertical progression
pub const ORDINARY_RUNGS: u32 = 2;

/// Rungs granted by a special vertical progression
pub const SPECIAL_RUNGS: u32 = 3;

/// Interstitial periods covered by one vertical progression
const PERIODS_PER_PROGRESSION: u32 = 2;

/// Months between article-44 top-up progressions
const TOP_UP_INTERVAL_MONTHS: u32 = 48;

/// Employees with a registration number below this belong to the legacy cohort
const EXAM_2004_FIRST_ID: u32 = 330;
const EXAM_2008_FIRST_ID: u32 = 412;
const EXAM_2008_LAST_ID: u32 = 545;

/// Cohort letter ceilings: (first rung, highest letter allowed from that rung)
const COHORT_LETTERS: &[(u32, Letter)] = &[
    (1, Letter::A),
    (3, Letter::B),
    (6, Letter::C),
    (8, Letter::D),
    (11, Letter::E),
];

/// Unified-career letter ceilings
const UNIFIED_LETTERS: &[(u32, Letter)] = &[
    (1, Letter::A),
    (7, Letter::B),
    (13, Letter::C),
    (19, Letter::D),
    (25, Letter::E),
];

/// Unknown code in an upstream record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} code {value:?}")]
pub struct ParseCodeError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseCodeError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self { kind, value: value.to_string() }
    }
}

/// Job class of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobClass {
    E1,
    E2,
    E3,
}

impl JobClass {
    /// E1 positions follow the E2 scale
    fn is_upper(&self) -> bool {
        matches!(self, JobClass::E3)
    }
}

impl FromStr for JobClass {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "E1" => Ok(JobClass::E1),
            "E2" => Ok(JobClass::E2),
            "E3" => Ok(JobClass::E3),
            other => Err(ParseCodeError::new("job class", other)),
        }
    }
}

/// Closed set of career rule variants, one per hiring cohort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareerVariant {
    /// Hired before the 2004 exam; may continue past the terminal rung (article 44)
    Legacy,
    /// 2004 exam cohort
    Exam2004,
    /// 2008 exam cohort
    Exam2008,
    /// Hired after the 2008 exam
    Recent,
    /// Single 48-rung career
    Unified,
}

impl CareerVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerVariant::Legacy => "Legacy",
            CareerVariant::Exam2004 => "Exam2004",
            CareerVariant::Exam2008 => "Exam2008",
            CareerVariant::Recent => "Recent",
            CareerVariant::Unified => "Unified",
        }
    }
}

impl fmt::Display for CareerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CareerVariant {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Legacy" => Ok(CareerVariant::Legacy),
            "Exam2004" => Ok(CareerVariant::Exam2004),
            "Exam2008" => Ok(CareerVariant::Exam2008),
            "Recent" => Ok(CareerVariant::Recent),
            "Unified" => Ok(CareerVariant::Unified),
            other => Err(ParseCodeError::new("career", other)),
        }
    }
}

/// Immutable snapshot of an employee's position after a progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionRecord {
    /// Date the level takes effect
    pub date: NaiveDate,

    pub level: Level,

    /// Vertical progressions since the last special one (0..SPECIAL_CYCLE)
    pub bonus_counter: u8,

    /// Months already served toward the next progression
    pub credit_months: u32,
}

impl ProgressionRecord {
    pub fn new(date: NaiveDate, level: Level) -> Self {
        Self {
            date,
            level,
            bonus_counter: 0,
            credit_months: 0,
        }
    }

    pub fn with_bonus_counter(mut self, bonus_counter: u8) -> Self {
        self.bonus_counter = bonus_counter % SPECIAL_CYCLE;
        self
    }

    pub fn with_credit(mut self, credit_months: u32) -> Self {
        self.credit_months = credit_months;
        self
    }

    /// Whether the next vertical progression is a special one
    pub fn next_is_special(&self) -> bool {
        self.bonus_counter % SPECIAL_CYCLE == SPECIAL_CYCLE - 1
    }
}

/// Article-44 regime: single-rung progressions past the terminal rung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopUp {
    /// Highest rung reachable through top-up progressions
    pub ceiling_rung: u32,

    pub interval_months: u32,
}

impl TopUp {
    /// Terminal rung plus 25%, rounded up
    fn above(terminal_rung: u32) -> Self {
        Self {
            ceiling_rung: terminal_rung + (terminal_rung + 3) / 4,
            interval_months: TOP_UP_INTERVAL_MONTHS,
        }
    }
}

/// Advancement rules bound to one employee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerPolicy {
    variant: CareerVariant,
    job_class: JobClass,
    terminal_rung: u32,
    letter_ceilings: &'static [(u32, Letter)],
    interstitial: InterstitialSchedule,
    top_up: Option<TopUp>,
}

impl CareerPolicy {
    /// Build the rules of `variant` for `job_class`
    pub fn new(variant: CareerVariant, job_class: JobClass) -> Self {
        let upper = job_class.is_upper();
        let terminal_rung = match variant {
            CareerVariant::Legacy | CareerVariant::Recent => if upper { 31 } else { 32 },
            CareerVariant::Exam2004 => if upper { 35 } else { 36 },
            CareerVariant::Exam2008 => if upper { 33 } else { 34 },
            CareerVariant::Unified => 48,
        };

        let (letter_ceilings, interstitial) = match variant {
            CareerVariant::Unified => (UNIFIED_LETTERS, InterstitialSchedule::General),
            _ if upper => (COHORT_LETTERS, InterstitialSchedule::Upper),
            _ => (COHORT_LETTERS, InterstitialSchedule::General),
        };

        let top_up = match variant {
            CareerVariant::Legacy => Some(TopUp::above(terminal_rung)),
            _ => None,
        };

        Self {
            variant,
            job_class,
            terminal_rung,
            letter_ceilings,
            interstitial,
            top_up,
        }
    }

    /// The unified career, also the reference scale for letter-grant decisions
    pub fn unified() -> Self {
        Self::new(CareerVariant::Unified, JobClass::E2)
    }

    /// Pick the cohort rules for an employee
    ///
    /// Registration numbers are issued sequentially, so they identify the exam
    /// an employee was hired through.
    pub fn select_for(employee_id: u32, job_class: JobClass) -> Self {
        let variant = if employee_id < EXAM_2004_FIRST_ID {
            CareerVariant::Legacy
        } else if employee_id < EXAM_2008_FIRST_ID {
            CareerVariant::Exam2004
        } else if employee_id <= EXAM_2008_LAST_ID {
            CareerVariant::Exam2008
        } else {
            CareerVariant::Recent
        };

        Self::new(variant, job_class)
    }

    pub fn variant(&self) -> CareerVariant {
        self.variant
    }

    pub fn job_class(&self) -> JobClass {
        self.job_class
    }

    /// Last rung reachable through ordinary vertical progressions
    pub fn terminal_rung(&self) -> u32 {
        self.terminal_rung
    }

    /// Highest rung any level in this career may have
    pub fn absolute_limit(&self) -> u32 {
        self.top_up.map_or(self.terminal_rung, |t| t.ceiling_rung)
    }

    pub fn interstitial(&self) -> InterstitialSchedule {
        self.interstitial
    }

    pub fn top_up(&self) -> Option<TopUp> {
        self.top_up
    }

    /// Highest letter allowed on `rung`
    pub fn ceiling_letter(&self, rung: u32) -> Letter {
        self.letter_ceilings
            .iter()
            .rev()
            .find(|(first_rung, _)| *first_rung <= rung)
            .map(|(_, letter)| *letter)
            .unwrap_or(Letter::Base)
    }

    /// Reject levels that cannot exist in this career
    pub fn assert_valid(&self, level: &Level) -> Result<(), InvalidLevel> {
        let outside = level.rung() > self.absolute_limit()
            || level.letter() > self.ceiling_letter(level.rung());

        if outside {
            return Err(InvalidLevel::OutsideCareer {
                level: *level,
                career: self.variant,
            });
        }
        Ok(())
    }

    /// Grant every letter the rung allows
    pub fn grant_ceiling_letters(&self, level: &Level) -> Result<Level, InvalidLevel> {
        self.assert_valid(level)?;
        let ceiling = self.ceiling_letter(level.rung());
        Ok(level.with_letter(ceiling.max(level.letter())))
    }

    /// Grant letters up to `target`, bounded by the rung ceiling; never regresses
    pub fn advance_to_letter(&self, level: &Level, target: Letter) -> Result<Level, InvalidLevel> {
        self.assert_valid(level)?;
        if level.letter() >= target {
            return Ok(*level);
        }
        let ceiling = self.ceiling_letter(level.rung());
        Ok(level.with_letter(target.min(ceiling)))
    }

    /// One vertical progression granting `rungs` rungs, clamped at the terminal rung
    ///
    /// The progression takes two interstitial periods less any carried credit.
    /// When the clamp leaves a single rung of a multi-rung grant, the period of
    /// the rung paid for but not granted becomes credit on the new record.
    pub fn advance_vertically_by(
        &self,
        last: &ProgressionRecord,
        rungs: u32,
    ) -> Result<Option<ProgressionRecord>, InvalidLevel> {
        self.assert_valid(&last.level)?;

        let rung = last.level.rung();
        if rung >= self.terminal_rung {
            return Ok(None);
        }

        let months = self
            .interstitial
            .months_to_advance(rung, PERIODS_PER_PROGRESSION)
            .saturating_sub(last.credit_months);

        let granted = rungs.min(self.terminal_rung - rung);
        let credit_months = if granted == 1 && rungs > 1 {
            self.interstitial.months_for_rung(rung + 1)
        } else {
            0
        };

        Ok(Some(ProgressionRecord {
            date: add_months(last.date, months),
            level: last.level.successor(granted, 0)?,
            bonus_counter: (last.bonus_counter % SPECIAL_CYCLE + 1) % SPECIAL_CYCLE,
            credit_months,
        }))
    }

    /// Next vertical progression, special or ordinary depending on the counter
    ///
    /// Falls through to the article-44 top-up once ordinary progression stops.
    pub fn advance_vertically(
        &self,
        last: &ProgressionRecord,
    ) -> Result<Option<ProgressionRecord>, InvalidLevel> {
        let rungs = if last.next_is_special() { SPECIAL_RUNGS } else { ORDINARY_RUNGS };

        match self.advance_vertically_by(last, rungs)? {
            Some(progression) => Ok(Some(progression)),
            None => self.top_up_progression(last),
        }
    }

    fn top_up_progression(
        &self,
        last: &ProgressionRecord,
    ) -> Result<Option<ProgressionRecord>, InvalidLevel> {
        let Some(top_up) = self.top_up else {
            return Ok(None);
        };
        self.assert_valid(&last.level)?;

        if last.level.rung() >= top_up.ceiling_rung {
            return Ok(None);
        }

        let months = top_up.interval_months.saturating_sub(last.credit_months);
        Ok(Some(ProgressionRecord {
            date: add_months(last.date, months),
            level: last.level.successor(1, 0)?,
            bonus_counter: last.bonus_counter,
            credit_months: 0,
        }))
    }

    /// Vertical progression followed by horizontal advancement on the new rung
    ///
    /// `max_letter` caps the letters granted when the employee's acquired-letter
    /// history limits new grants; `None` grants up to the career ceiling.
    pub fn advance(
        &self,
        last: &ProgressionRecord,
        max_letter: Option<Letter>,
    ) -> Result<Option<ProgressionRecord>, InvalidLevel> {
        let Some(progression) = self.advance_vertically(last)? else {
            return Ok(None);
        };

        let level = match max_letter {
            Some(letter) => self.advance_to_letter(&progression.level, letter)?,
            None => self.grant_ceiling_letters(&progression.level)?,
        };

        Ok(Some(ProgressionRecord { level, ..progression }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn lvl(text: &str) -> Level {
        text.parse().unwrap()
    }

    fn rec(date: NaiveDate, level: &str) -> ProgressionRecord {
        ProgressionRecord::new(date, lvl(level))
    }

    fn special(date: NaiveDate, level: &str) -> ProgressionRecord {
        rec(date, level).with_bonus_counter(SPECIAL_CYCLE - 1)
    }

    #[test]
    fn test_unified_ceiling_letters() {
        let career = CareerPolicy::unified();
        let cases = [
            ("1.0", "1.A"),
            ("6.0", "6.A"),
            ("7.A", "7.B"),
            ("12.0", "12.B"),
            ("13.0", "13.C"),
            ("18.A", "18.C"),
            ("19.C", "19.D"),
            ("24.A", "24.D"),
            ("25.0", "25.E"),
            ("36.B", "36.E"),
        ];
        for (from, to) in cases {
            assert_eq!(career.grant_ceiling_letters(&lvl(from)).unwrap(), lvl(to), "{from}");
        }
    }

    #[test]
    fn test_cohort_ceiling_letters() {
        let career = CareerPolicy::new(CareerVariant::Recent, JobClass::E2);
        let cases = [
            ("1.0", "1.A"),
            ("2.0", "2.A"),
            ("3.A", "3.B"),
            ("5.0", "5.B"),
            ("6.B", "6.C"),
            ("8.0", "8.D"),
            ("10.A", "10.D"),
            ("11.0", "11.E"),
            ("30.B", "30.E"),
        ];
        for (from, to) in cases {
            assert_eq!(career.grant_ceiling_letters(&lvl(from)).unwrap(), lvl(to), "{from}");
        }
    }

    #[test]
    fn test_ordinary_vertical_progression() {
        let career = CareerPolicy::unified();
        let cases = [
            (rec(d(2020, 9, 25), "3.A"), rec(d(2022, 3, 25), "5.A")),
            (rec(d(2020, 1, 1), "8.B"), rec(d(2021, 10, 1), "10.B")),
            (rec(d(2021, 10, 20), "16.C"), rec(d(2023, 10, 20), "18.C")),
            (rec(d(2021, 1, 1), "28.0"), rec(d(2023, 4, 1), "30.0")),
            (rec(d(2020, 10, 3), "32.A"), rec(d(2023, 4, 3), "34.A")),
        ];
        for (before, after) in cases {
            let next = career.advance_vertically(&before).unwrap().unwrap();
            assert_eq!(next.date, after.date);
            assert_eq!(next.level, after.level);
            assert_eq!(next.bonus_counter, 1);
            assert_eq!(next.credit_months, 0);
        }
    }

    #[test]
    fn test_special_vertical_progression() {
        let career = CareerPolicy::unified();
        let cases = [
            (special(d(2021, 7, 13), "5.A"), d(2023, 1, 13), "8.A"),
            (special(d(2026, 10, 13), "12.B"), d(2028, 10, 13), "15.B"),
            (special(d(2032, 10, 13), "19.D"), d(2034, 10, 13), "22.D"),
        ];
        for (before, date, level) in cases {
            let next = career.advance_vertically(&before).unwrap().unwrap();
            assert_eq!(next.date, date);
            assert_eq!(next.level, lvl(level));
            assert_eq!(next.bonus_counter, 0);
        }
    }

    #[test]
    fn test_out_of_range_counter_from_json() {
        let career = CareerPolicy::unified();
        let cases = [(255, "5.A", 1), (254, "5.A", 0)];
        for (counter, level, expected) in cases {
            let json = format!(
                r#"{{"date":"2020-01-01","level":"{level}","bonus_counter":{counter},"credit_months":0}}"#
            );
            let last: ProgressionRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(last.bonus_counter, counter);

            let next = career.advance(&last, None).unwrap().unwrap();
            assert_eq!(next.bonus_counter, expected, "counter {counter}");
        }
    }

    #[test]
    fn test_combined_progression_grants_letters_of_new_rung() {
        let career = CareerPolicy::unified();

        let next = career.advance(&special(d(2021, 7, 13), "5.A"), None).unwrap().unwrap();
        assert_eq!(next.date, d(2023, 1, 13));
        assert_eq!(next.level, lvl("8.B"));

        let next = career.advance(&rec(d(2026, 10, 13), "18.C"), None).unwrap().unwrap();
        assert_eq!(next.date, d(2028, 10, 13));
        assert_eq!(next.level, lvl("20.D"));

        let next = career.advance(&rec(d(2020, 1, 1), "25.D"), None).unwrap().unwrap();
        assert_eq!(next.date, d(2022, 1, 1));
        assert_eq!(next.level, lvl("27.E"));
    }

    #[test]
    fn test_combined_progression_respects_external_letter_cap() {
        let career = CareerPolicy::unified();

        let next = career.advance(&rec(d(2020, 1, 1), "5.A"), Some(Letter::A)).unwrap().unwrap();
        assert_eq!(next.level, lvl("7.A"));

        let next = career.advance(&rec(d(2020, 1, 1), "17.C"), Some(Letter::E)).unwrap().unwrap();
        assert_eq!(next.level, lvl("19.D"));
    }

    #[test]
    fn test_advance_to_letter() {
        let career = CareerPolicy::unified();
        assert_eq!(career.advance_to_letter(&lvl("20.A"), Letter::C).unwrap(), lvl("20.C"));
        assert_eq!(career.advance_to_letter(&lvl("20.A"), Letter::E).unwrap(), lvl("20.D"));
        assert_eq!(career.advance_to_letter(&lvl("20.C"), Letter::A).unwrap(), lvl("20.C"));
    }

    #[test]
    fn test_invalid_levels_rejected() {
        let career = CareerPolicy::unified();
        for text in ["1.B", "6.B", "12.C", "18.D", "24.E", "10.E", "49.0"] {
            assert!(career.assert_valid(&lvl(text)).is_err(), "{text} should be invalid");
        }
        assert!(career.assert_valid(&lvl("48.E")).is_ok());
    }

    #[test]
    fn test_every_advancement_checks_validity() {
        let career = CareerPolicy::unified();
        let bad = rec(d(2020, 1, 1), "2.E");

        assert!(career.advance_vertically(&bad).is_err());
        assert!(career.advance(&bad, None).is_err());
        assert!(career.grant_ceiling_letters(&bad.level).is_err());
        assert!(career.advance_to_letter(&bad.level, Letter::E).is_err());
    }

    #[test]
    fn test_clamp_at_terminal_rung_grants_credit() {
        let e2 = CareerPolicy::new(CareerVariant::Exam2004, JobClass::E2);
        let e3 = CareerPolicy::new(CareerVariant::Exam2004, JobClass::E3);

        // (career, before, date, level, credit)
        let cases = [
            (e2, special(d(2020, 1, 1), "34.D"), d(2022, 7, 1), "36.D", 0),
            (e2, special(d(2020, 1, 1), "35.D"), d(2022, 7, 1), "36.D", 15),
            (e2, rec(d(2020, 1, 1), "35.D"), d(2022, 7, 1), "36.D", 15),
            (e3, special(d(2020, 1, 1), "33.D"), d(2022, 7, 1), "35.D", 0),
            (e3, special(d(2020, 1, 1), "34.D"), d(2022, 7, 1), "35.D", 15),
            (e3, rec(d(2020, 1, 1), "34.D"), d(2022, 7, 1), "35.D", 15),
        ];
        for (career, before, date, level, credit) in cases {
            let next = career.advance_vertically(&before).unwrap().unwrap();
            assert_eq!(next.date, date);
            assert_eq!(next.level, lvl(level));
            assert_eq!(next.credit_months, credit, "{} from {}", career.variant(), before.level);
        }
    }

    #[test]
    fn test_no_progression_at_terminal_rung() {
        let e2 = CareerPolicy::new(CareerVariant::Exam2004, JobClass::E2);
        let e3 = CareerPolicy::new(CareerVariant::Exam2004, JobClass::E3);

        assert_eq!(e2.advance_vertically(&special(d(2020, 1, 1), "36.E")).unwrap(), None);
        assert_eq!(e2.advance_vertically(&rec(d(2020, 1, 1), "36.B")).unwrap(), None);
        assert_eq!(e3.advance_vertically(&special(d(2020, 1, 1), "35.E")).unwrap(), None);
        assert_eq!(e3.advance(&rec(d(2020, 1, 1), "35.B"), None).unwrap(), None);
    }

    #[test]
    fn test_legacy_top_up_spends_credit() {
        let career = CareerPolicy::new(CareerVariant::Legacy, JobClass::E2);
        assert_eq!(career.terminal_rung(), 32);
        assert_eq!(career.absolute_limit(), 40);

        let clamped = career.advance_vertically(&rec(d(2020, 1, 1), "31.C")).unwrap().unwrap();
        assert_eq!(clamped.level, lvl("32.C"));
        assert_eq!(clamped.date, d(2022, 7, 1));
        assert_eq!(clamped.credit_months, 15);

        let top_up = career.advance_vertically(&clamped).unwrap().unwrap();
        assert_eq!(top_up.level, lvl("33.C"));
        assert_eq!(top_up.date, d(2025, 4, 1));
        assert_eq!(top_up.credit_months, 0);

        let next = career.advance_vertically(&top_up).unwrap().unwrap();
        assert_eq!(next.level, lvl("34.C"));
        assert_eq!(next.date, d(2029, 4, 1));
    }

    #[test]
    fn test_legacy_top_up_ignores_special_counter() {
        let career = CareerPolicy::new(CareerVariant::Legacy, JobClass::E2);
        let expected = Some(rec(d(2026, 7, 1), "36.0").with_bonus_counter(2));

        let ordinary = career.advance_vertically(&rec(d(2022, 7, 1), "35.0")).unwrap();
        let with_special = career.advance_vertically(&special(d(2022, 7, 1), "35.0")).unwrap();

        assert_eq!(ordinary.map(|p| (p.date, p.level)), expected.map(|p| (p.date, p.level)));
        assert_eq!(with_special.map(|p| (p.date, p.level)), expected.map(|p| (p.date, p.level)));
    }

    #[test]
    fn test_legacy_top_up_ceiling() {
        let e2 = CareerPolicy::new(CareerVariant::Legacy, JobClass::E2);
        let e3 = CareerPolicy::new(CareerVariant::Legacy, JobClass::E3);
        assert_eq!(e3.absolute_limit(), 39);

        assert_eq!(e2.advance_vertically(&rec(d(2020, 1, 1), "40.0")).unwrap(), None);
        assert_eq!(e3.advance_vertically(&rec(d(2020, 1, 1), "39.D")).unwrap(), None);

        let last = e3.advance_vertically(&rec(d(2020, 1, 1), "38.D")).unwrap().unwrap();
        assert_eq!(last.level, lvl("39.D"));
        assert_eq!(last.date, d(2024, 1, 1));

        assert!(e2.assert_valid(&lvl("41.0")).is_err());
        assert!(e3.assert_valid(&lvl("40.0")).is_err());
    }

    #[test]
    fn test_legacy_special_clamped_to_two_rungs_has_no_credit() {
        let career = CareerPolicy::new(CareerVariant::Legacy, JobClass::E2);
        let next = career.advance_vertically(&special(d(2020, 1, 1), "30.B")).unwrap().unwrap();
        assert_eq!(next.level, lvl("32.B"));
        assert_eq!(next.credit_months, 0);
    }

    #[test]
    fn test_special_cycle_every_third_progression() {
        let career = CareerPolicy::unified();
        let mut last = rec(d(2000, 1, 1), "1.A");
        let mut gains = Vec::new();

        for _ in 0..6 {
            let next = career.advance_vertically(&last).unwrap().unwrap();
            gains.push(next.level.rung() - last.level.rung());
            last = next;
        }

        assert_eq!(gains, vec![2, 2, 3, 2, 2, 3]);
    }

    #[test]
    fn test_select_for() {
        let cases = [
            (100, CareerVariant::Legacy),
            (329, CareerVariant::Legacy),
            (330, CareerVariant::Exam2004),
            (400, CareerVariant::Exam2004),
            (411, CareerVariant::Exam2004),
            (412, CareerVariant::Exam2008),
            (545, CareerVariant::Exam2008),
            (546, CareerVariant::Recent),
        ];
        for (id, variant) in cases {
            assert_eq!(CareerPolicy::select_for(id, JobClass::E2).variant(), variant, "id {id}");
        }

        let e1 = CareerPolicy::select_for(600, JobClass::E1);
        let e3 = CareerPolicy::select_for(600, JobClass::E3);
        assert_eq!(e1.terminal_rung(), 32);
        assert_eq!(e3.terminal_rung(), 31);
        assert_eq!(e3.interstitial(), InterstitialSchedule::Upper);
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("E3".parse::<JobClass>().unwrap(), JobClass::E3);
        assert!("E4".parse::<JobClass>().is_err());
        assert_eq!("Exam2008".parse::<CareerVariant>().unwrap(), CareerVariant::Exam2008);
    }
}
