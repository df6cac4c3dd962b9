//! Level of one employee at any date of their active service

use crate::calendar::{add_days, first_of_month, same_month};
use crate::career::{CareerPolicy, InvalidLevel, Letter, Level, ProgressionRecord};
use chrono::NaiveDate;
use log::{debug, warn};

/// Starting rung for general positions
const ENTRY_RUNG: u32 = 1;

/// Starting rung for attorneys
const ATTORNEY_ENTRY_RUNG: u32 = 10;

/// Record an employee starts their career with
///
/// Leave taken before the first progression pushes its date forward day by day.
pub fn first_progression(
    hire_date: NaiveDate,
    attorney: bool,
    leave_days: u32,
) -> Result<ProgressionRecord, InvalidLevel> {
    let rung = if attorney { ATTORNEY_ENTRY_RUNG } else { ENTRY_RUNG };
    let level = Level::new(rung, Letter::A)?;
    Ok(ProgressionRecord::new(add_days(hire_date, leave_days), level))
}

/// Lazily extended progression history of one employee
///
/// Each query extends the history only as far as it needs; earlier dates are
/// answered from what is already there.
#[derive(Debug, Clone)]
pub struct TimelineProjector {
    policy: CareerPolicy,
    hire_date: NaiveDate,
    retirement_date: NaiveDate,
    max_letter: Option<Letter>,
    history: Vec<ProgressionRecord>,
    finished: bool,
}

impl TimelineProjector {
    pub fn new(
        policy: CareerPolicy,
        hire_date: NaiveDate,
        retirement_date: NaiveDate,
        max_letter: Option<Letter>,
        start: ProgressionRecord,
    ) -> Self {
        Self {
            policy,
            hire_date,
            retirement_date,
            max_letter,
            history: vec![start],
            finished: false,
        }
    }

    pub fn policy(&self) -> &CareerPolicy {
        &self.policy
    }

    /// Records generated so far, oldest first
    pub fn history(&self) -> &[ProgressionRecord] {
        &self.history
    }

    /// Level held in the month of `date`
    ///
    /// Returns `None` before admission and after retirement.
    pub fn level_at(&mut self, date: NaiveDate) -> Result<Option<Level>, InvalidLevel> {
        let target = first_of_month(date);
        if target <= self.hire_date || target > self.retirement_date {
            return Ok(None);
        }

        self.extend_to(target)?;

        let level = self
            .history
            .iter()
            .rev()
            .find(|record| record.date < target || same_month(record.date, target))
            .map(|record| record.level);

        Ok(level)
    }

    fn extend_to(&mut self, target: NaiveDate) -> Result<(), InvalidLevel> {
        while !self.finished {
            let Some(last) = self.history.last().copied() else {
                break;
            };
            if target <= last.date {
                break;
            }

            match self.policy.advance(&last, self.max_letter)? {
                Some(next) => {
                    if next.date <= last.date {
                        warn!(
                            "progression to {} on {} does not advance past {}",
                            next.level, next.date, last.date
                        );
                    }
                    debug!("progression to {} on {}", next.level, next.date);
                    self.history.push(next);
                }
                None => {
                    debug!("career ends at {} ({})", last.level, self.policy.variant());
                    self.finished = true;
                }
            }
        }
        Ok(())
    }
}
