//! Points rule of the pre-1998 transition regime
//!
//! Points are age plus contribution years, both in completed years. Either one
//! grows only on its own anniversary, so the search walks the merged sequence of
//! birthdays and contribution anniversaries until the target is met.

use crate::calendar::{add_years, full_years_between};
use chrono::NaiveDate;
use log::debug;

/// Upper bound on visited anniversaries; two per year covers any working life
pub const MAX_STEPS: usize = 300;

/// Earliest date at or after `origin` where age plus contribution years reaches `points`
///
/// `origin` is the day the minimum contribution is completed, worth
/// `contribution_years`. Returns `None` when the search does not converge
/// within [`MAX_STEPS`].
pub fn points_date(
    birth_date: NaiveDate,
    origin: NaiveDate,
    contribution_years: u32,
    points: u32,
) -> Option<NaiveDate> {
    let mut at = origin;

    for _ in 0..MAX_STEPS {
        let age = full_years_between(birth_date, at).max(0) as u32;
        let served = full_years_between(origin, at).max(0) as u32;
        let total = age + contribution_years + served;

        debug!("{at}: age {age} + contribution {} = {total} points", contribution_years + served);
        if total >= points {
            return Some(at);
        }

        let next_contribution = add_years(origin, served + 1);
        let next_birthday = add_years(birth_date, age + 1);
        at = next_contribution.min(next_birthday);
    }

    None
}
