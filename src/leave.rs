//! Special-leave (Art. 98) entitlement
//!
//! Each completed year of service grants 8 days, every third year another 16
//! and every fifth year another 24. Future usage is estimated from the
//! employee's own history, or from the organisation when there is none yet.

use crate::calendar::full_years_between;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Leave history of one employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// Date the employee started accruing
    pub start_date: NaiveDate,

    /// Days already taken
    pub used_days: u32,
}

impl LeaveRecord {
    pub fn new(start_date: NaiveDate, used_days: u32) -> Self {
        Self { start_date, used_days }
    }

    /// Completed years of accrual at `as_of`
    fn years_at(&self, as_of: NaiveDate) -> u32 {
        full_years_between(self.start_date, as_of).max(0) as u32
    }

    /// Days taken per completed year, 0 before the first year completes
    pub fn own_average(&self, as_of: NaiveDate) -> u32 {
        match self.years_at(as_of) {
            0 => 0,
            years => self.used_days / years,
        }
    }
}

/// Days granted after `years` completed years
pub fn granted_days(years: u32) -> u32 {
    8 * years + 16 * (years / 3) + 24 * (years / 5)
}

/// Truncated mean of every employee's own average; 0 for an empty roster
pub fn organization_average(records: &[LeaveRecord], as_of: NaiveDate) -> u32 {
    if records.is_empty() {
        return 0;
    }
    let total: u64 = records.iter().map(|r| u64::from(r.own_average(as_of))).sum();
    (total / records.len() as u64) as u32
}

/// Balance calculator for one employee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveEntitlement {
    record: LeaveRecord,
    organization_average: u32,
    as_of: NaiveDate,
}

impl LeaveEntitlement {
    /// `as_of` separates observed usage from projected usage
    pub fn new(record: LeaveRecord, organization_average: u32, as_of: NaiveDate) -> Self {
        Self {
            record,
            organization_average,
            as_of,
        }
    }

    /// Days expected to be taken per projected year
    pub fn average_annual_usage(&self) -> u32 {
        if self.record.start_date > self.as_of || self.record.years_at(self.as_of) == 0 {
            return self.organization_average;
        }
        self.record.own_average(self.as_of)
    }

    /// Accrued but unused days at `target`, never negative
    pub fn accrued_days_for(&self, target: NaiveDate) -> u32 {
        let granted = i64::from(granted_days(self.record.years_at(target)));
        let projected_years = i64::from(full_years_between(self.as_of, target).max(0));
        let projected_usage = i64::from(self.average_annual_usage()) * projected_years;

        let balance = granted - i64::from(self.record.used_days) - projected_usage;
        balance.max(0) as u32
    }
}
