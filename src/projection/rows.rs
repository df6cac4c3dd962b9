//! Output structures for employee projections

use crate::career::{CareerVariant, Level};
use crate::retirement::RetirementRegime;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Level of one employee in one competence month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRow {
    pub employee_id: u32,

    /// First day of the competence month
    pub competence: NaiveDate,

    /// `None` when not yet hired or already retired
    pub level: Option<Level>,
}

/// Retirement and leave figures of one employee, one CSV line per employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilitySummary {
    pub employee_id: u32,
    pub career: CareerVariant,
    pub regime: RetirementRegime,
    pub retirement_date: NaiveDate,
    pub compulsory: bool,
    pub service_years_at_retirement: u32,
    pub leave_days_at_retirement: u32,
    pub level_at_retirement: Option<Level>,
}

/// Full result for one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProjection {
    pub summary: EligibilitySummary,
    pub rows: Vec<LevelRow>,
}

impl EmployeeProjection {
    pub fn employee_id(&self) -> u32 {
        self.summary.employee_id
    }

    /// Level in the competence month containing `date`
    pub fn level_in(&self, date: NaiveDate) -> Option<Level> {
        self.rows
            .iter()
            .find(|row| crate::calendar::same_month(row.competence, date))
            .and_then(|row| row.level)
    }

    /// Months with an active level
    pub fn active_months(&self) -> usize {
        self.rows.iter().filter(|row| row.level.is_some()).count()
    }
}
