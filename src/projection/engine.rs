//! Projection engine: monthly levels and retirement figures per employee

use super::rows::{EligibilitySummary, EmployeeProjection, LevelRow};
use super::timeline::TimelineProjector;
use crate::calendar::{add_months, first_of_month};
use crate::career::{InvalidLevel, LetterGrantMode};
use crate::employee::EmployeeRecord;
use crate::leave::{organization_average, LeaveEntitlement, LeaveRecord};
use crate::retirement::RetirementEligibility;
use chrono::{Months, NaiveDate};
use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("projection window ends ({last}) before it starts ({first})")]
    EmptyWindow { first: NaiveDate, last: NaiveDate },
}

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("employee {employee_id}: {source}")]
    InvalidLevel {
        employee_id: u32,
        #[source]
        source: InvalidLevel,
    },
}

/// Organisation parameters of a projection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// First competence month projected
    pub first_competence: NaiveDate,

    /// Last competence month projected, inclusive
    pub last_competence: NaiveDate,

    /// How many letters beyond the acquired ones may be granted
    pub letter_grant_mode: LetterGrantMode,

    /// Special-leave days taken per year across the organisation;
    /// computed from the roster when absent
    pub organization_leave_average: Option<u32>,

    /// Reference date separating observed from projected leave usage
    pub as_of: NaiveDate,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MIN);
        Self {
            first_competence: start,
            last_competence: add_months(start, 30 * 12 - 1), // 30 years
            letter_grant_mode: LetterGrantMode::AllLetters,
            organization_leave_average: None,
            as_of: start,
        }
    }
}

impl ProjectionConfig {
    /// Load parameters from a JSON file; missing keys keep their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.last_competence < self.first_competence {
            return Err(ConfigError::EmptyWindow {
                first: self.first_competence,
                last: self.last_competence,
            });
        }
        Ok(())
    }

    /// First day of every competence month in the window
    ///
    /// Stops at the last month chrono can represent.
    pub fn competence_months(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let first = first_of_month(self.first_competence);
        let last = self.last_competence;
        std::iter::successors(Some(first), |month| month.checked_add_months(Months::new(1)))
            .take_while(move |month| *month <= last)
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project a single employee
    ///
    /// Without a configured organisation leave average, new employees are
    /// assumed to take no leave; [`project_roster`](Self::project_roster)
    /// derives the average from the roster instead.
    pub fn project_employee(&self, employee: &EmployeeRecord) -> Result<EmployeeProjection, ProjectionError> {
        let average = self.config.organization_leave_average.unwrap_or(0);
        self.project_with_leave_average(employee, average)
    }

    /// Project every employee in parallel, keeping roster order
    pub fn project_roster(&self, employees: &[EmployeeRecord]) -> Result<Vec<EmployeeProjection>, ProjectionError> {
        let average = match self.config.organization_leave_average {
            Some(average) => average,
            None => {
                let records: Vec<LeaveRecord> = employees.iter().map(|e| e.leave).collect();
                let average = organization_average(&records, self.config.as_of);
                info!("organisation leave average: {average} days/year over {} employees", records.len());
                average
            }
        };

        employees
            .par_iter()
            .map(|employee| self.project_with_leave_average(employee, average))
            .collect()
    }

    fn project_with_leave_average(
        &self,
        employee: &EmployeeRecord,
        leave_average: u32,
    ) -> Result<EmployeeProjection, ProjectionError> {
        let employee_id = employee.employee_id;
        let level_err = |source| ProjectionError::InvalidLevel { employee_id, source };

        let eligibility = RetirementEligibility::new(employee.vital_data());
        let retirement_date = eligibility.retirement_date();

        let policy = employee.career_policy();
        let max_letter = self
            .config
            .letter_grant_mode
            .max_letter(employee.acquired_letters.as_ref());
        let start = employee.starting_record().map_err(level_err)?;

        debug!(
            "employee {employee_id}: {} career from {} on {}, retires {} ({})",
            policy.variant(),
            start.level,
            start.date,
            retirement_date,
            eligibility.regime()
        );

        let mut timeline = TimelineProjector::new(policy, employee.hire_date, retirement_date, max_letter, start);

        let rows = self
            .config
            .competence_months()
            .map(|competence| -> Result<LevelRow, InvalidLevel> {
                let level = timeline.level_at(competence)?;
                Ok(LevelRow {
                    employee_id,
                    competence,
                    level,
                })
            })
            .collect::<Result<Vec<_>, InvalidLevel>>()
            .map_err(level_err)?;

        let level_at_retirement = timeline.level_at(retirement_date).map_err(level_err)?;
        let leave = LeaveEntitlement::new(employee.leave, leave_average, self.config.as_of);

        let summary = EligibilitySummary {
            employee_id,
            career: policy.variant(),
            regime: eligibility.regime(),
            retirement_date,
            compulsory: eligibility.is_compulsory(),
            service_years_at_retirement: employee.service_years_at(retirement_date),
            leave_days_at_retirement: leave.accrued_days_for(retirement_date),
            level_at_retirement,
        };

        Ok(EmployeeProjection { summary, rows })
    }
}
