//! Employee records as exported by HR

use crate::calendar::full_years_between;
use crate::career::{AcquiredLetters, CareerPolicy, CareerVariant, InvalidLevel, JobClass, ProgressionRecord};
use crate::leave::LeaveRecord;
use crate::projection::first_progression;
use crate::retirement::{Sex, VitalData};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single employee from the HR roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Registration number, issued sequentially at hire
    pub employee_id: u32,

    pub hire_date: NaiveDate,

    pub job_class: JobClass,

    /// Attorneys start on a higher rung
    pub attorney: bool,

    pub sex: Sex,

    pub birth_date: NaiveDate,

    /// Days contributed to the general regime before admission
    pub prior_contribution_days: u32,

    /// Days of public service elsewhere before admission
    pub prior_public_service_days: u32,

    /// Leave days that postpone the first progression
    pub leave_days: u32,

    /// Latest progression known to HR; `None` for new hires
    pub last_progression: Option<ProgressionRecord>,

    /// Letters already held, when HR tracks them
    pub acquired_letters: Option<AcquiredLetters>,

    /// Special-leave history
    pub leave: LeaveRecord,

    /// Explicit career assignment overriding cohort selection
    pub career: Option<CareerVariant>,
}

impl EmployeeRecord {
    /// New hire with no progression history
    pub fn new(
        employee_id: u32,
        hire_date: NaiveDate,
        job_class: JobClass,
        sex: Sex,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            employee_id,
            hire_date,
            job_class,
            attorney: false,
            sex,
            birth_date,
            prior_contribution_days: 0,
            prior_public_service_days: 0,
            leave_days: 0,
            last_progression: None,
            acquired_letters: None,
            leave: LeaveRecord::new(hire_date, 0),
            career: None,
        }
    }

    /// Career rules bound to this employee
    pub fn career_policy(&self) -> CareerPolicy {
        match self.career {
            Some(variant) => CareerPolicy::new(variant, self.job_class),
            None => CareerPolicy::select_for(self.employee_id, self.job_class),
        }
    }

    pub fn vital_data(&self) -> VitalData {
        VitalData {
            birth_date: self.birth_date,
            sex: self.sex,
            admission_date: self.hire_date,
            prior_contribution_days: self.prior_contribution_days,
            prior_public_service_days: self.prior_public_service_days,
        }
    }

    /// Record the timeline starts from
    pub fn starting_record(&self) -> Result<ProgressionRecord, InvalidLevel> {
        match self.last_progression {
            Some(record) => Ok(record),
            None => first_progression(self.hire_date, self.attorney, self.leave_days),
        }
    }

    /// Completed years since hire, 0 before hire
    pub fn service_years_at(&self, date: NaiveDate) -> u32 {
        full_years_between(self.hire_date, date).max(0) as u32
    }
}
