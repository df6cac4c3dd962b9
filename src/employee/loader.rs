//! Load the HR roster from CSV

use super::EmployeeRecord;
use crate::career::{
    AcquiredLetters, CareerVariant, JobClass, Level, ParseCodeError, ParseLevelError,
    ProgressionRecord,
};
use crate::leave::LeaveRecord;
use crate::retirement::Sex;
use chrono::NaiveDate;
use csv::Reader;
use log::info;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Csv(#[from] csv::Error),

    #[error("employee {employee_id}: {source}")]
    Code {
        employee_id: u32,
        #[source]
        source: ParseCodeError,
    },

    #[error("employee {employee_id}: {source}")]
    Level {
        employee_id: u32,
        #[source]
        source: ParseLevelError,
    },

    #[error("employee {employee_id}: level {level} has no last_progression_date")]
    MissingProgressionDate { employee_id: u32, level: Level },
}

/// Raw CSV row matching the roster export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    employee_id: u32,
    hire_date: NaiveDate,
    job_class: String,
    attorney: bool,
    sex: String,
    birth_date: NaiveDate,
    prior_contribution_days: u32,
    prior_public_service_days: u32,
    leave_days: u32,
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    last_progression_date: Option<NaiveDate>,
    #[serde(default)]
    bonus_counter: Option<u8>,
    #[serde(default)]
    credit_months: Option<u32>,
    #[serde(default)]
    acquired_letter: Option<String>,
    #[serde(default)]
    current_rung: Option<u32>,
    #[serde(default)]
    leave_start: Option<NaiveDate>,
    #[serde(default)]
    leave_used_days: Option<u32>,
    #[serde(default)]
    career: Option<String>,
}

impl CsvRow {
    fn to_employee(self) -> Result<EmployeeRecord, RosterError> {
        let employee_id = self.employee_id;
        let code_err = |source| RosterError::Code { employee_id, source };
        let level_err = |source| RosterError::Level { employee_id, source };

        let job_class: JobClass = self.job_class.parse().map_err(code_err)?;
        let sex: Sex = self.sex.parse().map_err(code_err)?;

        let career = match non_blank(self.career.as_deref()) {
            Some(text) => Some(text.parse::<CareerVariant>().map_err(code_err)?),
            None => None,
        };

        let last_progression = match non_blank(self.level.as_deref()) {
            Some(text) => {
                let level: Level = text.parse().map_err(level_err)?;
                let date = self
                    .last_progression_date
                    .ok_or(RosterError::MissingProgressionDate { employee_id, level })?;
                Some(
                    ProgressionRecord::new(date, level)
                        .with_bonus_counter(self.bonus_counter.unwrap_or(0))
                        .with_credit(self.credit_months.unwrap_or(0)),
                )
            }
            None => None,
        };

        // A row carries acquired letters when either letter column is filled
        let acquired_letters = match (self.acquired_letter.as_deref(), self.current_rung) {
            (None, None) => None,
            (letter, rung) => Some(AcquiredLetters::new(
                AcquiredLetters::parse_letter(letter.unwrap_or("")).map_err(level_err)?,
                rung.unwrap_or(1),
            )),
        };

        let leave = LeaveRecord::new(
            self.leave_start.unwrap_or(self.hire_date),
            self.leave_used_days.unwrap_or(0),
        );

        Ok(EmployeeRecord {
            employee_id,
            hire_date: self.hire_date,
            job_class,
            attorney: self.attorney,
            sex,
            birth_date: self.birth_date,
            prior_contribution_days: self.prior_contribution_days,
            prior_public_service_days: self.prior_public_service_days,
            leave_days: self.leave_days,
            last_progression,
            acquired_letters,
            leave,
            career,
        })
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

/// Load all employees from a CSV file
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<EmployeeRecord>, RosterError> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let employees = read_rows(reader)?;
    info!("loaded {} employees from {}", employees.len(), path.display());
    Ok(employees)
}

/// Load employees from any reader (e.g., string buffer, network stream)
pub fn load_roster_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<EmployeeRecord>, RosterError> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<EmployeeRecord>, RosterError> {
    let mut employees = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        employees.push(row.to_employee()?);
    }

    Ok(employees)
}
