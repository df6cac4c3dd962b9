//! Retirement eligibility under the three legal regimes
//!
//! Every regime combines four "earliest possible" dates: contribution time,
//! minimum age, minimum public service and minimum tenure with the employer.
//! The regime decides the public-service and tenure thresholds and whether the
//! points rule applies. The compulsory age caps every result.

mod transition;

pub use transition::{points_date, MAX_STEPS};

use crate::calendar::{add_years, sub_days};
use crate::career::ParseCodeError;
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age at which retirement becomes compulsory
pub const COMPULSORY_AGE: u32 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// Sex-dependent requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SexThresholds {
    pub contribution_years: u32,
    pub minimum_age: u32,
    pub points: u32,
}

impl Sex {
    pub fn thresholds(&self) -> SexThresholds {
        match self {
            Sex::Male => SexThresholds {
                contribution_years: 35,
                minimum_age: 60,
                points: 95,
            },
            Sex::Female => SexThresholds {
                contribution_years: 30,
                minimum_age: 55,
                points: 85,
            },
        }
    }
}

impl FromStr for Sex {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "Male" => Ok(Sex::Male),
            "F" | "Female" => Ok(Sex::Female),
            other => Err(ParseCodeError::new("sex", other)),
        }
    }
}

/// Social-security data of one employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalData {
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub admission_date: NaiveDate,

    /// Days contributed to the general (INSS) regime before admission
    pub prior_contribution_days: u32,

    /// Days of public service elsewhere before admission
    pub prior_public_service_days: u32,
}

impl VitalData {
    /// Date the employee entered public service, counting prior service
    pub fn public_service_entry(&self) -> NaiveDate {
        sub_days(self.admission_date, self.prior_public_service_days)
    }

    /// Day the required contribution time is completed
    fn contribution_date(&self) -> NaiveDate {
        let years = self.sex.thresholds().contribution_years;
        let full_term = add_years(self.admission_date, years);
        sub_days(
            sub_days(full_term, self.prior_contribution_days),
            self.prior_public_service_days,
        )
    }

    fn minimum_age_date(&self) -> NaiveDate {
        add_years(self.birth_date, self.sex.thresholds().minimum_age)
    }

    fn public_service_date(&self, years: u32) -> NaiveDate {
        sub_days(add_years(self.admission_date, years), self.prior_public_service_days)
    }

    fn employer_date(&self, years: u32) -> NaiveDate {
        add_years(self.admission_date, years)
    }

    fn compulsory_date(&self) -> NaiveDate {
        add_years(self.birth_date, COMPULSORY_AGE)
    }
}

/// Legal regime, chosen by the date of entry into public service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RetirementRegime {
    /// Entered after 2003
    Current,
    /// Entered between mid-1998 and the end of 2003
    FullBenefit,
    /// Entered before the 1998 reform; points rule
    Transition,
}

/// Regime-dependent minimum service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegimeThresholds {
    pub public_service_years: u32,
    pub employer_years: u32,
}

impl RetirementRegime {
    pub fn thresholds(&self) -> RegimeThresholds {
        let (public_service_years, employer_years) = match self {
            RetirementRegime::Current => (10, 5),
            RetirementRegime::FullBenefit => (20, 10),
            RetirementRegime::Transition => (25, 15),
        };
        RegimeThresholds {
            public_service_years,
            employer_years,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RetirementRegime::Current => "Current",
            RetirementRegime::FullBenefit => "FullBenefit",
            RetirementRegime::Transition => "Transition",
        }
    }
}

impl fmt::Display for RetirementRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Retirement date of one employee, computed once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RetirementEligibility {
    vital: VitalData,
    regime: RetirementRegime,
    qualifying_date: NaiveDate,
    retirement_date: NaiveDate,
    compulsory: bool,
}

impl RetirementEligibility {
    /// Regime the employee falls under
    pub fn select_for(vital: &VitalData) -> RetirementRegime {
        let entry = vital.public_service_entry();
        if entry < transition_cutoff() {
            RetirementRegime::Transition
        } else if entry <= full_benefit_cutoff() {
            RetirementRegime::FullBenefit
        } else {
            RetirementRegime::Current
        }
    }

    /// Eligibility under the regime the employee falls under
    pub fn new(vital: VitalData) -> Self {
        Self::with_regime(vital, Self::select_for(&vital))
    }

    /// Eligibility under an explicitly chosen regime
    pub fn with_regime(vital: VitalData, regime: RetirementRegime) -> Self {
        let qualifying_date = qualifying_date(&vital, regime);
        let compulsory_date = vital.compulsory_date();
        let compulsory = qualifying_date > compulsory_date;

        Self {
            vital,
            regime,
            qualifying_date,
            retirement_date: qualifying_date.min(compulsory_date),
            compulsory,
        }
    }

    pub fn vital(&self) -> &VitalData {
        &self.vital
    }

    pub fn regime(&self) -> RetirementRegime {
        self.regime
    }

    /// Date the regime's requirements are met, ignoring the compulsory age
    pub fn qualifying_date(&self) -> NaiveDate {
        self.qualifying_date
    }

    pub fn retirement_date(&self) -> NaiveDate {
        self.retirement_date
    }

    /// Retirement is forced by age before the requirements are met
    pub fn is_compulsory(&self) -> bool {
        self.compulsory
    }
}

fn qualifying_date(vital: &VitalData, regime: RetirementRegime) -> NaiveDate {
    match regime {
        RetirementRegime::Current | RetirementRegime::FullBenefit => latest_requirement(vital, regime),
        RetirementRegime::Transition => transition_date(vital),
    }
}

/// Latest of the four requirement dates
fn latest_requirement(vital: &VitalData, regime: RetirementRegime) -> NaiveDate {
    let thresholds = regime.thresholds();
    [
        vital.contribution_date(),
        vital.minimum_age_date(),
        vital.public_service_date(thresholds.public_service_years),
        vital.employer_date(thresholds.employer_years),
    ]
    .into_iter()
    .max()
    .unwrap_or(vital.admission_date)
}

/// Points rule bounded by the service thresholds, never later than full benefit
fn transition_date(vital: &VitalData) -> NaiveDate {
    let full_benefit = latest_requirement(vital, RetirementRegime::FullBenefit);
    let sex = vital.sex.thresholds();
    let thresholds = RetirementRegime::Transition.thresholds();

    let Some(points) = points_date(
        vital.birth_date,
        vital.contribution_date(),
        sex.contribution_years,
        sex.points,
    ) else {
        warn!(
            "points search for birth date {} did not converge in {MAX_STEPS} steps, using full-benefit date",
            vital.birth_date
        );
        return full_benefit;
    };

    let transition = points
        .max(vital.public_service_date(thresholds.public_service_years))
        .max(vital.employer_date(thresholds.employer_years));

    transition.min(full_benefit)
}

fn transition_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(1998, 7, 16).unwrap_or(NaiveDate::MIN)
}

fn full_benefit_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2003, 12, 31).unwrap_or(NaiveDate::MIN)
}
