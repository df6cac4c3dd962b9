//! Career Projection - career progression and retirement eligibility engine for civil-service payroll planning
//!
//! This library provides:
//! - Pay-scale levels and the career rules of each hiring cohort
//! - Lazy timelines answering "which level on date D" for any employee
//! - Retirement eligibility under the current, full-benefit and transition regimes
//! - Special-leave (Art. 98) balances
//! - Roster loading and parallel roster-wide projections

pub mod calendar;
pub mod career;
pub mod employee;
pub mod leave;
pub mod projection;
pub mod retirement;

// Re-export commonly used types
pub use career::{CareerPolicy, CareerVariant, InvalidLevel, JobClass, Letter, Level, ProgressionRecord};
pub use employee::EmployeeRecord;
pub use leave::LeaveEntitlement;
pub use projection::{ProjectionConfig, ProjectionEngine, TimelineProjector};
pub use retirement::{RetirementEligibility, RetirementRegime, Sex, VitalData};
