//! Projection of levels over time for single employees and whole rosters

mod engine;
mod rows;
mod timeline;

pub use engine::{ConfigError, ProjectionConfig, ProjectionEngine, ProjectionError};
pub use rows::{EligibilitySummary, EmployeeProjection, LevelRow};
pub use timeline::{first_progression, TimelineProjector};
