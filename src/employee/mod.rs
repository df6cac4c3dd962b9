//! Employee data structures and roster loading

mod data;
pub mod loader;

pub use data::EmployeeRecord;
pub use loader::{load_roster, load_roster_from_reader, RosterError};
