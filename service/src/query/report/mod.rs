//! [`Query`] collection of reports.

#[cfg(doc)]
use crate::Query;

pub mod salary;

pub use self::salary::Salary;
