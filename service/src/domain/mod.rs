//! Domain definitions.

pub mod calendar;
pub mod member;
pub mod period;
pub mod salary;
pub mod settings;
pub mod work_day;

pub use self::{
    member::TeamMember, period::PayPeriod, settings::Settings,
    work_day::WorkDay,
};
