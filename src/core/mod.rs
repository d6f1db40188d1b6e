pub mod aggregate;
pub mod duration;
pub mod engine;
pub mod goal;
pub mod holidays;
pub mod report;

pub use crate::domain::model::{GoalInputs, GoalReport, TimeEntry};
pub use crate::domain::ports::{HolidayCalendar, TimeTracker};
pub use crate::utils::error::Result;
