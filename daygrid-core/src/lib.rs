//! Core types for daygrid.
//!
//! This crate provides everything behind the month view:
//! - `grid` builds the month grid of `Dated` days, with filler days from
//!   the adjacent months
//! - `store` keeps schedules per day in chronological order
//! - `selection`, `forms` and `workflow` drive the create/edit dialogs

pub mod constants;
pub mod date_grid;
pub mod dated;
pub mod daygrid_config;
pub mod error;
pub mod forms;
pub mod grid;
pub mod notice;
pub mod schedule;
pub mod selection;
pub mod store;
pub mod time_value;
pub mod workflow;

pub use dated::Dated;
pub use error::{DaygridError, DaygridResult};
pub use grid::{build_month_grid, MonthGrid, WeekStart};
pub use schedule::{Invitation, NewSchedule, Schedule, ScheduleDraft, SchedulePatch};
pub use store::ScheduleStore;
pub use time_value::{Meridiem, TimeValue};
