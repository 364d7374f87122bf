//! The displayed month and its grid.

use chrono::{Datelike, Months, NaiveDate};

use crate::error::DaygridResult;
use crate::grid::{build_month_grid, MonthGrid, WeekStart};

/// Holds the month being displayed. Every navigation step rebuilds the grid
/// from scratch; existing `Dated` values are never mutated.
#[derive(Debug, Clone)]
pub struct DateGridState {
    reference: NaiveDate,
    week_start: WeekStart,
    grid: MonthGrid,
}

impl DateGridState {
    pub fn init(today: NaiveDate, week_start: WeekStart) -> DaygridResult<Self> {
        Ok(DateGridState {
            reference: today,
            week_start,
            grid: build_month_grid(today, week_start)?,
        })
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    /// Move to the following month. Returns false at the end of the
    /// representable calendar.
    pub fn next_month(&mut self) -> bool {
        self.first_of_month()
            .checked_add_months(Months::new(1))
            .is_some_and(|date| self.set_reference(date).is_ok())
    }

    /// Move to the preceding month. Returns false at the start of the
    /// representable calendar.
    pub fn prev_month(&mut self) -> bool {
        self.first_of_month()
            .checked_sub_months(Months::new(1))
            .is_some_and(|date| self.set_reference(date).is_ok())
    }

    /// Show the month containing `reference`. The state is unchanged on
    /// error.
    pub fn set_reference(&mut self, reference: NaiveDate) -> DaygridResult<()> {
        self.grid = build_month_grid(reference, self.week_start)?;
        self.reference = reference;
        Ok(())
    }

    pub fn set_week_start(&mut self, week_start: WeekStart) -> DaygridResult<()> {
        self.grid = build_month_grid(self.reference, week_start)?;
        self.week_start = week_start;
        Ok(())
    }

    fn first_of_month(&self) -> NaiveDate {
        self.reference.with_day(1).unwrap_or(self.reference)
    }
}
