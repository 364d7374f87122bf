//! Month grid generation.
//!
//! A grid is the days of one month plus the filler days from the adjacent
//! months needed to pad the first and last rows to seven columns.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::WEEKDAYS;
use crate::dated::Dated;
use crate::error::{DaygridError, DaygridResult};

/// Number of columns in every grid row.
pub const GRID_COLUMNS: usize = 7;

/// First column of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }

    /// Zero-based column a date falls in.
    pub fn column_of(&self, date: NaiveDate) -> usize {
        let day = date.weekday().num_days_from_sunday();
        let start = self.weekday().num_days_from_sunday();
        ((day + 7 - start) % 7) as usize
    }

    /// Weekday names in column order.
    pub fn headings(&self) -> [&'static str; GRID_COLUMNS] {
        let start = self.weekday().num_days_from_sunday() as usize;
        std::array::from_fn(|col| WEEKDAYS[(start + col) % GRID_COLUMNS])
    }
}

impl FromStr for WeekStart {
    type Err = DaygridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(DaygridError::Config(format!(
                "Unknown week start '{}'. Expected sunday or monday",
                other
            ))),
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WeekStart::Sunday => write!(f, "sunday"),
            WeekStart::Monday => write!(f, "monday"),
        }
    }
}

/// Which part of the grid a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Previous,
    Current,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// Trailing days of the previous month, ascending.
    pub prev_dates: Vec<Dated>,
    /// Every day of the reference month, ascending.
    pub dateds: Vec<Dated>,
    /// Leading days of the next month, ascending.
    pub next_dates: Vec<Dated>,
    pub week_start: WeekStart,
}

impl MonthGrid {
    /// Total number of cells, always a multiple of [`GRID_COLUMNS`].
    pub fn len(&self) -> usize {
        self.prev_dates.len() + self.dateds.len() + self.next_dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All cells in display order.
    pub fn cells(&self) -> impl Iterator<Item = (CellKind, &Dated)> {
        self.prev_dates
            .iter()
            .map(|d| (CellKind::Previous, d))
            .chain(self.dateds.iter().map(|d| (CellKind::Current, d)))
            .chain(self.next_dates.iter().map(|d| (CellKind::Next, d)))
    }

    pub fn rows(&self) -> Vec<Vec<(CellKind, &Dated)>> {
        let cells: Vec<_> = self.cells().collect();
        cells.chunks(GRID_COLUMNS).map(|row| row.to_vec()).collect()
    }

    pub fn headings(&self) -> [&'static str; GRID_COLUMNS] {
        self.week_start.headings()
    }

    /// Month heading, e.g. "May 2024".
    pub fn title(&self) -> String {
        match self.dateds.first() {
            Some(first) => format!("{} {}", first.month_str, first.year),
            None => String::new(),
        }
    }

    /// Look up any cell (current or filler) by its id.
    pub fn find(&self, id: &str) -> Option<&Dated> {
        self.cells().map(|(_, d)| d).find(|d| d.id == id)
    }
}

/// Every day of the month starting at `first`, ascending.
fn month_days(first: NaiveDate) -> Vec<NaiveDate> {
    (1..=31).filter_map(|day| first.with_day(day)).collect()
}

/// Build the grid for the month containing `reference`.
///
/// Fails with [`DaygridError::OutOfRange`] when a filler day would fall
/// outside the representable calendar, i.e. for the first and last months
/// chrono can express.
pub fn build_month_grid(
    reference: NaiveDate,
    week_start: WeekStart,
) -> DaygridResult<MonthGrid> {
    let first = reference.with_day(1).unwrap_or(reference);
    let month_days = month_days(first);
    let last = month_days.last().copied().unwrap_or(first);

    let lead = week_start.column_of(first) as u64;
    let trail = (GRID_COLUMNS - 1 - week_start.column_of(last)) as u64;

    let out_of_range = || {
        DaygridError::OutOfRange(format!(
            "filler days for {} fall outside the calendar",
            first.format("%Y-%m")
        ))
    };
    let prev_dates = (1..=lead)
        .rev()
        .map(|n| first.checked_sub_days(Days::new(n)).map(Dated::from_date))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(out_of_range)?;
    let next_dates = (1..=trail)
        .map(|n| last.checked_add_days(Days::new(n)).map(Dated::from_date))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(out_of_range)?;

    tracing::debug!(
        month = %first.format("%Y-%m"),
        lead,
        trail,
        "built month grid"
    );

    Ok(MonthGrid {
        prev_dates,
        dateds: month_days.into_iter().map(Dated::from_date).collect(),
        next_dates,
        week_start,
    })
}
