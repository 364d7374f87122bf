//! Terminal rendering for daygrid types.
//!
//! Extension traits that add colored output to daygrid-core types using
//! owo_colors.

use chrono::NaiveDate;
use daygrid_core::grid::CellKind;
use daygrid_core::notice::{Notice, NoticeLevel};
use daygrid_core::store::StoreSnapshot;
use daygrid_core::{MonthGrid, Schedule};
use owo_colors::OwoColorize;

/// Width of one grid cell, including padding.
const CELL_WIDTH: usize = 6;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Notice {
    fn render(&self) -> String {
        match self.level {
            NoticeLevel::Success => format!("{} {}", self.title.green(), self.description),
            NoticeLevel::Failure => format!("{} {}", self.title.red(), self.description),
        }
    }
}

impl Render for Schedule {
    fn render(&self) -> String {
        let mut line = format!("{:>8}  {}", self.time.to_string().dimmed(), self.name);
        if !self.invitations.is_empty() {
            let addresses: Vec<&str> = self
                .invitations
                .iter()
                .map(|i| i.address.as_str())
                .collect();
            line.push_str(&format!(" {}", format!("({})", addresses.join(", ")).dimmed()));
        }
        line
    }
}

/// Render a month grid. Days with schedules carry a count badge, today is
/// highlighted and filler days are dimmed.
pub fn render_grid(grid: &MonthGrid, today: NaiveDate, schedules: &StoreSnapshot) -> String {
    let mut lines = Vec::new();

    let width = CELL_WIDTH * grid.headings().len();
    lines.push(format!("{:^width$}", grid.title()).bold().to_string());

    let headings: String = grid
        .headings()
        .iter()
        .map(|h| format!("{:<width$}", &h[..3], width = CELL_WIDTH))
        .collect();
    lines.push(headings.bold().to_string());

    for row in grid.rows() {
        let cells: String = row
            .iter()
            .map(|(kind, dated)| {
                let count = schedules.list_for_date(&dated.id).len();
                let badge = if count > 0 {
                    format!("+{}", count.min(9))
                } else {
                    String::new()
                };
                let cell = format!("{:>2}{:<2}", dated.date, badge);
                let styled = match kind {
                    CellKind::Previous | CellKind::Next => cell.dimmed().to_string(),
                    CellKind::Current if dated.is_same_day(today) => cell.reversed().to_string(),
                    CellKind::Current if count > 0 => cell.cyan().to_string(),
                    CellKind::Current => cell,
                };
                format!("{}{}", styled, " ".repeat(CELL_WIDTH - 4))
            })
            .collect();
        lines.push(cells);
    }

    lines.join("\n")
}

/// Render every day of `grid` that has schedules, in grid order.
pub fn render_agenda(grid: &MonthGrid, schedules: &StoreSnapshot) -> String {
    let mut lines = Vec::new();

    for (_, dated) in grid.cells() {
        let list = schedules.list_for_date(&dated.id);
        if list.is_empty() {
            continue;
        }
        lines.push(dated.title().bold().to_string());
        lines.extend(list.iter().map(|s| format!("   {}", s.render())));
    }

    if lines.is_empty() {
        return "   No schedules".dimmed().to_string();
    }
    lines.join("\n")
}
