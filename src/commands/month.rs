use anyhow::Result;
use chrono::{Local, NaiveDate};
use daygrid_core::daygrid_config::DaygridConfig;
use daygrid_core::grid::build_month_grid;
use daygrid_core::store::StoreSnapshot;

use crate::render::render_grid;

pub fn run(reference: NaiveDate, config: &DaygridConfig) -> Result<()> {
    let grid = build_month_grid(reference, config.week_start)?;
    let today = Local::now().date_naive();

    println!("{}", render_grid(&grid, today, &StoreSnapshot::default()));
    Ok(())
}
