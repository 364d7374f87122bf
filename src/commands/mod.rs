pub mod month;
pub mod plan;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

/// Parse YYYY-MM-DD, or fall back to today's local date.
pub fn reference_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_date_parses_iso() {
        let date = reference_date(Some("2024-05-10")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
    }

    #[test]
    fn reference_date_rejects_other_formats() {
        assert!(reference_date(Some("10/05/2024")).is_err());
    }
}
