//! Replay a TOML file of schedule submissions through the create dialog flow.
//!
//! ```toml
//! [[schedule]]
//! day = "2024-05-10"
//! name = "Run"
//! hour = "6"
//! minute = "30"
//! meridiem = "AM"
//! invitations = ["friend@example.com"]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use daygrid_core::date_grid::DateGridState;
use daygrid_core::daygrid_config::DaygridConfig;
use daygrid_core::forms::{ScheduleForm, ValidationErrors};
use daygrid_core::notice::Notice;
use daygrid_core::selection::CalendarSelection;
use daygrid_core::workflow::submit_create;
use daygrid_core::{Dated, ScheduleStore};
use owo_colors::OwoColorize;
use serde::Deserialize;

use super::reference_date;
use crate::render::{render_agenda, render_grid, Render};

fn default_meridiem() -> String {
    "AM".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Plan {
    #[serde(default, rename = "schedule")]
    pub schedules: Vec<PlannedSchedule>,
}

/// One create-dialog submission. A missing `day` submits with no date
/// selected.
#[derive(Debug, Deserialize)]
pub struct PlannedSchedule {
    pub day: Option<String>,
    pub name: String,
    pub hour: Option<String>,
    pub minute: Option<String>,
    #[serde(default = "default_meridiem")]
    pub meridiem: String,
    #[serde(default)]
    pub invitations: Vec<String>,
}

impl PlannedSchedule {
    fn to_form(&self) -> ScheduleForm {
        ScheduleForm {
            name: self.name.clone(),
            hour: self.hour.clone(),
            minute: self.minute.clone(),
            meridiem: self.meridiem.clone(),
            invitations: self.invitations.clone(),
            invite: String::new(),
        }
    }
}

impl Plan {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read plan file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Could not parse plan file {}", path.display()))
    }

    /// First day named in the plan, if any.
    fn first_day(&self) -> Result<Option<NaiveDate>> {
        self.schedules
            .iter()
            .find_map(|s| s.day.as_deref())
            .map(|d| reference_date(Some(d)))
            .transpose()
    }
}

pub struct PlanOutcome {
    pub store: ScheduleStore,
    pub notices: Vec<Notice>,
    /// Submissions rejected by validation, by name.
    pub rejected: Vec<(String, ValidationErrors)>,
}

pub fn apply(plan: &Plan, config: &DaygridConfig) -> Result<PlanOutcome> {
    let mut selection = CalendarSelection::init();
    let mut store = ScheduleStore::init();
    let mut notices = Vec::new();
    let mut rejected = Vec::new();

    for entry in &plan.schedules {
        match entry.day.as_deref() {
            Some(day) => selection.open_create(Dated::from_date(reference_date(Some(day))?)),
            None => {
                selection.set_selected_date(None);
                selection.set_create_open(true);
            }
        }

        match entry.to_form().validate(config.minute_step) {
            Ok(draft) => notices.push(submit_create(draft, &mut selection, &mut store)?),
            Err(errors) => {
                tracing::debug!(name = %entry.name, %errors, "rejected submission");
                selection.set_create_open(false);
                rejected.push((entry.name.clone(), errors));
            }
        }
    }

    Ok(PlanOutcome {
        store,
        notices,
        rejected,
    })
}

pub fn run(path: &Path, reference: Option<NaiveDate>, config: &DaygridConfig) -> Result<()> {
    let plan = Plan::load(path)?;
    let outcome = apply(&plan, config)?;

    for notice in &outcome.notices {
        println!("{}", notice.render());
    }
    for (name, errors) in &outcome.rejected {
        println!("{} {}", "Rejected:".yellow(), name);
        for error in &errors.0 {
            println!("   {}", error.to_string().dimmed());
        }
    }

    let reference = match reference {
        Some(date) => date,
        None => plan
            .first_day()?
            .unwrap_or_else(|| Local::now().date_naive()),
    };
    let state = DateGridState::init(reference, config.week_start)?;
    let snapshot = outcome.store.snapshot();

    println!();
    println!(
        "{}",
        render_grid(state.grid(), Local::now().date_naive(), &snapshot)
    );
    println!();
    println!("{}", render_agenda(state.grid(), &snapshot));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PLAN: &str = r#"
[[schedule]]
day = "2024-05-10"
name = "Lunch"
hour = "12"
minute = "00"
meridiem = "PM"

[[schedule]]
day = "2024-05-10"
name = "Run"
hour = "6"
minute = "30"
invitations = ["coach@example.com"]

[[schedule]]
name = "Nowhere"
hour = "1"
minute = "00"

[[schedule]]
day = "2024-05-11"
name = "No"
hour = "1"
minute = "00"
"#;

    fn write_plan(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn plan_replays_submissions() {
        let file = write_plan(PLAN);
        let plan = Plan::load(file.path()).unwrap();
        let outcome = apply(&plan, &DaygridConfig::default()).unwrap();

        let names: Vec<String> = outcome
            .store
            .list_for_date("2024-05-10")
            .iter()
            .map(|s| s.name.clone())
            .collect();
        assert_eq!(names, vec!["Run", "Lunch"]);

        assert_eq!(outcome.notices.len(), 3);
        assert!(outcome.notices[2].is_failure());
        assert_eq!(outcome.notices[2].description, "Nowhere at 1:00 AM");

        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].0, "No");
    }

    #[test]
    fn plan_first_day() {
        let file = write_plan(PLAN);
        let plan = Plan::load(file.path()).unwrap();
        assert_eq!(
            plan.first_day().unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 10)
        );
    }

    #[test]
    fn unparseable_plan_is_an_error() {
        let file = write_plan("[[schedule]]\nday = 3\n");
        assert!(Plan::load(file.path()).is_err());
    }
}
