//! Which day and schedule the create/edit dialogs are targeting.

use crate::dated::Dated;
use crate::schedule::Schedule;

/// Coordination state for the create and edit dialogs.
///
/// The edit dialog can only be open while a schedule is selected: it is opened
/// through [`CalendarSelection::open_edit`], and clearing the selected
/// schedule closes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarSelection {
    selected_date: Option<Dated>,
    selected_schedule: Option<Schedule>,
    is_create_open: bool,
    is_edit_open: bool,
}

impl CalendarSelection {
    pub fn init() -> Self {
        Self::default()
    }

    pub fn selected_date(&self) -> Option<&Dated> {
        self.selected_date.as_ref()
    }

    pub fn selected_schedule(&self) -> Option<&Schedule> {
        self.selected_schedule.as_ref()
    }

    pub fn is_create_open(&self) -> bool {
        self.is_create_open
    }

    pub fn is_edit_open(&self) -> bool {
        self.is_edit_open
    }

    pub fn set_selected_date(&mut self, date: Option<Dated>) {
        self.selected_date = date;
    }

    pub fn set_selected_schedule(&mut self, schedule: Option<Schedule>) {
        if schedule.is_none() {
            self.is_edit_open = false;
        }
        self.selected_schedule = schedule;
    }

    pub fn set_create_open(&mut self, open: bool) {
        self.is_create_open = open;
    }

    /// Select `date` and open the create dialog for it.
    pub fn open_create(&mut self, date: Dated) {
        self.selected_date = Some(date);
        self.is_create_open = true;
    }

    /// Select `schedule` and open the edit dialog for it.
    pub fn open_edit(&mut self, schedule: Schedule) {
        self.selected_schedule = Some(schedule);
        self.is_edit_open = true;
    }

    /// Close or reopen the edit dialog. Opening is ignored without a
    /// selected schedule; returns the resulting state.
    pub fn set_edit_open(&mut self, open: bool) -> bool {
        self.is_edit_open = open && self.selected_schedule.is_some();
        self.is_edit_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_value::TimeValue;
    use chrono::NaiveDate;

    fn schedule() -> Schedule {
        Schedule {
            id: "abc".to_string(),
            date_id: "2024-05-10".to_string(),
            name: "Run".to_string(),
            time: TimeValue::parse("6", "30", "AM").unwrap(),
            invitations: vec![],
        }
    }

    #[test]
    fn test_open_create_selects_date() {
        let mut selection = CalendarSelection::init();
        let dated = Dated::from_date(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
        selection.open_create(dated.clone());
        assert!(selection.is_create_open());
        assert_eq!(selection.selected_date(), Some(&dated));

        selection.set_create_open(false);
        assert!(!selection.is_create_open());
        assert_eq!(selection.selected_date(), Some(&dated));
    }

    #[test]
    fn test_edit_requires_schedule() {
        let mut selection = CalendarSelection::init();
        assert!(!selection.set_edit_open(true));
        assert!(!selection.is_edit_open());

        selection.open_edit(schedule());
        assert!(selection.is_edit_open());

        selection.set_selected_schedule(None);
        assert!(!selection.is_edit_open());
        assert!(selection.selected_schedule().is_none());
    }

    #[test]
    fn test_reopen_edit_with_selected_schedule() {
        let mut selection = CalendarSelection::init();
        selection.open_edit(schedule());
        assert!(!selection.set_edit_open(false));
        assert!(selection.set_edit_open(true));
    }
}
