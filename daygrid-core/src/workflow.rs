//! Create, edit and delete flows tying the dialogs, the selection and the
//! store together.
//!
//! Each flow closes its dialog and returns the [`Notice`] to show. A missing
//! selection is a user-visible failure, reported as a failure notice rather
//! than an error. Store errors (`NotFound`, `IdCollision`) are returned to
//! the caller.

use crate::error::DaygridResult;
use crate::notice::Notice;
use crate::schedule::ScheduleDraft;
use crate::selection::CalendarSelection;
use crate::store::{IdGenerator, ScheduleStore};

/// Add `draft` to the selected day.
pub fn submit_create<G: IdGenerator>(
    draft: ScheduleDraft,
    selection: &mut CalendarSelection,
    store: &mut ScheduleStore<G>,
) -> DaygridResult<Notice> {
    selection.set_create_open(false);

    let Some(date_id) = selection.selected_date().map(|d| d.id.clone()) else {
        tracing::warn!(name = %draft.name, "no date selected, schedule not added");
        return Ok(Notice::failure("Failed adding schedule:", draft.summary()));
    };

    let summary = draft.summary();
    store.add(draft.for_date(date_id))?;
    Ok(Notice::success("Added to your schedule:", summary))
}

/// Replace the selected schedule's fields with `draft`.
pub fn submit_edit<G: IdGenerator>(
    draft: ScheduleDraft,
    selection: &mut CalendarSelection,
    store: &mut ScheduleStore<G>,
) -> DaygridResult<Notice> {
    let Some(id) = selection.selected_schedule().map(|s| s.id.clone()) else {
        selection.set_edit_open(false);
        tracing::warn!(name = %draft.name, "no schedule selected, nothing to update");
        return Ok(Notice::failure("Failed updating schedule:", draft.summary()));
    };

    let updated = store.update(&id, draft.into_patch())?;
    selection.set_selected_schedule(None);
    Ok(Notice::success("Updated schedule:", updated.summary()))
}

/// Delete the selected schedule.
pub fn delete_selected<G: IdGenerator>(
    selection: &mut CalendarSelection,
    store: &mut ScheduleStore<G>,
) -> DaygridResult<Notice> {
    let Some(id) = selection.selected_schedule().map(|s| s.id.clone()) else {
        selection.set_edit_open(false);
        return Ok(Notice::failure(
            "Failed removing schedule:",
            "no schedule selected",
        ));
    };

    let removed = store.remove(&id)?;
    selection.set_selected_schedule(None);
    Ok(Notice::success("Removed from your schedule:", removed.summary()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dated::Dated;
    use crate::error::DaygridError;
    use crate::time_value::TimeValue;
    use chrono::NaiveDate;

    fn draft(name: &str, h: &str, m: &str, mer: &str) -> ScheduleDraft {
        ScheduleDraft {
            name: name.to_string(),
            time: TimeValue::parse(h, m, mer).unwrap(),
            invitations: vec![],
        }
    }

    fn may_tenth() -> Dated {
        Dated::from_date(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap())
    }

    #[test]
    fn test_create_adds_to_selected_day() {
        let mut selection = CalendarSelection::init();
        let mut store = ScheduleStore::init();
        selection.open_create(may_tenth());

        let notice = submit_create(draft("Run", "6", "30", "AM"), &mut selection, &mut store).unwrap();

        assert_eq!(notice, Notice::success("Added to your schedule:", "Run at 6:30 AM"));
        assert!(!selection.is_create_open());
        assert_eq!(store.list_for_date("2024-05-10").len(), 1);
    }

    #[test]
    fn test_create_without_date_fails_and_closes() {
        let mut selection = CalendarSelection::init();
        selection.set_create_open(true);
        let mut store = ScheduleStore::init();

        let notice = submit_create(draft("Run", "3", "05", "PM"), &mut selection, &mut store).unwrap();

        assert!(notice.is_failure());
        assert_eq!(notice.title, "Failed adding schedule:");
        assert_eq!(notice.description, "Run at 3:05 PM");
        assert!(!selection.is_create_open());
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_updates_selected_schedule() {
        let mut selection = CalendarSelection::init();
        let mut store = ScheduleStore::init();
        selection.open_create(may_tenth());
        submit_create(draft("Run", "6", "30", "AM"), &mut selection, &mut store).unwrap();

        let run = store.list_for_date("2024-05-10")[0].clone();
        selection.open_edit(run.clone());
        let notice = submit_edit(draft("Long run", "7", "00", "AM"), &mut selection, &mut store).unwrap();

        assert_eq!(notice.description, "Long run at 7:00 AM");
        assert!(!selection.is_edit_open());
        let stored = store.get(&run.id).unwrap();
        assert_eq!(stored.name, "Long run");
        assert_eq!(stored.date_id, run.date_id);
    }

    #[test]
    fn test_edit_of_vanished_schedule_is_not_found() {
        let mut selection = CalendarSelection::init();
        let mut store = ScheduleStore::init();
        selection.open_create(may_tenth());
        submit_create(draft("Run", "6", "30", "AM"), &mut selection, &mut store).unwrap();

        let run = store.list_for_date("2024-05-10")[0].clone();
        store.remove(&run.id).unwrap();
        selection.open_edit(run);

        let result = submit_edit(draft("Run", "6", "30", "AM"), &mut selection, &mut store);
        assert!(matches!(result, Err(DaygridError::NotFound(_))));
    }

    #[test]
    fn test_delete_selected() {
        let mut selection = CalendarSelection::init();
        let mut store = ScheduleStore::init();
        assert!(delete_selected(&mut selection, &mut store).unwrap().is_failure());

        selection.open_create(may_tenth());
        submit_create(draft("Lunch", "12", "00", "PM"), &mut selection, &mut store).unwrap();
        let lunch = store.list_for_date("2024-05-10")[0].clone();
        selection.open_edit(lunch);

        let notice = delete_selected(&mut selection, &mut store).unwrap();
        assert_eq!(notice.title, "Removed from your schedule:");
        assert!(store.is_empty());
        assert!(selection.selected_schedule().is_none());
    }
}
