//! End-to-end flows across grid, selection, forms and store.

use chrono::NaiveDate;
use daygrid_core::date_grid::DateGridState;
use daygrid_core::forms::ScheduleForm;
use daygrid_core::selection::CalendarSelection;
use daygrid_core::workflow::{submit_create, submit_edit};
use daygrid_core::{
    build_month_grid, NewSchedule, ScheduleStore, SchedulePatch, TimeValue, WeekStart,
};
use pretty_assertions::assert_eq;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn run_then_lunch_listed_in_time_order() {
    let mut store = ScheduleStore::init();
    store
        .add(NewSchedule {
            name: "Lunch".to_string(),
            time: TimeValue::parse("12", "00", "PM").unwrap(),
            invitations: vec![],
            date_id: "2024-05-10".to_string(),
        })
        .unwrap();
    store
        .add(NewSchedule {
            name: "Run".to_string(),
            time: TimeValue::parse("6", "30", "AM").unwrap(),
            invitations: vec![],
            date_id: "2024-05-10".to_string(),
        })
        .unwrap();

    let names: Vec<String> = store
        .list_for_date("2024-05-10")
        .iter()
        .map(|s| s.name.clone())
        .collect();
    assert_eq!(names, vec!["Run", "Lunch"]);
}

#[test]
fn clicking_a_filler_day_schedules_on_the_adjacent_month() {
    let grid = build_month_grid(ymd(2025, 4, 15), WeekStart::Sunday).unwrap();
    let filler = grid.next_dates[0].clone();
    assert_eq!(filler.id, "2025-05-01");

    let mut selection = CalendarSelection::init();
    let mut store = ScheduleStore::init();
    selection.open_create(filler);

    let mut form = ScheduleForm::new();
    form.name = "Standup".to_string();
    form.hour = Some("9".to_string());
    form.minute = Some("15".to_string());
    form.invite = "team@example.com".to_string();
    form.add_invitation().unwrap();

    let draft = form.validate(5).unwrap();
    let notice = submit_create(draft, &mut selection, &mut store).unwrap();
    assert_eq!(notice.description, "Standup at 9:15 AM");

    // The schedule is keyed by date, so it shows up once May is displayed.
    let mut state = DateGridState::init(ymd(2025, 4, 15), WeekStart::Sunday).unwrap();
    state.next_month();
    let first_of_may = &state.grid().dateds[0];
    let list = store.list_for_date(&first_of_may.id);
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].invitations[0].address, "team@example.com");
}

#[test]
fn edit_dialog_round_trip_keeps_schedule_unchanged() {
    let mut selection = CalendarSelection::init();
    let mut store = ScheduleStore::init();
    let added = store
        .add(NewSchedule {
            name: "Dentist".to_string(),
            time: TimeValue::parse("3", "05", "PM").unwrap(),
            invitations: vec![],
            date_id: "2024-02-29".to_string(),
        })
        .unwrap();

    selection.open_edit(added.clone());
    let draft = ScheduleForm::from_schedule(&added).validate(5).unwrap();
    submit_edit(draft, &mut selection, &mut store).unwrap();

    assert_eq!(store.list_for_date("2024-02-29").to_vec(), vec![added.clone()]);

    let renamed = store
        .update(
            &added.id,
            SchedulePatch {
                name: Some("Dentist (moved)".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(renamed.time, added.time);
    assert_eq!(renamed.name, "Dentist (moved)");
}

#[test]
fn schedules_outlive_grid_rebuilds() {
    let mut state = DateGridState::init(ymd(2024, 5, 10), WeekStart::Sunday).unwrap();
    let mut store = ScheduleStore::init();
    let day = state.grid().find("2024-05-10").cloned().unwrap();
    store
        .add(NewSchedule {
            name: "Run".to_string(),
            time: TimeValue::parse("6", "30", "AM").unwrap(),
            invitations: vec![],
            date_id: day.id.clone(),
        })
        .unwrap();

    state.next_month();
    assert!(state.grid().find(&day.id).is_none());
    assert_eq!(store.count_for_date(&day.id), 1);

    state.prev_month();
    let again = state.grid().find("2024-05-10").unwrap();
    assert_eq!(store.list_for_date(&again.id)[0].name, "Run");
}
