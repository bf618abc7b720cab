// Integration tests for picker lifecycles driven the way a host drives them

#[path = "fixtures/mod.rs"]
mod fixtures;

use calendar_picker::models::event::EventMarker;
use calendar_picker::models::settings::PickerSettings;
use calendar_picker::models::ui::NavigationKey;
use calendar_picker::services::settings::SettingsService;
use calendar_picker::{
    DatePicker, DatePickerProps, DateRangePicker, DateRangePickerProps, PickerAction,
    RangePickerAction, RangeSide, ViewingMonth,
};
use chrono::NaiveDate;
use fixtures::dates::{fixed_now, mid_january_2025, new_years_eve_2025, ymd};
use fixtures::pickers::{range_between, single_on};
use pretty_assertions::assert_eq;

#[test]
fn test_controlled_host_round_trip() {
    let mut picker = single_on(mid_january_2025());

    // User clicks a day; host stores the reported date and notifies back
    let actions = picker.select_day(ymd(2025, 1, 20));
    let changed = match &actions[..] {
        [PickerAction::Changed(date)] => date.clone(),
        other => panic!("unexpected actions {other:?}"),
    };
    assert_eq!(changed, "2025-01-20 10:20:30");

    picker.set_current_date_at(Some(changed.into()), fixed_now());
    assert_eq!(picker.selected(), Some(ymd(2025, 1, 20)));
    assert_eq!(picker.reference().time(), mid_january_2025().time());
}

#[test]
fn test_year_boundary_navigation_by_keyboard() {
    let mut picker = single_on(new_years_eve_2025());
    picker.grid_focus_entered();

    let actions = picker.handle_key_on_focusable(NavigationKey::ArrowRight);
    assert_eq!(
        actions,
        vec![
            PickerAction::MonthPreviewed("2026-01-01 00:00:00".to_string()),
            PickerAction::FocusDay(ymd(2026, 1, 1)),
        ]
    );
    assert_eq!(picker.viewing_month(), ViewingMonth { year: 2026, month: 1 });
    // Keyboard focus never touches the selection
    assert_eq!(picker.selected(), Some(ymd(2025, 12, 31)));
}

#[test]
fn test_focus_is_not_stolen_on_resync() {
    let mut picker = single_on(mid_january_2025());
    // Focus lives elsewhere (e.g. a time input) while the host changes date
    let actions = picker.set_current_date_at(Some(ymd(2025, 3, 3).into()), fixed_now());
    assert!(actions.is_empty());
    assert_eq!(picker.focusable(), ymd(2025, 3, 3));
    assert_eq!(picker.grid_at(ymd(2025, 3, 3)).tab_stop().map(|c| c.date), Some(ymd(2025, 3, 3)));
}

#[test]
fn test_range_picker_travels_together() {
    let mut range = range_between(mid_january_2025(), ymd(2025, 2, 10).and_hms_opt(0, 0, 0).unwrap());

    // End calendar forward twice
    range.apply_at(RangeSide::End, fixed_now(), DatePicker::view_next_month);
    range.apply_at(RangeSide::End, fixed_now(), DatePicker::view_next_month);
    assert_eq!(range.end().viewing_month(), ViewingMonth { year: 2025, month: 4 });
    assert_eq!(range.start().viewing_month(), ViewingMonth { year: 2025, month: 3 });

    // Start calendar back once: end takes the old start preview
    let actions = range.apply_at(RangeSide::Start, fixed_now(), DatePicker::view_previous_month);
    assert_eq!(
        actions,
        vec![RangePickerAction::MonthPreviewed(
            RangeSide::Start,
            "2025-02-10 00:00:00".to_string()
        )]
    );
    assert_eq!(range.start().viewing_month(), ViewingMonth { year: 2025, month: 2 });
    assert_eq!(range.end().viewing_month(), ViewingMonth { year: 2025, month: 3 });
}

#[test]
fn test_range_shares_events_and_predicate() {
    let props = DateRangePickerProps {
        current_date_start: Some("2025-01-15".into()),
        current_date_end: Some("2025-01-20".into()),
        events: vec![EventMarker::new(ymd(2025, 1, 17))],
        is_invalid_date: Some(std::rc::Rc::new(|day: NaiveDate| day < ymd(2025, 1, 10))),
        highlighted_range: vec![ymd(2025, 1, 16), ymd(2025, 1, 17)],
        ..Default::default()
    };
    let mut range = DateRangePicker::new_at(props, fixed_now());

    for side in [RangeSide::Start, RangeSide::End] {
        let grid = range.picker(side).grid_at(ymd(2025, 1, 1));
        let cell = grid.cell(ymd(2025, 1, 17)).unwrap();
        assert_eq!(cell.num_events, 1);
        assert!(cell.is_highlighted);
        assert!(grid.cell(ymd(2025, 1, 5)).unwrap().is_invalid);
    }

    assert!(range
        .apply_at(RangeSide::End, fixed_now(), |p| p.select_day(ymd(2025, 1, 5)))
        .is_empty());
}

#[test]
fn test_settings_drive_picker_props() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = SettingsService::new(dir.path().join("picker.toml"));
    service
        .update(&PickerSettings {
            week_start: 1,
            right_to_left: true,
            label_date_format: "%d.%m.%Y".to_string(),
            ..Default::default()
        })
        .unwrap();

    let settings = service.load_or_default();
    let props = DatePickerProps::from_settings(&settings).with_current_date(mid_january_2025());
    let mut picker = DatePicker::new_at(props, fixed_now());

    let grid = picker.grid_at(ymd(2025, 1, 1));
    assert_eq!(grid.weekday_headers[0], "Mon");
    assert_eq!(grid.cell(ymd(2025, 1, 15)).unwrap().aria_label, "15.01.2025. Selected");

    // Right-to-left mirrors horizontal arrows
    picker.handle_key_on_focusable(NavigationKey::ArrowLeft);
    assert_eq!(picker.focusable(), ymd(2025, 1, 16));
}
