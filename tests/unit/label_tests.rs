use calendar_picker::services::label::{
    compose_day_label, day_label, CALENDAR_LABEL, CALENDAR_ROLE, NEXT_MONTH_LABEL,
    PREVIOUS_MONTH_LABEL,
};
use chrono::NaiveDate;
use test_case::test_case;

#[test_case(false, 0, "March 1, 2025" ; "unselected without events is the bare date")]
#[test_case(false, 2, "March 1, 2025. There are 2 events" ; "unselected with two events")]
#[test_case(true, 1, "March 1, 2025. Selected. There is 1 event" ; "selected with one event")]
#[test_case(true, 0, "March 1, 2025. Selected" ; "selected without events")]
fn test_label_templates(is_selected: bool, num_events: usize, expected: &str) {
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    assert_eq!(day_label(date, is_selected, num_events, "%B %-d, %Y"), expected);
}

#[test]
fn test_compose_uses_given_text_verbatim() {
    assert_eq!(compose_day_label("1 mars 2025", false, 1), "1 mars 2025. There is 1 event");
}

#[test]
fn test_container_and_navigation_labels() {
    assert_eq!(CALENDAR_LABEL, "Calendar");
    assert_eq!(CALENDAR_ROLE, "application");
    assert_eq!(PREVIOUS_MONTH_LABEL, "View previous month");
    assert_eq!(NEXT_MONTH_LABEL, "View next month");
}
