use super::fixtures::dates::{mid_january_2025, ymd};
use super::fixtures::pickers::single_on;
use chrono::NaiveDate;
use test_case::test_case;

// Jan 15, 2025 is a Wednesday; weeks start on Sunday by default
#[test_case("ArrowLeft", ymd(2025, 1, 14) ; "arrow left")]
#[test_case("ArrowRight", ymd(2025, 1, 16) ; "arrow right")]
#[test_case("ArrowUp", ymd(2025, 1, 8) ; "arrow up")]
#[test_case("ArrowDown", ymd(2025, 1, 22) ; "arrow down")]
#[test_case("PageUp", ymd(2024, 12, 15) ; "page up")]
#[test_case("PageDown", ymd(2025, 2, 15) ; "page down")]
#[test_case("Home", ymd(2025, 1, 12) ; "home")]
#[test_case("End", ymd(2025, 1, 18) ; "end")]
fn test_key_moves_focus(key: &str, expected: NaiveDate) {
    let mut picker = single_on(mid_january_2025());
    assert!(picker.handle_key_name(ymd(2025, 1, 15), key).is_some());
    assert_eq!(picker.focusable(), expected);
    assert_eq!(picker.selected(), Some(ymd(2025, 1, 15)));
}

#[test_case("Enter" ; "enter")]
#[test_case("Tab" ; "tab")]
#[test_case(" " ; "space")]
fn test_other_keys_are_not_handled(key: &str) {
    let mut picker = single_on(mid_january_2025());
    assert!(picker.handle_key_name(ymd(2025, 1, 15), key).is_none());
    assert_eq!(picker.focusable(), ymd(2025, 1, 15));
}
