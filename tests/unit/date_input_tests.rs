use super::fixtures::dates::{fixed_now, leap_day_2024, ymd};
use calendar_picker::{DateInput, PickerError};
use test_case::test_case;

#[test_case("2024-02-29 12:00:00" ; "timezoneless output format")]
#[test_case("2024-02-29T12:00:00" ; "iso without fraction")]
#[test_case("2024-02-29T12:00:00.000" ; "iso with fraction")]
#[test_case("2024-02-29 12:00" ; "minutes only")]
fn test_text_inputs(text: &str) {
    assert_eq!(DateInput::from(text).parse().unwrap(), leap_day_2024());
}

#[test]
fn test_typed_inputs() {
    assert_eq!(DateInput::from(leap_day_2024()).parse().unwrap(), leap_day_2024());
    assert_eq!(
        DateInput::from(ymd(2024, 2, 29)).parse().unwrap(),
        ymd(2024, 2, 29).and_hms_opt(0, 0, 0).unwrap()
    );
}

#[test]
fn test_malformed_input_is_typed_error_and_falls_back() {
    let input = DateInput::from("2024-13-45");
    assert!(matches!(input.parse(), Err(PickerError::InvalidDateInput(_))));
    assert_eq!(input.resolve_or(fixed_now()), fixed_now());
}

#[test]
fn test_inputs_deserialize_untagged() {
    let inputs: Vec<DateInput> = serde_json::from_str(r#"["2024-02-29", "tomorrow"]"#).unwrap();
    assert_eq!(inputs[0], DateInput::Date(ymd(2024, 2, 29)));
    assert_eq!(inputs[1], DateInput::Text("tomorrow".to_string()));
}
