use super::fixtures::pickers::single_on;
use calendar_picker::models::ui::NavigationKey;
use chrono::{Days, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (1950i32..2150, 1u32..=366).prop_map(|(year, ordinal)| {
        let day = NaiveDate::from_yo_opt(year, ordinal)
            .or_else(|| NaiveDate::from_yo_opt(year, 365))
            .unwrap();
        day.and_hms_opt(9, 30, 0).unwrap()
    })
}

fn key_strategy() -> impl Strategy<Value = NavigationKey> {
    prop::sample::select(NavigationKey::ALL.to_vec())
}

proptest! {
    #[test]
    fn arrow_down_presses_add_whole_weeks(start in date_strategy(), presses in 0u64..60) {
        let mut picker = single_on(start);
        for _ in 0..presses {
            picker.handle_key_on_focusable(NavigationKey::ArrowDown);
        }
        let expected = start.date().checked_add_days(Days::new(7 * presses)).unwrap();
        prop_assert_eq!(picker.focusable(), expected);
    }

    #[test]
    fn right_then_left_returns_home(start in date_strategy()) {
        let mut picker = single_on(start);
        picker.handle_key_on_focusable(NavigationKey::ArrowRight);
        picker.handle_key_on_focusable(NavigationKey::ArrowLeft);
        prop_assert_eq!(picker.focusable(), start.date());
    }

    #[test]
    fn focus_stays_in_viewed_month(
        start in date_strategy(),
        keys in prop::collection::vec(key_strategy(), 1..40),
    ) {
        let mut picker = single_on(start);
        for key in keys {
            picker.handle_key_on_focusable(key);
            prop_assert!(picker.viewing_month().contains(picker.focusable()));
            // Keyboard movement never changes the selection
            prop_assert_eq!(picker.selected(), Some(start.date()));
        }
    }

    #[test]
    fn selecting_a_day_moves_the_tab_stop(start in date_strategy(), offset in 0u32..28) {
        let mut picker = single_on(start);
        let viewing = picker.viewing_month();
        let day = viewing.first_day() + Days::new(u64::from(offset));

        let actions = picker.select_day(day);
        prop_assert!(!actions.is_empty());
        prop_assert_eq!(picker.selected(), Some(day));
        prop_assert_eq!(picker.focusable(), day);
        prop_assert_eq!(picker.grid_at(day).tab_stop().map(|cell| cell.date), Some(day));
    }
}
