use calendar_picker::services::grid::build_grid;
use calendar_picker::ViewingMonth;
use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

fn weekday_strategy() -> impl Strategy<Value = Weekday> {
    prop::sample::select(vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ])
}

proptest! {
    #[test]
    fn rows_are_complete_weeks(
        year in 1900i32..2200,
        month in 1u32..=12,
        week_start in weekday_strategy(),
    ) {
        let weeks = build_grid(ViewingMonth { year, month }, week_start);
        prop_assert!((4..=6).contains(&weeks.len()));
        for week in &weeks {
            prop_assert_eq!(week[0].weekday(), week_start);
            for pair in week.windows(2) {
                prop_assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
            }
        }
    }

    #[test]
    fn every_month_day_appears_exactly_once(
        year in 1900i32..2200,
        month in 1u32..=12,
        week_start in weekday_strategy(),
    ) {
        let viewing = ViewingMonth { year, month };
        let weeks = build_grid(viewing, week_start);
        let in_month: Vec<NaiveDate> = weeks
            .iter()
            .flatten()
            .copied()
            .filter(|day| viewing.contains(*day))
            .collect();

        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let expected: Vec<NaiveDate> = first
            .iter_days()
            .take_while(|day| day.month() == month)
            .collect();
        prop_assert_eq!(in_month, expected);
    }
}
