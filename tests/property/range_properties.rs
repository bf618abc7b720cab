use super::fixtures::dates::fixed_now;
use super::fixtures::pickers::range_between;
use calendar_picker::{DatePicker, PickerAction, RangeSide, ViewingMonth};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (1950i32..2150, 1u32..=12, 1u32..=28).prop_map(|(year, month, day)| {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    })
}

fn side_strategy() -> impl Strategy<Value = RangeSide> {
    prop_oneof![Just(RangeSide::Start), Just(RangeSide::End)]
}

proptest! {
    #[test]
    fn previewing_one_side_hands_old_preview_to_the_other(
        start in date_strategy(),
        end in date_strategy(),
        side in side_strategy(),
        forward in any::<bool>(),
    ) {
        let mut range = range_between(start, end);
        let (old_start, old_end) = (range.preview_start(), range.preview_end());
        let transition: fn(&mut DatePicker) -> Vec<PickerAction> = if forward {
            DatePicker::view_next_month
        } else {
            DatePicker::view_previous_month
        };

        // The start calendar cannot page forward, nor the end calendar back
        let blocked = matches!(
            (side, forward),
            (RangeSide::Start, true) | (RangeSide::End, false)
        );
        let actions = range.apply_at(side, fixed_now(), transition);
        if blocked {
            prop_assert!(actions.is_empty());
            prop_assert_eq!(range.preview_start(), old_start);
            prop_assert_eq!(range.preview_end(), old_end);
            return Ok(());
        }

        match side {
            RangeSide::Start => {
                prop_assert_eq!(range.preview_end(), old_start);
            }
            RangeSide::End => {
                prop_assert_eq!(range.preview_start(), old_end);
            }
        }
        let start_month = range.preview_start().date();
        let end_month = range.preview_end().date();
        prop_assert_eq!(
            range.start().viewing_month(),
            ViewingMonth { year: start_month.year(), month: start_month.month() }
        );
        prop_assert_eq!(
            range.end().viewing_month(),
            ViewingMonth { year: end_month.year(), month: end_month.month() }
        );
        // Previews clear both selections
        prop_assert_eq!(range.start().selected(), None);
        prop_assert_eq!(range.end().selected(), None);
    }
}
