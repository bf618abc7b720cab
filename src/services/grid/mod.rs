//! Calendar grid model.
//!
//! [`build_grid`] lays out the complete weeks overlapping a month;
//! [`CalendarGrid::decorate`] tags each day with everything a renderer needs.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::date::ViewingMonth;
use crate::models::event::{class_name_for, count_events_on, DayProps, EventMarker};
use crate::services::label::day_label;
use crate::utils::date::{days_in_month, end_of_week, format_date_or_iso, shift_days, start_of_week};

/// Shared day-validity predicate. `true` means the day cannot be picked.
pub type DatePredicate = std::rc::Rc<dyn Fn(NaiveDate) -> bool>;

/// Tab index carried by the roving tab stop.
pub const TAB_STOP: i8 = 0;
/// Tab index of every other day cell.
pub const NOT_TAB_STOP: i8 = -1;

/// Lay out the weeks covering `month`, starting each row on `week_start`.
///
/// Leading and trailing days from adjacent months pad the first and last rows,
/// so every row has exactly seven days.
pub fn build_grid(month: ViewingMonth, week_start: Weekday) -> Vec<[NaiveDate; 7]> {
    let first = month.first_day();
    let last = first
        .with_day(days_in_month(month.year, month.month))
        .unwrap_or(first);
    let grid_start = start_of_week(first, week_start);
    let grid_end = end_of_week(last, week_start);

    let mut weeks = Vec::with_capacity(6);
    let mut cursor = grid_start;
    while cursor <= grid_end {
        let mut week = [cursor; 7];
        for (offset, slot) in week.iter_mut().enumerate() {
            *slot = shift_days(cursor, offset as i64);
        }
        weeks.push(week);
        let next = shift_days(cursor, 7);
        if next == cursor {
            break;
        }
        cursor = next;
    }
    weeks
}

/// Short weekday names in column order for `week_start`.
pub fn weekday_headers(week_start: Weekday) -> [String; 7] {
    let mut names: [String; 7] = Default::default();
    let mut day = week_start;
    for name in names.iter_mut() {
        *name = format!("{day}");
        day = day.succ();
    }
    names
}

/// One rendered day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Column within the week, 1-based
    pub column: u8,
    pub in_viewing_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_highlighted: bool,
    pub is_invalid: bool,
    pub is_focusable: bool,
    pub num_events: usize,
    pub class_name: Option<String>,
    pub aria_label: String,
}

impl DayCell {
    pub fn tab_index(&self) -> i8 {
        if self.is_focusable {
            TAB_STOP
        } else {
            NOT_TAB_STOP
        }
    }

    /// Out-of-month days render as empty placeholders.
    pub fn is_placeholder(&self) -> bool {
        !self.in_viewing_month
    }

    /// Whether a click on this cell may change the selection.
    pub fn is_clickable(&self) -> bool {
        self.in_viewing_month && !self.is_invalid
    }

    pub fn day_number(&self) -> u32 {
        self.date.day()
    }

    pub fn has_events(&self) -> bool {
        self.num_events > 0
    }
}

/// Everything besides the month itself that decorates the grid.
pub struct GridContext<'a> {
    pub today: NaiveDate,
    pub selected: Option<NaiveDate>,
    pub focusable: NaiveDate,
    pub highlighted: &'a [NaiveDate],
    pub events: &'a [EventMarker],
    pub day_props: &'a [DayProps],
    pub is_invalid_date: Option<&'a DatePredicate>,
    pub label_date_format: &'a str,
}

/// A decorated month ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub month: ViewingMonth,
    pub heading: String,
    pub weekday_headers: [String; 7],
    pub weeks: Vec<Vec<DayCell>>,
}

impl CalendarGrid {
    pub fn decorate(
        month: ViewingMonth,
        week_start: Weekday,
        heading_format: &str,
        context: &GridContext<'_>,
    ) -> Self {
        let weeks = build_grid(month, week_start)
            .into_iter()
            .map(|week| {
                week.iter()
                    .enumerate()
                    .map(|(index, &date)| Self::decorate_day(month, index, date, context))
                    .collect()
            })
            .collect();

        Self {
            month,
            heading: format_date_or_iso(month.first_day(), heading_format),
            weekday_headers: weekday_headers(week_start),
            weeks,
        }
    }

    fn decorate_day(
        month: ViewingMonth,
        index: usize,
        date: NaiveDate,
        context: &GridContext<'_>,
    ) -> DayCell {
        let is_selected = context.selected == Some(date);
        let num_events = count_events_on(context.events, date);
        DayCell {
            date,
            column: index as u8 + 1,
            in_viewing_month: month.contains(date),
            is_today: date == context.today,
            is_selected,
            is_highlighted: context.highlighted.contains(&date),
            is_invalid: context
                .is_invalid_date
                .map_or(false, |is_invalid| is_invalid(date)),
            is_focusable: date == context.focusable,
            num_events,
            class_name: class_name_for(context.day_props, date).map(str::to_string),
            aria_label: day_label(date, is_selected, num_events, context.label_date_format),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }

    /// Cells belonging to the viewed month, in calendar order.
    pub fn month_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells().filter(|cell| cell.in_viewing_month)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells().find(|cell| cell.date == date)
    }

    /// The single rendered tab stop, if the focusable day is in this month.
    pub fn tab_stop(&self) -> Option<&DayCell> {
        self.month_cells().find(|cell| cell.is_focusable)
    }
}
