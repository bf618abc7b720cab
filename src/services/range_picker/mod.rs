//! Date-range picker composed from a start and an end [`DatePicker`].
//!
//! Both children always run in preview mode. When one child previews a new
//! month, the other child's preview takes over the first child's previous
//! preview, so the two calendars travel together.

use chrono::{Local, NaiveDate, NaiveDateTime, Weekday};
use std::fmt;

use crate::models::date::{resolve_date_input, DateInput};
use crate::models::event::EventMarker;
use crate::models::settings::PickerSettings;
use crate::models::ui::{NavigationKey, TextDirection};
use crate::services::date_picker::{DatePicker, DatePickerProps, PickerAction, PickerCallbacks};
use crate::services::grid::DatePredicate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSide {
    Start,
    End,
}

/// Notification produced by a range transition, tagged with its side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangePickerAction {
    Changed(RangeSide, String),
    MonthPreviewed(RangeSide, String),
    FocusDay(RangeSide, NaiveDate),
}

#[derive(Clone)]
pub struct DateRangePickerProps {
    pub current_date_start: Option<DateInput>,
    pub current_date_end: Option<DateInput>,
    pub is_invalid_date: Option<DatePredicate>,
    pub events: Vec<EventMarker>,
    pub highlighted_range: Vec<NaiveDate>,
    pub week_start: Weekday,
    pub direction: TextDirection,
    pub label_date_format: String,
    pub heading_format: String,
}

impl Default for DateRangePickerProps {
    fn default() -> Self {
        Self::from_settings(&PickerSettings::default())
    }
}

impl DateRangePickerProps {
    pub fn from_settings(settings: &PickerSettings) -> Self {
        Self {
            current_date_start: None,
            current_date_end: None,
            is_invalid_date: None,
            events: Vec::new(),
            highlighted_range: Vec::new(),
            week_start: settings.week_start_day(),
            direction: settings.text_direction(),
            label_date_format: settings.label_date_format.clone(),
            heading_format: settings.heading_format.clone(),
        }
    }

    /// Props for one child picker; everything but the dates is shared.
    fn child_props(
        &self,
        current_date: Option<DateInput>,
        preview_date: NaiveDateTime,
        side: RangeSide,
    ) -> DatePickerProps {
        DatePickerProps {
            current_date,
            preview_date: Some(preview_date.into()),
            events: self.events.clone(),
            day_props: Vec::new(),
            highlighted_range: self.highlighted_range.clone(),
            is_invalid_date: self.is_invalid_date.clone(),
            week_start: self.week_start,
            direction: self.direction,
            label_date_format: self.label_date_format.clone(),
            heading_format: self.heading_format.clone(),
            disable_start_navigation: side == RangeSide::End,
            disable_end_navigation: side == RangeSide::Start,
        }
    }
}

impl fmt::Debug for DateRangePickerProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateRangePickerProps")
            .field("current_date_start", &self.current_date_start)
            .field("current_date_end", &self.current_date_end)
            .field("is_invalid_date", &self.is_invalid_date.is_some())
            .field("events", &self.events.len())
            .field("highlighted_range", &self.highlighted_range.len())
            .field("week_start", &self.week_start)
            .field("direction", &self.direction)
            .finish()
    }
}

/// Host callbacks for both sides.
#[derive(Debug, Default)]
pub struct RangePickerCallbacks {
    pub start: PickerCallbacks,
    pub end: PickerCallbacks,
}

impl RangePickerCallbacks {
    pub fn dispatch(&mut self, actions: &[RangePickerAction]) {
        for action in actions {
            let (side, action) = match action {
                RangePickerAction::Changed(side, date) => (*side, PickerAction::Changed(date.clone())),
                RangePickerAction::MonthPreviewed(side, date) => {
                    (*side, PickerAction::MonthPreviewed(date.clone()))
                }
                RangePickerAction::FocusDay(_, _) => continue,
            };
            match side {
                RangeSide::Start => self.start.dispatch(std::slice::from_ref(&action)),
                RangeSide::End => self.end.dispatch(std::slice::from_ref(&action)),
            }
        }
    }
}

#[derive(Debug)]
pub struct DateRangePicker {
    start: DatePicker,
    end: DatePicker,
    preview_start: NaiveDateTime,
    preview_end: NaiveDateTime,
}

impl DateRangePicker {
    pub fn new(props: DateRangePickerProps) -> Self {
        Self::new_at(props, Local::now().naive_local())
    }

    pub fn new_at(props: DateRangePickerProps, now: NaiveDateTime) -> Self {
        let preview_start = resolve_date_input(props.current_date_start.as_ref(), now);
        let preview_end = resolve_date_input(props.current_date_end.as_ref(), now);
        let start = DatePicker::new_at(
            props.child_props(props.current_date_start.clone(), preview_start, RangeSide::Start),
            now,
        );
        let end = DatePicker::new_at(
            props.child_props(props.current_date_end.clone(), preview_end, RangeSide::End),
            now,
        );
        Self {
            start,
            end,
            preview_start,
            preview_end,
        }
    }

    pub fn picker(&self, side: RangeSide) -> &DatePicker {
        match side {
            RangeSide::Start => &self.start,
            RangeSide::End => &self.end,
        }
    }

    fn picker_mut(&mut self, side: RangeSide) -> &mut DatePicker {
        match side {
            RangeSide::Start => &mut self.start,
            RangeSide::End => &mut self.end,
        }
    }

    pub fn start(&self) -> &DatePicker {
        &self.start
    }

    pub fn end(&self) -> &DatePicker {
        &self.end
    }

    pub fn preview_start(&self) -> NaiveDateTime {
        self.preview_start
    }

    pub fn preview_end(&self) -> NaiveDateTime {
        self.preview_end
    }

    /// Run a transition on one child and translate what it produced.
    ///
    /// A month preview on one side swaps previews: the previewing side takes
    /// the new date, the other side takes the previewing side's old preview.
    /// Both children are then notified and the preview is forwarded.
    pub fn apply<F>(&mut self, side: RangeSide, transition: F) -> Vec<RangePickerAction>
    where
        F: FnOnce(&mut DatePicker) -> Vec<PickerAction>,
    {
        let now = Local::now().naive_local();
        self.apply_at(side, now, transition)
    }

    pub fn apply_at<F>(
        &mut self,
        side: RangeSide,
        now: NaiveDateTime,
        transition: F,
    ) -> Vec<RangePickerAction>
    where
        F: FnOnce(&mut DatePicker) -> Vec<PickerAction>,
    {
        let produced = transition(self.picker_mut(side));
        let mut actions = Vec::with_capacity(produced.len());
        for action in produced {
            match action {
                PickerAction::Changed(date) => actions.push(RangePickerAction::Changed(side, date)),
                PickerAction::FocusDay(day) => actions.push(RangePickerAction::FocusDay(side, day)),
                PickerAction::MonthPreviewed(date) => {
                    actions.extend(self.month_previewed(side, &date, now));
                    actions.push(RangePickerAction::MonthPreviewed(side, date));
                }
            }
        }
        actions
    }

    fn month_previewed(
        &mut self,
        side: RangeSide,
        date: &str,
        now: NaiveDateTime,
    ) -> Vec<RangePickerAction> {
        let previewed = DateInput::from(date).resolve_or(now);
        match side {
            RangeSide::Start => {
                self.preview_end = self.preview_start;
                self.preview_start = previewed;
            }
            RangeSide::End => {
                self.preview_start = self.preview_end;
                self.preview_end = previewed;
            }
        }
        log::debug!(
            "Range previews now {} .. {}",
            self.preview_start,
            self.preview_end
        );

        let mut actions = Vec::new();
        let preview_start = self.preview_start;
        let preview_end = self.preview_end;
        for focus in self
            .start
            .set_preview_date_at(Some(preview_start.into()), now)
        {
            if let PickerAction::FocusDay(day) = focus {
                actions.push(RangePickerAction::FocusDay(RangeSide::Start, day));
            }
        }
        for focus in self.end.set_preview_date_at(Some(preview_end.into()), now) {
            if let PickerAction::FocusDay(day) = focus {
                actions.push(RangePickerAction::FocusDay(RangeSide::End, day));
            }
        }
        actions
    }

    pub fn select_day(&mut self, side: RangeSide, day: NaiveDate) -> Vec<RangePickerAction> {
        self.apply(side, |picker| picker.select_day(day))
    }

    pub fn view_previous_month(&mut self, side: RangeSide) -> Vec<RangePickerAction> {
        self.apply(side, DatePicker::view_previous_month)
    }

    pub fn view_next_month(&mut self, side: RangeSide) -> Vec<RangePickerAction> {
        self.apply(side, DatePicker::view_next_month)
    }

    pub fn handle_key(
        &mut self,
        side: RangeSide,
        day: NaiveDate,
        key: NavigationKey,
    ) -> Vec<RangePickerAction> {
        self.apply(side, |picker| picker.handle_key(day, key))
    }

    /// Host notification that the controlled start date changed.
    pub fn set_current_date_start(&mut self, date: Option<DateInput>) -> Vec<RangePickerAction> {
        self.apply(RangeSide::Start, |picker| picker.set_current_date(date))
    }

    /// Host notification that the controlled end date changed.
    pub fn set_current_date_end(&mut self, date: Option<DateInput>) -> Vec<RangePickerAction> {
        self.apply(RangeSide::End, |picker| picker.set_current_date(date))
    }

    pub fn set_highlighted_range(&mut self, highlighted_range: Vec<NaiveDate>) {
        self.start.set_highlighted_range(highlighted_range.clone());
        self.end.set_highlighted_range(highlighted_range);
    }

    pub fn set_events(&mut self, events: Vec<EventMarker>) {
        self.start.set_events(events.clone());
        self.end.set_events(events);
    }

    pub fn set_invalid_date_predicate(&mut self, predicate: Option<DatePredicate>) {
        self.start.set_invalid_date_predicate(predicate.clone());
        self.end.set_invalid_date_predicate(predicate);
    }

    pub fn grid_focus_entered(&mut self, side: RangeSide) {
        self.picker_mut(side).grid_focus_entered();
    }

    pub fn grid_focus_left(&mut self, side: RangeSide) {
        self.picker_mut(side).grid_focus_left();
    }
}
