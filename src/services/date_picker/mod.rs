//! Single-date picker state machine.
//!
//! A [`DatePicker`] mirrors a host-controlled date (or shows a preview month
//! without any selection), keeps the viewed month and a roving focus across
//! day cells, and reports what happened as [`PickerAction`]s. Hosts notify it
//! of new controlled values through [`DatePicker::set_current_date`] and
//! [`DatePicker::set_preview_date`]; nothing is inferred from rendering.

use chrono::{Local, NaiveDate, NaiveDateTime, Weekday};
use std::fmt;

use crate::models::date::{resolve_date_input, DateInput, ViewingMonth};
use crate::models::event::{DayProps, EventMarker};
use crate::models::settings::PickerSettings;
use crate::models::ui::{NavigationKey, TextDirection};
use crate::services::focus::{FocusState, FocusTracker};
use crate::services::grid::{CalendarGrid, DatePredicate, GridContext};
use crate::services::navigation::next_focusable;
use crate::utils::date::{format_timezoneless, shift_month, start_of_day, with_day_keep_time};

/// Notification produced by a picker transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// A day was picked; carries `YYYY-MM-DD HH:mm:ss` with the reference
    /// time-of-day preserved.
    Changed(String),
    /// The viewed month changed; carries the new reference day at midnight.
    MonthPreviewed(String),
    /// Keyboard focus should move to this day once the grid is redrawn.
    FocusDay(NaiveDate),
}

/// Optional host callbacks. Absent callbacks are skipped.
#[derive(Default)]
pub struct PickerCallbacks {
    pub on_change: Option<Box<dyn FnMut(&str)>>,
    pub on_month_previewed: Option<Box<dyn FnMut(&str)>>,
}

impl PickerCallbacks {
    pub fn dispatch(&mut self, actions: &[PickerAction]) {
        for action in actions {
            match action {
                PickerAction::Changed(date) => {
                    if let Some(on_change) = self.on_change.as_mut() {
                        on_change(date);
                    }
                }
                PickerAction::MonthPreviewed(date) => {
                    if let Some(on_month_previewed) = self.on_month_previewed.as_mut() {
                        on_month_previewed(date);
                    }
                }
                PickerAction::FocusDay(_) => {}
            }
        }
    }
}

impl fmt::Debug for PickerCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerCallbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_month_previewed", &self.on_month_previewed.is_some())
            .finish()
    }
}

/// Construction inputs for a [`DatePicker`].
#[derive(Clone)]
pub struct DatePickerProps {
    /// Controlled selected date
    pub current_date: Option<DateInput>,
    /// Month to show without selecting anything (range mode)
    pub preview_date: Option<DateInput>,
    pub events: Vec<EventMarker>,
    pub day_props: Vec<DayProps>,
    pub highlighted_range: Vec<NaiveDate>,
    pub is_invalid_date: Option<DatePredicate>,
    pub week_start: Weekday,
    pub direction: TextDirection,
    pub label_date_format: String,
    pub heading_format: String,
    pub disable_start_navigation: bool,
    pub disable_end_navigation: bool,
}

impl Default for DatePickerProps {
    fn default() -> Self {
        Self::from_settings(&PickerSettings::default())
    }
}

impl DatePickerProps {
    pub fn from_settings(settings: &PickerSettings) -> Self {
        Self {
            current_date: None,
            preview_date: None,
            events: Vec::new(),
            day_props: Vec::new(),
            highlighted_range: Vec::new(),
            is_invalid_date: None,
            week_start: settings.week_start_day(),
            direction: settings.text_direction(),
            label_date_format: settings.label_date_format.clone(),
            heading_format: settings.heading_format.clone(),
            disable_start_navigation: false,
            disable_end_navigation: false,
        }
    }

    pub fn with_current_date(mut self, date: impl Into<DateInput>) -> Self {
        self.current_date = Some(date.into());
        self
    }

    pub fn with_preview_date(mut self, date: impl Into<DateInput>) -> Self {
        self.preview_date = Some(date.into());
        self
    }

    pub fn with_invalid_date(mut self, predicate: impl Fn(NaiveDate) -> bool + 'static) -> Self {
        self.is_invalid_date = Some(std::rc::Rc::new(predicate));
        self
    }
}

impl fmt::Debug for DatePickerProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePickerProps")
            .field("current_date", &self.current_date)
            .field("preview_date", &self.preview_date)
            .field("events", &self.events.len())
            .field("day_props", &self.day_props.len())
            .field("highlighted_range", &self.highlighted_range.len())
            .field("is_invalid_date", &self.is_invalid_date.is_some())
            .field("week_start", &self.week_start)
            .field("direction", &self.direction)
            .field("disable_start_navigation", &self.disable_start_navigation)
            .field("disable_end_navigation", &self.disable_end_navigation)
            .finish()
    }
}

#[derive(Debug)]
pub struct DatePicker {
    props: DatePickerProps,
    /// Active controlled date-time; its time-of-day is kept on change
    reference: NaiveDateTime,
    selected: Option<NaiveDate>,
    /// Reference day inside the viewed month
    viewing: NaiveDate,
    focus: FocusTracker,
}

impl DatePicker {
    pub fn new(props: DatePickerProps) -> Self {
        Self::new_at(props, Local::now().naive_local())
    }

    /// Build a picker using `now` as the fallback for absent dates.
    pub fn new_at(props: DatePickerProps, now: NaiveDateTime) -> Self {
        let reference = Self::active_reference(&props, now);
        let day = reference.date();
        Self {
            selected: Self::initial_selection(&props, day),
            viewing: day,
            focus: FocusTracker::new(day),
            reference,
            props,
        }
    }

    fn active_reference(props: &DatePickerProps, now: NaiveDateTime) -> NaiveDateTime {
        match props.preview_date.as_ref() {
            Some(preview) => preview.resolve_or(now),
            None => resolve_date_input(props.current_date.as_ref(), now),
        }
    }

    fn initial_selection(props: &DatePickerProps, day: NaiveDate) -> Option<NaiveDate> {
        if props.preview_date.is_some() {
            None
        } else {
            Some(day)
        }
    }

    /// Reset selection, view and focus to the active controlled date.
    fn resync(&mut self, now: NaiveDateTime) -> Vec<PickerAction> {
        self.reference = Self::active_reference(&self.props, now);
        let day = self.reference.date();
        self.selected = Self::initial_selection(&self.props, day);
        self.viewing = day;
        log::debug!(
            "Resynced picker to {} (selection: {:?})",
            self.reference,
            self.selected
        );

        let mut actions = Vec::new();
        self.move_focus(day, &mut actions);
        actions
    }

    /// Host notification that the controlled current date changed.
    pub fn set_current_date(&mut self, date: Option<DateInput>) -> Vec<PickerAction> {
        self.set_current_date_at(date, Local::now().naive_local())
    }

    pub fn set_current_date_at(
        &mut self,
        date: Option<DateInput>,
        now: NaiveDateTime,
    ) -> Vec<PickerAction> {
        self.props.current_date = date;
        self.resync(now)
    }

    /// Host notification that the preview date changed.
    pub fn set_preview_date(&mut self, date: Option<DateInput>) -> Vec<PickerAction> {
        self.set_preview_date_at(date, Local::now().naive_local())
    }

    pub fn set_preview_date_at(
        &mut self,
        date: Option<DateInput>,
        now: NaiveDateTime,
    ) -> Vec<PickerAction> {
        self.props.preview_date = date;
        self.resync(now)
    }

    fn move_focus(&mut self, day: NaiveDate, actions: &mut Vec<PickerAction>) {
        if let Some(target) = self.focus.set_focusable(day) {
            actions.push(PickerAction::FocusDay(target));
        }
    }

    fn is_invalid(&self, day: NaiveDate) -> bool {
        self.props
            .is_invalid_date
            .as_ref()
            .map_or(false, |is_invalid| is_invalid(day))
    }

    /// Click on a day cell. Placeholders and invalid days are inert.
    pub fn select_day(&mut self, day: NaiveDate) -> Vec<PickerAction> {
        if !self.viewing_month().contains(day) {
            log::debug!("Ignoring click on placeholder day {day}");
            return Vec::new();
        }
        if self.is_invalid(day) {
            log::debug!("Ignoring click on invalid day {day}");
            return Vec::new();
        }

        self.selected = Some(day);
        let mut actions = Vec::new();
        self.move_focus(day, &mut actions);
        actions.push(PickerAction::Changed(format_timezoneless(with_day_keep_time(
            day,
            self.reference,
        ))));
        actions
    }

    pub fn can_view_previous_month(&self) -> bool {
        !self.props.disable_start_navigation
    }

    pub fn can_view_next_month(&self) -> bool {
        !self.props.disable_end_navigation
    }

    pub fn view_previous_month(&mut self) -> Vec<PickerAction> {
        if !self.can_view_previous_month() {
            return Vec::new();
        }
        self.shift_view(-1)
    }

    pub fn view_next_month(&mut self) -> Vec<PickerAction> {
        if !self.can_view_next_month() {
            return Vec::new();
        }
        self.shift_view(1)
    }

    fn shift_view(&mut self, delta: i32) -> Vec<PickerAction> {
        self.viewing = shift_month(self.viewing, delta);
        log::debug!("Viewing month {}", self.viewing_month());

        let mut actions = vec![PickerAction::MonthPreviewed(format_timezoneless(
            start_of_day(self.viewing),
        ))];
        let focusable = shift_month(self.focus.focusable(), delta);
        self.move_focus(focusable, &mut actions);
        actions
    }

    /// Key pressed while `day` has keyboard focus.
    pub fn handle_key(&mut self, day: NaiveDate, key: NavigationKey) -> Vec<PickerAction> {
        let next = next_focusable(day, key, self.props.week_start, self.props.direction);
        let mut actions = Vec::new();
        if !self.viewing_month().contains(next) {
            self.viewing = next;
            log::debug!("Focus left the view; viewing month {}", self.viewing_month());
            actions.push(PickerAction::MonthPreviewed(format_timezoneless(start_of_day(
                next,
            ))));
        }
        self.move_focus(next, &mut actions);
        actions
    }

    /// Key given by its DOM name. `None` means the key is not a navigation key
    /// and default handling must not be prevented.
    pub fn handle_key_name(&mut self, day: NaiveDate, key: &str) -> Option<Vec<PickerAction>> {
        NavigationKey::from_key_name(key).map(|key| self.handle_key(day, key))
    }

    /// Key pressed on the current tab stop.
    pub fn handle_key_on_focusable(&mut self, key: NavigationKey) -> Vec<PickerAction> {
        self.handle_key(self.focus.focusable(), key)
    }

    pub fn grid_focus_entered(&mut self) {
        self.focus.focus_entered();
    }

    pub fn grid_focus_left(&mut self) {
        self.focus.focus_left();
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus.state()
    }

    pub fn focusable(&self) -> NaiveDate {
        self.focus.focusable()
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn viewing_date(&self) -> NaiveDate {
        self.viewing
    }

    pub fn viewing_month(&self) -> ViewingMonth {
        ViewingMonth::of(self.viewing)
    }

    pub fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    pub fn props(&self) -> &DatePickerProps {
        &self.props
    }

    pub fn set_events(&mut self, events: Vec<EventMarker>) {
        self.props.events = events;
    }

    pub fn set_highlighted_range(&mut self, highlighted_range: Vec<NaiveDate>) {
        self.props.highlighted_range = highlighted_range;
    }

    pub fn set_day_props(&mut self, day_props: Vec<DayProps>) {
        self.props.day_props = day_props;
    }

    pub fn set_invalid_date_predicate(&mut self, predicate: Option<DatePredicate>) {
        self.props.is_invalid_date = predicate;
    }

    /// Decorated grid for the viewed month.
    pub fn grid(&self) -> CalendarGrid {
        self.grid_at(Local::now().date_naive())
    }

    pub fn grid_at(&self, today: NaiveDate) -> CalendarGrid {
        let context = GridContext {
            today,
            selected: self.selected,
            focusable: self.focus.focusable(),
            highlighted: &self.props.highlighted_range,
            events: &self.props.events,
            day_props: &self.props.day_props,
            is_invalid_date: self.props.is_invalid_date.as_ref(),
            label_date_format: &self.props.label_date_format,
        };
        CalendarGrid::decorate(
            self.viewing_month(),
            self.props.week_start,
            &self.props.heading_format,
            &context,
        )
    }
}
