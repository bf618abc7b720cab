//! Demo host for the pickers.
//!
//! Mirrors how an application drives the widgets: it owns the controlled
//! dates, feeds changes back to the pickers as explicit notifications, and
//! keeps a short log of what the pickers reported.

use chrono::{Duration, Local, Months, NaiveDate};
use std::collections::VecDeque;
use std::path::PathBuf;

use super::date_picker::DatePickerWidget;
use super::range_picker::DateRangePickerWidget;
use crate::models::event::EventMarker;
use crate::models::settings::PickerSettings;
use crate::services::date_picker::{DatePicker, DatePickerProps, PickerAction};
use crate::services::range_picker::{
    DateRangePicker, DateRangePickerProps, RangePickerAction, RangeSide,
};

const MAX_LOG_LINES: usize = 12;

pub struct DemoApp {
    range: DateRangePicker,
    single: DatePicker,
    log: VecDeque<String>,
}

impl DemoApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        settings: PickerSettings,
        events_path: Option<PathBuf>,
    ) -> Self {
        let events = events_path
            .as_deref()
            .map(|path| match EventMarker::load_list(path) {
                Ok(events) => {
                    log::info!("Loaded {} event markers from {}", events.len(), path.display());
                    events
                }
                Err(e) => {
                    log::warn!("Failed to load event markers: {:#}", e);
                    Vec::new()
                }
            })
            .unwrap_or_default();

        let now = Local::now().naive_local();
        let today = now.date();
        let next_month = now.checked_add_months(Months::new(1)).unwrap_or(now);
        let highlighted_range: Vec<NaiveDate> =
            (1..=4).map(|days| today + Duration::days(days)).collect();

        let range = DateRangePicker::new(DateRangePickerProps {
            current_date_start: Some(now.into()),
            current_date_end: Some(next_month.into()),
            events: events.clone(),
            highlighted_range,
            ..DateRangePickerProps::from_settings(&settings)
        });

        let single = DatePicker::new(DatePickerProps {
            current_date: Some(now.into()),
            events,
            ..DatePickerProps::from_settings(&settings)
        });

        Self {
            range,
            single,
            log: VecDeque::with_capacity(MAX_LOG_LINES),
        }
    }

    fn push_log(&mut self, line: String) {
        log::info!("{line}");
        if self.log.len() == MAX_LOG_LINES {
            self.log.pop_front();
        }
        self.log.push_back(line);
    }

    fn handle_range_actions(&mut self, actions: Vec<RangePickerAction>) {
        for action in actions {
            match action {
                RangePickerAction::Changed(side, date) => {
                    self.push_log(format!("onChange{side:?}: {date}"));
                    // Controlled host: feed the new date straight back
                    match side {
                        RangeSide::Start => {
                            self.range.set_current_date_start(Some(date.into()));
                        }
                        RangeSide::End => {
                            self.range.set_current_date_end(Some(date.into()));
                        }
                    }
                }
                RangePickerAction::MonthPreviewed(side, date) => {
                    self.push_log(format!("onMonthPreviewed{side:?}: {date}"));
                }
                RangePickerAction::FocusDay(_, _) => {}
            }
        }
    }

    fn handle_single_actions(&mut self, actions: Vec<PickerAction>) {
        for action in actions {
            match action {
                PickerAction::Changed(date) => {
                    self.push_log(format!("onChange: {date}"));
                    self.single.set_current_date(Some(date.into()));
                }
                PickerAction::MonthPreviewed(date) => {
                    self.push_log(format!("onMonthPreviewed: {date}"));
                }
                PickerAction::FocusDay(_) => {}
            }
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("DateRangePicker");
            let range_actions = DateRangePickerWidget::new(&mut self.range, "range_picker").show(ui);
            ui.add_space(12.0);

            ui.heading("DatePicker");
            let single_actions = DatePickerWidget::new(&mut self.single, "single_picker").show(ui);
            ui.add_space(12.0);

            self.handle_range_actions(range_actions);
            self.handle_single_actions(single_actions);

            ui.separator();
            ui.label(egui::RichText::new("Notifications").strong());
            for line in &self.log {
                ui.monospace(line.as_str());
            }
        });
    }
}
