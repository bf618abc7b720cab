//! egui rendering for a [`DateRangePicker`]: two calendars side by side.

use super::date_picker::{queue_focus, render_calendar};
use crate::services::range_picker::{DateRangePicker, RangePickerAction, RangeSide};

pub struct DateRangePickerWidget<'a> {
    picker: &'a mut DateRangePicker,
    id_salt: egui::Id,
}

impl<'a> DateRangePickerWidget<'a> {
    pub fn new(picker: &'a mut DateRangePicker, id_salt: impl std::hash::Hash) -> Self {
        Self {
            picker,
            id_salt: egui::Id::new(id_salt),
        }
    }

    /// Render both calendars and return the side-tagged change and
    /// month-preview notifications produced this frame.
    pub fn show(self, ui: &mut egui::Ui) -> Vec<RangePickerAction> {
        let base = ui.make_persistent_id(self.id_salt);
        let start_id = base.with(RangeSide::Start);
        let end_id = base.with(RangeSide::End);

        let (start_interactions, end_interactions) = ui
            .horizontal_top(|ui| {
                let start = render_calendar(ui, start_id, self.picker.start());
                ui.separator();
                let end = render_calendar(ui, end_id, self.picker.end());
                (start, end)
            })
            .inner;

        let mut actions = Vec::new();
        let sides = [
            (RangeSide::Start, start_interactions),
            (RangeSide::End, end_interactions),
        ];
        for (side, interactions) in sides {
            for interaction in interactions {
                for action in self.picker.apply(side, |picker| interaction.apply(picker)) {
                    match action {
                        RangePickerAction::FocusDay(RangeSide::Start, day) => {
                            queue_focus(ui.ctx(), start_id, day)
                        }
                        RangePickerAction::FocusDay(RangeSide::End, day) => {
                            queue_focus(ui.ctx(), end_id, day)
                        }
                        other => actions.push(other),
                    }
                }
            }
        }
        actions
    }
}
