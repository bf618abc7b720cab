//! egui rendering for a single [`DatePicker`].
//!
//! Rendering only reads picker state and reports [`CalendarInteraction`]s;
//! the caller applies them after the frame's widgets are laid out, so a focus
//! request produced by a transition is honoured on the next frame.

use chrono::NaiveDate;
use egui::{Align2, FontId, Key, Modifiers, RichText, Sense, Stroke, Vec2, WidgetInfo, WidgetType};

use super::palette::DayCellPalette;
use crate::models::ui::NavigationKey;
use crate::services::date_picker::{DatePicker, PickerAction};
use crate::services::focus::FocusState;
use crate::services::grid::{DayCell, TAB_STOP};
use crate::services::label::{
    CALENDAR_LABEL, CALENDAR_ROLE, NEXT_MONTH_LABEL, PREVIOUS_MONTH_LABEL,
};

const DAY_CELL_SIZE: f32 = 28.0;

const KEY_BINDINGS: [(Key, NavigationKey); 8] = [
    (Key::ArrowLeft, NavigationKey::ArrowLeft),
    (Key::ArrowRight, NavigationKey::ArrowRight),
    (Key::ArrowUp, NavigationKey::ArrowUp),
    (Key::ArrowDown, NavigationKey::ArrowDown),
    (Key::PageUp, NavigationKey::PageUp),
    (Key::PageDown, NavigationKey::PageDown),
    (Key::Home, NavigationKey::Home),
    (Key::End, NavigationKey::End),
];

/// What the user did to a rendered calendar during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarInteraction {
    PreviousMonth,
    NextMonth,
    Select(NaiveDate),
    Key(NaiveDate, NavigationKey),
    FocusEntered,
    FocusLeft,
}

impl CalendarInteraction {
    /// Apply this interaction to a picker.
    pub fn apply(self, picker: &mut DatePicker) -> Vec<PickerAction> {
        match self {
            Self::PreviousMonth => picker.view_previous_month(),
            Self::NextMonth => picker.view_next_month(),
            Self::Select(day) => picker.select_day(day),
            Self::Key(day, key) => picker.handle_key(day, key),
            Self::FocusEntered => {
                picker.grid_focus_entered();
                Vec::new()
            }
            Self::FocusLeft => {
                picker.grid_focus_left();
                Vec::new()
            }
        }
    }
}

/// Stable widget id of the day cell for `date` inside calendar `id`.
pub(crate) fn day_id(id: egui::Id, date: NaiveDate) -> egui::Id {
    id.with(("day", date))
}

fn focus_request_id(id: egui::Id) -> egui::Id {
    id.with("pending_focus")
}

/// Remember that `day` should take keyboard focus when `id` next renders.
pub(crate) fn queue_focus(ctx: &egui::Context, id: egui::Id, day: NaiveDate) {
    ctx.data_mut(|data| data.insert_temp(focus_request_id(id), day));
    ctx.request_repaint();
}

fn take_focus_request(ui: &egui::Ui, id: egui::Id) -> Option<NaiveDate> {
    ui.data_mut(|data| {
        let pending = data.get_temp::<NaiveDate>(focus_request_id(id));
        if pending.is_some() {
            data.remove::<NaiveDate>(focus_request_id(id));
        }
        pending
    })
}

/// Draw the navigator and day grid for `picker` and collect interactions.
pub(crate) fn render_calendar(
    ui: &mut egui::Ui,
    id: egui::Id,
    picker: &DatePicker,
) -> Vec<CalendarInteraction> {
    let palette = DayCellPalette::from_visuals(ui.visuals());
    let grid = picker.grid();
    let rtl = picker.props().direction.is_rtl();
    let pending_focus = take_focus_request(ui, id);
    let mut interactions = Vec::new();

    ui.vertical(|ui| {
        ui.set_max_width(DAY_CELL_SIZE * 7.0 + 24.0);

        // Navigator: previous, heading, next
        ui.horizontal(|ui| {
            if picker.can_view_previous_month() {
                let arrow = if rtl { "▶" } else { "◀" };
                if navigation_button(ui, arrow, PREVIOUS_MONTH_LABEL).clicked() {
                    interactions.push(CalendarInteraction::PreviousMonth);
                }
            }

            ui.label(RichText::new(grid.heading.as_str()).strong())
                .on_hover_text(CALENDAR_LABEL);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if picker.can_view_next_month() {
                    let arrow = if rtl { "◀" } else { "▶" };
                    if navigation_button(ui, arrow, NEXT_MONTH_LABEL).clicked() {
                        interactions.push(CalendarInteraction::NextMonth);
                    }
                }
            });
        });
        ui.separator();

        let mut focus_inside = false;
        let grid_response = egui::Grid::new(id.with("calendar_grid"))
            .num_columns(7)
            .spacing([2.0, 2.0])
            .min_col_width(DAY_CELL_SIZE)
            .show(ui, |ui| {
                for name in &grid.weekday_headers {
                    ui.label(RichText::new(name.as_str()).small().strong());
                }
                ui.end_row();

                for week in &grid.weeks {
                    for cell in week {
                        if cell.is_placeholder() {
                            ui.allocate_space(Vec2::splat(DAY_CELL_SIZE));
                            continue;
                        }
                        let take_focus = pending_focus == Some(cell.date);
                        let response =
                            render_day(ui, day_id(id, cell.date), cell, &palette, take_focus);

                        if response.has_focus() {
                            focus_inside = true;
                            if picker.focus_state() == FocusState::Outside {
                                interactions.push(CalendarInteraction::FocusEntered);
                            }
                            lock_arrow_keys(ui, response.id);
                            for (egui_key, key) in KEY_BINDINGS {
                                if ui.input_mut(|i| i.consume_key(Modifiers::NONE, egui_key)) {
                                    interactions.push(CalendarInteraction::Key(cell.date, key));
                                }
                            }
                        }
                        if response.clicked() && cell.is_clickable() {
                            interactions.push(CalendarInteraction::Select(cell.date));
                        }
                    }
                    ui.end_row();
                }
            })
            .response;
        label_calendar_container(ui, id, grid_response.rect);

        if !focus_inside && picker.focus_state() == FocusState::Inside {
            interactions.push(CalendarInteraction::FocusLeft);
        }
    });

    interactions
}

/// Keep egui's own arrow-key focus movement from leaving the grid.
fn lock_arrow_keys(ui: &egui::Ui, id: egui::Id) {
    ui.memory_mut(|memory| {
        memory.set_focus_lock_filter(
            id,
            egui::EventFilter {
                horizontal_arrows: true,
                vertical_arrows: true,
                ..Default::default()
            },
        )
    });
}

/// Previous/next month control, announced by its full label.
fn navigation_button(ui: &mut egui::Ui, arrow: &str, label: &str) -> egui::Response {
    let response = ui.small_button(arrow).on_hover_text(label);
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, true, label));
    response
}

/// Expose the day grid as one labelled application region.
fn label_calendar_container(ui: &egui::Ui, id: egui::Id, rect: egui::Rect) {
    ui.ctx()
        .accesskit_node_builder(id.with("calendar_container"), |builder| {
            builder.set_role(container_role(CALENDAR_ROLE));
            builder.set_name(CALENDAR_LABEL);
            builder.set_bounds(egui::accesskit::Rect {
                x0: rect.min.x.into(),
                y0: rect.min.y.into(),
                x1: rect.max.x.into(),
                y1: rect.max.y.into(),
            });
        });
}

fn container_role(role: &str) -> egui::accesskit::Role {
    match role {
        "application" => egui::accesskit::Role::Application,
        _ => egui::accesskit::Role::Group,
    }
}

/// Draw one in-month day. Only the roving tab stop is keyboard focusable.
fn render_day(
    ui: &mut egui::Ui,
    id: egui::Id,
    cell: &DayCell,
    palette: &DayCellPalette,
    take_focus: bool,
) -> egui::Response {
    let (_, rect) = ui.allocate_space(Vec2::splat(DAY_CELL_SIZE));
    let sense = Sense {
        click: true,
        drag: false,
        focusable: cell.tab_index() == TAB_STOP,
    };
    let response = ui
        .interact(rect, id, sense)
        .on_hover_text(cell.aria_label.as_str());
    if take_focus {
        response.request_focus();
    }
    response.widget_info(|| {
        WidgetInfo::labeled(WidgetType::Button, cell.is_clickable(), cell.aria_label.as_str())
    });

    if !ui.is_rect_visible(rect) {
        return response;
    }
    let painter = ui.painter();
    let rounding = 4.0;

    let fill = if cell.is_selected {
        Some(palette.selected_bg)
    } else if cell.is_highlighted {
        Some(palette.highlighted_bg)
    } else if response.hovered() && cell.is_clickable() {
        Some(ui.visuals().widgets.hovered.weak_bg_fill)
    } else {
        None
    };
    if let Some(fill) = fill {
        painter.rect_filled(rect, rounding, fill);
    }

    let text_color = if cell.is_selected {
        palette.selected_text
    } else if cell.is_today {
        palette.today_text
    } else if cell.is_invalid {
        palette.weak_text
    } else {
        palette.text
    };
    let text_rect = painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        cell.day_number().to_string(),
        FontId::proportional(14.0),
        text_color,
    );
    if cell.is_invalid {
        painter.line_segment(
            [text_rect.left_center(), text_rect.right_center()],
            Stroke::new(1.0, palette.weak_text),
        );
    }

    if cell.has_events() {
        let center = rect.center_bottom() - Vec2::new(0.0, 4.0);
        painter.circle_filled(center, 2.0, palette.event_dot);
    }

    if cell.is_today {
        painter.rect_stroke(rect, rounding, Stroke::new(1.0, palette.today_border));
    }
    // Focus ring last, above the today border
    if cell.is_focusable {
        let width = if response.has_focus() { 2.0 } else { 1.0 };
        painter.rect_stroke(rect.expand(1.5), rounding, Stroke::new(width, palette.focus_ring));
    }
    response
}

/// Widget wrapper that renders a [`DatePicker`] and applies what happened.
pub struct DatePickerWidget<'a> {
    picker: &'a mut DatePicker,
    id_salt: egui::Id,
}

impl<'a> DatePickerWidget<'a> {
    pub fn new(picker: &'a mut DatePicker, id_salt: impl std::hash::Hash) -> Self {
        Self {
            picker,
            id_salt: egui::Id::new(id_salt),
        }
    }

    /// Render and return the change/month-preview notifications produced
    /// this frame. Focus requests are handled internally.
    pub fn show(self, ui: &mut egui::Ui) -> Vec<PickerAction> {
        let id = ui.make_persistent_id(self.id_salt);
        let interactions = render_calendar(ui, id, self.picker);

        let mut actions = Vec::new();
        for interaction in interactions {
            for action in interaction.apply(self.picker) {
                match action {
                    PickerAction::FocusDay(day) => queue_focus(ui.ctx(), id, day),
                    other => actions.push(other),
                }
            }
        }
        actions
    }
}
