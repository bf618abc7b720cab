//! Roving focus tracking for a calendar grid.
//!
//! The grid only moves keyboard focus to a newly focusable day when focus is
//! already inside it, so a resync triggered by some other control (a time
//! input, a sibling picker) never steals focus from that control.

use chrono::NaiveDate;

/// Where keyboard focus currently sits relative to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Outside,
    Inside,
}

/// Transition table:
///
/// | State   | Event                 | Next    | Effect               |
/// |---------|-----------------------|---------|----------------------|
/// | Outside | grid focus            | Inside  | none                 |
/// | Inside  | grid blur             | Outside | none                 |
/// | Outside | focusable day changed | Outside | none                 |
/// | Inside  | focusable day changed | Inside  | focus the new day    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTracker {
    state: FocusState,
    focusable: NaiveDate,
}

impl FocusTracker {
    pub fn new(focusable: NaiveDate) -> Self {
        Self {
            state: FocusState::Outside,
            focusable,
        }
    }

    pub fn state(&self) -> FocusState {
        self.state
    }

    pub fn is_focus_inside(&self) -> bool {
        self.state == FocusState::Inside
    }

    pub fn focusable(&self) -> NaiveDate {
        self.focusable
    }

    pub fn focus_entered(&mut self) {
        if self.state == FocusState::Outside {
            log::debug!("Focus entered calendar grid");
        }
        self.state = FocusState::Inside;
    }

    pub fn focus_left(&mut self) {
        if self.state == FocusState::Inside {
            log::debug!("Focus left calendar grid");
        }
        self.state = FocusState::Outside;
    }

    /// Move the tab stop. Returns the day that should receive keyboard focus,
    /// which is only the case when the stop actually moved while focus was
    /// inside the grid.
    pub fn set_focusable(&mut self, day: NaiveDate) -> Option<NaiveDate> {
        if day == self.focusable {
            return None;
        }
        self.focusable = day;
        match self.state {
            FocusState::Inside => Some(day),
            FocusState::Outside => None,
        }
    }
}
