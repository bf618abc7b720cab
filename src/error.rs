//! Error types for date input parsing and picker configuration.

use thiserror::Error;

/// Errors raised when a caller explicitly asks for strict parsing or
/// validation. Rendering paths never surface these; they fall back instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("unrecognised date input: {0:?}")]
    InvalidDateInput(String),
    #[error("week start must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidWeekStart(u8),
    #[error("invalid picker settings: {0}")]
    InvalidSettings(String),
}

pub type PickerResult<T> = Result<T, PickerError>;
