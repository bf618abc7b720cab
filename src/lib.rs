// Calendar Picker Library
// Headless date and date-range pickers plus their egui widgets

pub mod error;
pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;

pub use error::{PickerError, PickerResult};
pub use models::date::{DateInput, ViewingMonth};
pub use services::date_picker::{DatePicker, DatePickerProps, PickerAction, PickerCallbacks};
pub use services::range_picker::{
    DateRangePicker, DateRangePickerProps, RangePickerAction, RangePickerCallbacks, RangeSide,
};
