mod date_picker;
mod demo;
mod palette;
mod range_picker;

pub use date_picker::{CalendarInteraction, DatePickerWidget};
pub use demo::DemoApp;
pub use range_picker::DateRangePickerWidget;
