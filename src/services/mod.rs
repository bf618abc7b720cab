// Service module exports

pub mod date_picker;
pub mod focus;
pub mod grid;
pub mod label;
pub mod navigation;
pub mod range_picker;
pub mod settings;
