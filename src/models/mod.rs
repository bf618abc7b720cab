// Module exports for models

pub mod date;
pub mod event;
pub mod settings;
pub mod ui;
