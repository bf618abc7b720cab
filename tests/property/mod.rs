// Property-based tests
// Invariants of the grid layout and the picker state machines over arbitrary dates

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod grid_properties;
mod navigation_properties;
mod range_properties;
