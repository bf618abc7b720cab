// Unit-level tests against the public API
// Table-driven cases for labels, key mapping and date inputs

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod date_input_tests;
mod key_mapping_tests;
mod label_tests;
