//! Host-supplied annotations for day cells.
//!
//! Events only contribute a per-day count to the grid; the title is carried
//! so hosts can keep one list for both the picker and their own views.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A dated marker counted on its calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMarker {
    pub date: NaiveDate,
    #[serde(default)]
    pub title: Option<String>,
}

impl EventMarker {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, title: None }
    }

    pub fn with_title(date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            date,
            title: Some(title.into()),
        }
    }

    /// Parse a JSON array of markers.
    pub fn list_from_json(json: &str) -> Result<Vec<EventMarker>> {
        serde_json::from_str(json).context("Failed to parse event markers")
    }

    /// Read a JSON array of markers from disk.
    pub fn load_list(path: &Path) -> Result<Vec<EventMarker>> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event markers from {}", path.display()))?;
        Self::list_from_json(&contents)
    }
}

/// Number of markers falling on `day`.
pub fn count_events_on(events: &[EventMarker], day: NaiveDate) -> usize {
    events.iter().filter(|event| event.date == day).count()
}

/// Extra per-day presentation hint, e.g. a style class applied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayProps {
    pub date: NaiveDate,
    pub class_name: String,
}

impl DayProps {
    pub fn new(date: NaiveDate, class_name: impl Into<String>) -> Self {
        Self {
            date,
            class_name: class_name.into(),
        }
    }
}

/// Class name of the first entry matching `day`.
pub fn class_name_for(day_props: &[DayProps], day: NaiveDate) -> Option<&str> {
    day_props
        .iter()
        .find(|props| props.date == day)
        .map(|props| props.class_name.as_str())
}
