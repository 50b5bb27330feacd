use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stage of the delivery timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingStep {
    pub label: String,
    pub completed: bool,
    pub date: NaiveDate,
    #[serde(default)]
    pub current: bool,
}

/// Visual state of a step marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

impl TrackingStep {
    pub fn state(&self) -> StepState {
        if self.completed {
            StepState::Completed
        } else if self.current {
            StepState::Current
        } else {
            StepState::Upcoming
        }
    }
}

/// Ordered sequence of tracking steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub steps: Vec<TrackingStep>,
}

impl Timeline {
    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }

    /// Completed share in percent, 0 for an empty timeline
    pub fn progress_percent(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.steps.len() as f64 * 100.0
    }

    pub fn progress_rounded(&self) -> u32 {
        self.progress_percent().round() as u32
    }

    /// Whether the connector below step `index` is drawn
    pub fn has_connector(&self, index: usize) -> bool {
        index + 1 < self.steps.len()
    }
}

/// Order details displayed above the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentSummary {
    pub product: String,
    pub blurb: String,
    pub order_id: String,
    pub default_tracking: String,
    pub origin: String,
    pub destination: String,
    pub estimated_delivery: NaiveDate,
}

impl ShipmentSummary {
    /// Entered code, or the sample code when nothing was typed
    pub fn display_code<'a>(&'a self, entered: &'a str) -> &'a str {
        if entered.is_empty() {
            &self.default_tracking
        } else {
            entered
        }
    }
}

/// Tracking page state.
///
/// The entered code never selects a shipment; every accepted code shows
/// the same sample timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrackingLookup {
    #[default]
    Hidden,
    Shown { code: String },
}

impl TrackingLookup {
    /// Blank codes leave the state untouched
    pub fn track(&self, code: &str) -> TrackingLookup {
        if code.trim().is_empty() {
            self.clone()
        } else {
            TrackingLookup::Shown {
                code: code.to_string(),
            }
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, TrackingLookup::Shown { .. })
    }
}
