pub mod d400_analytics;
pub mod d401_admin_overview;

use serde::{Deserialize, Serialize};

use crate::enums::BadgeTone;

/// Headline number card shared by the dashboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
    pub note: String,
    pub icon: String,
    pub tone: BadgeTone,
}

impl KpiCard {
    pub fn new(label: &str, value: String, note: &str, icon: &str, tone: BadgeTone) -> Self {
        Self {
            label: label.to_string(),
            value,
            note: note.to_string(),
            icon: icon.to_string(),
            tone,
        }
    }
}

/// Named percentage rendered as a progress bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentMetric {
    pub label: String,
    pub value: f64,
    /// Change against the previous period, already formatted
    pub trend: Option<String>,
}
