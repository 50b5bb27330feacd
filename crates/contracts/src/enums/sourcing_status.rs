use serde::{Deserialize, Serialize};

use super::BadgeTone;

/// Lifecycle tag of an AI sourcing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcingStatus {
    Sourcing,
    Found,
    Ordered,
    Shipped,
    Delivered,
}

impl SourcingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SourcingStatus::Sourcing => "sourcing",
            SourcingStatus::Found => "found",
            SourcingStatus::Ordered => "ordered",
            SourcingStatus::Shipped => "shipped",
            SourcingStatus::Delivered => "delivered",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourcingStatus::Sourcing => "Sourcing",
            SourcingStatus::Found => "Found",
            SourcingStatus::Ordered => "Ordered",
            SourcingStatus::Shipped => "Shipped",
            SourcingStatus::Delivered => "Delivered",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            SourcingStatus::Sourcing => BadgeTone::Warning,
            SourcingStatus::Found => BadgeTone::Success,
            SourcingStatus::Ordered => BadgeTone::Info,
            SourcingStatus::Shipped => BadgeTone::Primary,
            SourcingStatus::Delivered => BadgeTone::Success,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SourcingStatus::Sourcing => "clock",
            SourcingStatus::Found => "check-circle",
            SourcingStatus::Ordered => "package",
            SourcingStatus::Shipped => "truck",
            SourcingStatus::Delivered => "check-circle",
        }
    }

    /// Only freshly found offers can be ordered from the feed
    pub fn is_actionable(&self) -> bool {
        matches!(self, SourcingStatus::Found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_mapping() {
        assert_eq!(SourcingStatus::Sourcing.tone(), BadgeTone::Warning);
        assert_eq!(SourcingStatus::Found.tone(), BadgeTone::Success);
        assert_eq!(SourcingStatus::Ordered.tone(), BadgeTone::Info);
        assert_eq!(SourcingStatus::Shipped.tone(), BadgeTone::Primary);
        assert_eq!(SourcingStatus::Delivered.tone(), BadgeTone::Success);
    }

    #[test]
    fn test_only_found_is_actionable() {
        assert!(SourcingStatus::Found.is_actionable());
        assert!(!SourcingStatus::Shipped.is_actionable());
    }
}
