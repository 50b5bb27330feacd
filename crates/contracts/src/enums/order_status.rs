use serde::{Deserialize, Serialize};

use super::BadgeTone;

/// Fulfilment stage shown on order cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Delivered,
    Shipped,
    Processing,
    Sourcing,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "delivered",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Processing => "processing",
            OrderStatus::Sourcing => "sourcing",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Processing => "Processing",
            OrderStatus::Sourcing => "Sourcing",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            OrderStatus::Delivered => BadgeTone::Success,
            OrderStatus::Shipped => BadgeTone::Info,
            OrderStatus::Processing => BadgeTone::Warning,
            OrderStatus::Sourcing => BadgeTone::Primary,
        }
    }

    /// Icon name understood by the frontend `icon()` helper
    pub fn icon(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "check-circle",
            OrderStatus::Shipped => "truck",
            OrderStatus::Processing => "package",
            OrderStatus::Sourcing => "search",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_mapping() {
        assert_eq!(OrderStatus::Delivered.tone(), BadgeTone::Success);
        assert_eq!(OrderStatus::Shipped.tone(), BadgeTone::Info);
        assert_eq!(OrderStatus::Processing.tone(), BadgeTone::Warning);
        assert_eq!(OrderStatus::Sourcing.tone(), BadgeTone::Primary);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let parsed: Result<OrderStatus, _> = serde_json::from_str("\"cancelled\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_serializes_as_lowercase_code() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let parsed: OrderStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(parsed, OrderStatus::Shipped);
    }
}
