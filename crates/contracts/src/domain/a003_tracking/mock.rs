use chrono::NaiveDate;

use super::aggregate::{ShipmentSummary, Timeline, TrackingStep};

pub const DEMO_TRACKING_CODE: &str = "TRK123456789";

fn step(label: &str, completed: bool, (y, m, d): (i32, u32, u32), current: bool) -> TrackingStep {
    TrackingStep {
        label: label.to_string(),
        completed,
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        current,
    }
}

pub fn demo_timeline() -> Timeline {
    Timeline {
        steps: vec![
            step("Order Confirmed", true, (2024, 1, 10), false),
            step("AI Sourcing Complete", true, (2024, 1, 11), false),
            step("Payment Processed", true, (2024, 1, 11), false),
            step("Shipped from Supplier", true, (2024, 1, 12), false),
            step("In Transit", false, (2024, 1, 15), true),
            step("Out for Delivery", false, (2024, 1, 16), false),
            step("Delivered", false, (2024, 1, 16), false),
        ],
    }
}

pub fn demo_shipment() -> ShipmentSummary {
    ShipmentSummary {
        product: "Wireless Bluetooth Headphones".to_string(),
        blurb: "Premium noise-canceling headphones".to_string(),
        order_id: "ORD-2024-001".to_string(),
        default_tracking: DEMO_TRACKING_CODE.to_string(),
        origin: "Shanghai, China".to_string(),
        destination: "New York, NY, USA".to_string(),
        estimated_delivery: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_tracking::{StepState, TrackingLookup};

    #[test]
    fn test_timeline_progress() {
        let timeline = demo_timeline();
        assert_eq!(timeline.steps.len(), 7);
        assert_eq!(timeline.completed_count(), 4);
        assert!((timeline.progress_percent() - 57.142857).abs() < 1e-4);
        assert_eq!(timeline.progress_rounded(), 57);
    }

    #[test]
    fn test_step_states() {
        let states: Vec<StepState> = demo_timeline().steps.iter().map(|s| s.state()).collect();
        assert_eq!(&states[..4], &[StepState::Completed; 4]);
        assert_eq!(states[4], StepState::Current);
        assert_eq!(&states[5..], &[StepState::Upcoming; 2]);
        assert!(!demo_timeline().has_connector(6));
        assert!(demo_timeline().has_connector(5));
    }

    #[test]
    fn test_any_code_shows_the_same_timeline() {
        let hidden = TrackingLookup::default();
        assert_eq!(hidden.track("   "), TrackingLookup::Hidden);
        assert!(hidden.track("whatever").is_shown());
        assert!(hidden.track("TRK000").is_shown());
    }

    #[test]
    fn test_display_code_falls_back_to_sample() {
        let shipment = demo_shipment();
        assert_eq!(shipment.display_code(""), "TRK123456789");
        assert_eq!(shipment.display_code("TRK42"), "TRK42");
        assert_eq!(
            shipment.estimated_delivery.format("%b %-d, %Y").to_string(),
            "Jan 16, 2024"
        );
    }
}
