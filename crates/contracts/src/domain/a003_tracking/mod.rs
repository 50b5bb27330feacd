pub mod aggregate;
pub mod mock;

pub use aggregate::{ShipmentSummary, StepState, Timeline, TrackingLookup, TrackingStep};
