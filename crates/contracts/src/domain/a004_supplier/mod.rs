pub mod aggregate;
pub mod mock;

pub use aggregate::{NetworkStats, Supplier};
