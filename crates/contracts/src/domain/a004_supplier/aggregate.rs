use serde::{Deserialize, Serialize};

use crate::enums::SupplierStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    pub location: String,
    pub category: String,
    pub rating: f32,
    pub orders: u32,
    /// Reliability score in percent
    pub reliability: u8,
    #[serde(rename = "responseTime")]
    pub response_time: String,
    pub status: SupplierStatus,
}

impl Supplier {
    pub fn is_verified(&self) -> bool {
        self.status == SupplierStatus::Verified
    }
}

/// Headline numbers of the supplier network page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub total_suppliers: u32,
    pub verified: u32,
    pub countries: u32,
    pub average_rating: f32,
}
