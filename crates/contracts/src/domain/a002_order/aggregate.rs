use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::OrderStatus;

/// Customer order as listed on the orders page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub product: String,
    pub status: OrderStatus,
    pub tracking: String,
    #[serde(rename = "estimatedDelivery")]
    pub estimated_delivery: NaiveDate,
    pub supplier: String,
    pub price: f64,
}

impl Order {
    /// Delivered orders can be rated
    pub fn can_review(&self) -> bool {
        self.status == OrderStatus::Delivered
    }
}

/// Short order row on the admin overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: String,
    pub product: String,
    pub customer: String,
    /// Whole dollars
    pub value: u32,
    pub status: OrderStatus,
}
