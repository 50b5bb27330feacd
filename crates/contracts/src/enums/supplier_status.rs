use serde::{Deserialize, Serialize};

use super::BadgeTone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    Verified,
    Pending,
}

impl SupplierStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SupplierStatus::Verified => "verified",
            SupplierStatus::Pending => "pending",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            SupplierStatus::Verified => BadgeTone::Success,
            SupplierStatus::Pending => BadgeTone::Warning,
        }
    }
}
