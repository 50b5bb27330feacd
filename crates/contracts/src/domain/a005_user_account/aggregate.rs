use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{UserRole, UserStatus};

/// Platform account as shown to administrators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub joined: NaiveDate,
    pub orders: u32,
}

impl UserAccount {
    /// First letter of every word in the name: "John Smith" -> "JS"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}
