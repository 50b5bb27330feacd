use serde::{Deserialize, Serialize};

use super::BadgeTone;

/// Platform role of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Customer,
    Admin,
}

impl UserRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Customer => "Customer",
            UserRole::Admin => "Admin",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            UserRole::Admin => BadgeTone::Primary,
            UserRole::Customer => BadgeTone::Info,
        }
    }
}

/// Whether an account can currently sign in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn code(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            UserStatus::Active => BadgeTone::Success,
            UserStatus::Inactive => BadgeTone::Muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_and_status_tones() {
        assert_eq!(UserRole::Admin.tone(), BadgeTone::Primary);
        assert_eq!(UserRole::Customer.tone(), BadgeTone::Info);
        assert_eq!(UserStatus::Active.tone(), BadgeTone::Success);
        assert_eq!(UserStatus::Inactive.tone(), BadgeTone::Muted);
    }
}
