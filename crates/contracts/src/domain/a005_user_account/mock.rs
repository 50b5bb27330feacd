use chrono::NaiveDate;

use super::aggregate::UserAccount;
use crate::enums::{UserRole, UserStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn mock_users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: 1,
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            role: UserRole::Customer,
            status: UserStatus::Active,
            joined: date(2024, 1, 15),
            orders: 12,
        },
        UserAccount {
            id: 2,
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            role: UserRole::Customer,
            status: UserStatus::Active,
            joined: date(2024, 1, 20),
            orders: 8,
        },
        UserAccount {
            id: 3,
            name: "Mike Wilson".to_string(),
            email: "mike@example.com".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            joined: date(2023, 12, 1),
            orders: 0,
        },
        UserAccount {
            id: 4,
            name: "Emily Davis".to_string(),
            email: "emily@example.com".to_string(),
            role: UserRole::Customer,
            status: UserStatus::Inactive,
            joined: date(2024, 1, 10),
            orders: 3,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::BadgeTone;

    #[test]
    fn test_user_listing() {
        let users = mock_users();
        assert_eq!(users.len(), 4);
        assert_eq!(users[2].role.tone(), BadgeTone::Primary);
        assert_eq!(users[3].status.tone(), BadgeTone::Muted);
        assert_eq!(users[2].joined.to_string(), "2023-12-01");
    }

    #[test]
    fn test_initials() {
        let users = mock_users();
        assert_eq!(users[0].initials(), "JS");
        assert_eq!(users[1].initials(), "SJ");

        let mut single = users[0].clone();
        single.name = "Cher".to_string();
        assert_eq!(single.initials(), "C");
    }
}
