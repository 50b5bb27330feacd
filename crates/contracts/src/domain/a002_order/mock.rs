use chrono::NaiveDate;

use super::aggregate::{Order, RecentOrder};
use crate::enums::OrderStatus;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn order(
    id: &str,
    product: &str,
    status: OrderStatus,
    tracking: &str,
    estimated_delivery: NaiveDate,
    supplier: &str,
    price: f64,
) -> Order {
    Order {
        id: id.to_string(),
        product: product.to_string(),
        status,
        tracking: tracking.to_string(),
        estimated_delivery,
        supplier: supplier.to_string(),
        price,
    }
}

pub fn mock_orders() -> Vec<Order> {
    vec![
        order(
            "ORD-2024-001",
            "Wireless Bluetooth Headphones",
            OrderStatus::Delivered,
            "TRK123456789",
            date(2024, 1, 15),
            "TechGlobal Inc.",
            89.99,
        ),
        order(
            "ORD-2024-002",
            "Ergonomic Office Chair",
            OrderStatus::Shipped,
            "TRK987654321",
            date(2024, 1, 18),
            "FurniCorp Ltd.",
            299.99,
        ),
        order(
            "ORD-2024-003",
            "Smart Fitness Watch",
            OrderStatus::Processing,
            "TRK456789123",
            date(2024, 1, 22),
            "WearTech Solutions",
            199.99,
        ),
        order(
            "ORD-2024-004",
            "Premium Coffee Machine",
            OrderStatus::Sourcing,
            "TRK321654987",
            date(2024, 1, 25),
            "KitchenPro Global",
            449.99,
        ),
    ]
}

pub fn mock_recent_orders() -> Vec<RecentOrder> {
    [
        ("ORD-001", "Wireless Headphones", "John Doe", 299, OrderStatus::Processing),
        ("ORD-002", "Laptop Stand", "Jane Smith", 89, OrderStatus::Shipped),
        ("ORD-003", "Ergonomic Chair", "Mike Johnson", 459, OrderStatus::Delivered),
        ("ORD-004", "Smart Watch", "Sarah Wilson", 349, OrderStatus::Sourcing),
        ("ORD-005", "Coffee Machine", "David Brown", 899, OrderStatus::Processing),
    ]
    .into_iter()
    .map(|(id, product, customer, value, status)| RecentOrder {
        id: id.to_string(),
        product: product.to_string(),
        customer: customer.to_string(),
        value,
        status,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::BadgeTone;

    #[test]
    fn test_order_listing() {
        let orders = mock_orders();
        assert_eq!(orders.len(), 4);
        let tones: Vec<BadgeTone> = orders.iter().map(|o| o.status.tone()).collect();
        assert_eq!(
            tones,
            vec![BadgeTone::Success, BadgeTone::Info, BadgeTone::Warning, BadgeTone::Primary]
        );
        assert_eq!(orders[0].estimated_delivery.to_string(), "2024-01-15");
    }

    #[test]
    fn test_only_delivered_orders_can_be_reviewed() {
        let reviewable: Vec<_> = mock_orders()
            .into_iter()
            .filter(Order::can_review)
            .map(|o| o.id)
            .collect();
        assert_eq!(reviewable, vec!["ORD-2024-001".to_string()]);
    }

    #[test]
    fn test_recent_orders() {
        let recent = mock_recent_orders();
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[4].value, 899);
    }
}
