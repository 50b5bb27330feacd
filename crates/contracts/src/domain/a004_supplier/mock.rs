use super::aggregate::{NetworkStats, Supplier};
use crate::enums::SupplierStatus;

pub fn mock_suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: 1,
            name: "TechGlobal Solutions".to_string(),
            location: "Shenzhen, China".to_string(),
            category: "Electronics".to_string(),
            rating: 4.8,
            orders: 245,
            reliability: 96,
            response_time: "2 hours".to_string(),
            status: SupplierStatus::Verified,
        },
        Supplier {
            id: 2,
            name: "EuroTextile Corp".to_string(),
            location: "Milan, Italy".to_string(),
            category: "Textiles".to_string(),
            rating: 4.6,
            orders: 189,
            reliability: 94,
            response_time: "4 hours".to_string(),
            status: SupplierStatus::Verified,
        },
        Supplier {
            id: 3,
            name: "Pacific Manufacturing".to_string(),
            location: "Vietnam".to_string(),
            category: "General".to_string(),
            rating: 4.5,
            orders: 167,
            reliability: 91,
            response_time: "6 hours".to_string(),
            status: SupplierStatus::Pending,
        },
    ]
}

pub fn mock_network_stats() -> NetworkStats {
    NetworkStats {
        total_suppliers: 1247,
        verified: 892,
        countries: 67,
        average_rating: 4.7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::BadgeTone;

    #[test]
    fn test_supplier_listing() {
        let suppliers = mock_suppliers();
        assert_eq!(suppliers.len(), 3);
        assert_eq!(suppliers.iter().filter(|s| s.is_verified()).count(), 2);
        assert_eq!(suppliers[2].status.tone(), BadgeTone::Warning);
        assert_eq!(suppliers[0].status.tone(), BadgeTone::Success);
    }
}
