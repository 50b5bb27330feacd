//! Platform analytics page data

use serde::{Deserialize, Serialize};

use super::{KpiCard, PercentMetric};
use crate::enums::BadgeTone;

/// Revenue that fills the monthly bar completely
pub const REVENUE_SCALE: f64 = 80_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMetrics {
    pub month: String,
    pub revenue: i64,
    pub orders: u32,
    pub users: u32,
}

impl MonthlyMetrics {
    pub fn revenue_bar_percent(&self) -> f64 {
        self.revenue as f64 / REVENUE_SCALE * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionShare {
    pub region: String,
    pub percentage: u8,
    pub orders: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceGoal {
    pub label: String,
    /// "current / target" as displayed
    pub ratio: String,
    pub achieved: f64,
}

pub fn kpi_cards() -> Vec<KpiCard> {
    [
        ("Total Revenue", "$357K", "+12.5%", "dollar-sign", BadgeTone::Success),
        ("Active Users", "2,485", "+8.2%", "users", BadgeTone::Primary),
        ("Orders Completed", "1,847", "+15.3%", "package", BadgeTone::Info),
        ("AI Success Rate", "94.2%", "+2.1%", "bot", BadgeTone::Warning),
    ]
    .into_iter()
    .map(|(label, value, change, icon, tone)| {
        KpiCard::new(
            label,
            value.to_string(),
            &format!("↗ {} from last month", change),
            icon,
            tone,
        )
    })
    .collect()
}

pub fn monthly_data() -> Vec<MonthlyMetrics> {
    [
        ("Jan", 45000, 320, 89),
        ("Feb", 52000, 380, 95),
        ("Mar", 61000, 420, 108),
        ("Apr", 58000, 395, 102),
        ("May", 67000, 460, 118),
        ("Jun", 74000, 510, 125),
    ]
    .into_iter()
    .map(|(month, revenue, orders, users)| MonthlyMetrics {
        month: month.to_string(),
        revenue,
        orders,
        users,
    })
    .collect()
}

pub fn ai_performance() -> Vec<PercentMetric> {
    [
        ("Success Rate", 94.2, "+2.1%"),
        ("Avg Response Time", 2.3, "-0.5s"),
        ("Cost Savings", 23.7, "+1.2%"),
        ("Supplier Match", 89.5, "+3.1%"),
    ]
    .into_iter()
    .map(|(label, value, trend)| PercentMetric {
        label: label.to_string(),
        value,
        trend: Some(trend.to_string()),
    })
    .collect()
}

pub fn top_regions() -> Vec<RegionShare> {
    [
        ("Asia Pacific", 45, 823),
        ("North America", 28, 512),
        ("Europe", 18, 329),
        ("South America", 6, 110),
        ("Africa", 3, 55),
    ]
    .into_iter()
    .map(|(region, percentage, orders)| RegionShare {
        region: region.to_string(),
        percentage,
        orders,
    })
    .collect()
}

pub fn performance_goals() -> Vec<PerformanceGoal> {
    [
        ("Monthly Revenue Target", "$74K / $80K", 92.5),
        ("AI Success Rate Target", "94.2% / 95%", 99.2),
        ("Customer Satisfaction", "4.8 / 5.0", 96.0),
    ]
    .into_iter()
    .map(|(label, ratio, achieved)| PerformanceGoal {
        label: label.to_string(),
        ratio: ratio.to_string(),
        achieved,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_bars() {
        let months = monthly_data();
        assert_eq!(months.len(), 6);
        assert!((months[0].revenue_bar_percent() - 56.25).abs() < 1e-9);
        assert!((months[5].revenue_bar_percent() - 92.5).abs() < 1e-9);
    }

    #[test]
    fn test_region_shares_cover_everything() {
        let total: u32 = top_regions().iter().map(|r| r.percentage as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(kpi_cards().len(), 4);
        assert_eq!(kpi_cards()[0].note, "↗ +12.5% from last month");
        assert_eq!(ai_performance().len(), 4);
        assert_eq!(performance_goals().len(), 3);
    }
}
