//! Admin overview page data

use serde::{Deserialize, Serialize};

use super::{KpiCard, PercentMetric};
use crate::enums::BadgeTone;
use crate::shared::format::{format_money_whole, format_percent, format_thousands};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_revenue: i64,
    pub total_orders: i64,
    pub active_users: i64,
    pub success_rate: f64,
    pub ai_processing_jobs: i64,
    pub supplier_network: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthState {
    Operational,
    Degraded,
}

impl HealthState {
    pub fn display_name(&self) -> &'static str {
        match self {
            HealthState::Operational => "Operational",
            HealthState::Degraded => "Degraded",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            HealthState::Operational => BadgeTone::Success,
            HealthState::Degraded => BadgeTone::Warning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemComponent {
    pub name: String,
    pub state: HealthState,
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_revenue: 1_250_000,
        total_orders: 3420,
        active_users: 890,
        success_rate: 94.2,
        ai_processing_jobs: 127,
        supplier_network: 1500,
    }
}

impl DashboardStats {
    pub fn cards(&self) -> Vec<KpiCard> {
        vec![
            KpiCard::new(
                "Total Revenue",
                format_money_whole(self.total_revenue),
                "+12.5% from last month",
                "dollar-sign",
                BadgeTone::Success,
            ),
            KpiCard::new(
                "Total Orders",
                format_thousands(self.total_orders),
                "+8.2% from last month",
                "shopping-cart",
                BadgeTone::Primary,
            ),
            KpiCard::new(
                "Active Users",
                self.active_users.to_string(),
                "+15.3% from last month",
                "users",
                BadgeTone::Info,
            ),
            KpiCard::new(
                "AI Success Rate",
                format_percent(self.success_rate),
                "+2.1% from last month",
                "bot",
                BadgeTone::Success,
            ),
            KpiCard::new(
                "AI Processing",
                self.ai_processing_jobs.to_string(),
                "Currently active",
                "package",
                BadgeTone::Warning,
            ),
            KpiCard::new(
                "Supplier Network",
                self.supplier_network.to_string(),
                "Verified suppliers",
                "globe",
                BadgeTone::Muted,
            ),
        ]
    }
}

pub fn ai_metrics() -> Vec<PercentMetric> {
    [
        ("Sourcing Success Rate", 94.2),
        ("Average Processing Time", 85.0),
        ("Customer Satisfaction", 96.8),
        ("Cost Optimization", 78.5),
    ]
    .into_iter()
    .map(|(label, value)| PercentMetric {
        label: label.to_string(),
        value,
        trend: None,
    })
    .collect()
}

pub fn system_health() -> Vec<SystemComponent> {
    [
        ("AI Processing Engine", HealthState::Operational),
        ("Payment Gateway", HealthState::Operational),
        ("Supplier API", HealthState::Degraded),
        ("Tracking System", HealthState::Operational),
    ]
    .into_iter()
    .map(|(name, state)| SystemComponent {
        name: name.to_string(),
        state,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_cards_formatting() {
        let cards = dashboard_stats().cards();
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].value, "$1,250,000");
        assert_eq!(cards[1].value, "3,420");
        assert_eq!(cards[2].value, "890");
        assert_eq!(cards[3].value, "94.2%");
    }

    #[test]
    fn test_only_supplier_api_is_degraded() {
        let degraded: Vec<_> = system_health()
            .into_iter()
            .filter(|c| c.state == HealthState::Degraded)
            .map(|c| c.name)
            .collect();
        assert_eq!(degraded, vec!["Supplier API".to_string()]);
    }
}
