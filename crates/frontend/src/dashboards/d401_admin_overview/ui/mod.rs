use contracts::dashboards::d401_admin_overview::{
    ai_metrics, dashboard_stats, system_health, HealthState, SystemComponent,
};
use contracts::domain::a002_order::mock::mock_recent_orders;
use contracts::domain::a002_order::RecentOrder;
use leptos::prelude::*;
use thaw::Card;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{ProgressBar, StatusBadge};
use crate::shared::icons::icon;

fn health_class(state: HealthState) -> String {
    format!("health-row health-row--{}", state.tone().css_modifier())
}

/// Admin landing page: KPIs, AI metrics, recent orders and system health
#[component]
pub fn AdminOverviewPage() -> impl IntoView {
    let stats = dashboard_stats();

    view! {
        <div class="page page--admin">
            <PageHeader
                title="Admin Dashboard"
                subtitle="Monitor your AI sourcing platform performance and operations".to_string()
            />

            <div class="stats-grid stats-grid--6">
                {stats
                    .cards()
                    .into_iter()
                    .enumerate()
                    .map(|(i, card)| view! {
                        <CardAnimated delay_ms={i as u32 * 80}>
                            <StatCard card=card />
                        </CardAnimated>
                    })
                    .collect_view()}
            </div>

            <Card>
                <h3 class="card-title">{icon("bot")}"AI Performance Metrics"</h3>
                <div class="metric-grid">
                    {ai_metrics()
                        .into_iter()
                        .map(|m| view! {
                            <div class="metric">
                                <div class="bar-row__labels">
                                    <span class="fact__strong">{m.label}</span>
                                    <span class="text-muted text-small">{format!("{}%", m.value)}</span>
                                </div>
                                <ProgressBar value=m.value />
                            </div>
                        })
                        .collect_view()}
                </div>
            </Card>

            <div class="two-col">
                <Card>
                    <h3 class="card-title">{icon("package")}"Recent Orders"</h3>
                    <div class="trend-list">
                        {mock_recent_orders()
                            .into_iter()
                            .map(|order| view! { <RecentOrderRow order=order /> })
                            .collect_view()}
                    </div>
                </Card>

                <Card>
                    <h3 class="card-title">{icon("bar-chart")}"System Health"</h3>
                    <div class="health-list">
                        {system_health()
                            .into_iter()
                            .map(|c| view! { <HealthRow item=c /> })
                            .collect_view()}
                    </div>
                </Card>
            </div>
        </div>
    }
}

#[component]
fn RecentOrderRow(order: RecentOrder) -> impl IntoView {
    let status = order.status;

    view! {
        <div class="trend-row">
            <div>
                <div class="trend-row__month">
                    <span class="fact__strong">{order.id}</span>
                    <StatusBadge tone=status.tone() label=status.code() />
                </div>
                <p class="text-muted text-small">{order.product}</p>
                <p class="text-muted text-small">{order.customer}</p>
            </div>
            <div class="fact__strong text-success">{format!("${}", order.value)}</div>
        </div>
    }
}

#[component]
fn HealthRow(item: SystemComponent) -> impl IntoView {
    let state = item.state;

    view! {
        <div class=health_class(state)>
            <div class="health-row__name">
                <span class="health-row__dot"></span>
                <span>{item.name}</span>
            </div>
            <span class="health-row__state text-small">{state.display_name()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_rows_follow_tone() {
        assert_eq!(health_class(HealthState::Operational), "health-row health-row--success");
        assert_eq!(health_class(HealthState::Degraded), "health-row health-row--warning");
    }
}
