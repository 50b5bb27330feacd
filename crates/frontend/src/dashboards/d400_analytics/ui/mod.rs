use contracts::dashboards::d400_analytics::{
    ai_performance, kpi_cards, monthly_data, performance_goals, top_regions, MonthlyMetrics,
};
use contracts::dashboards::PercentMetric;
use contracts::shared::format::format_thousands;
use leptos::prelude::*;
use thaw::Card;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::ProgressBar;
use crate::shared::icons::icon;

/// Platform analytics dashboard
#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let months = monthly_data();
    let revenue_months = months.clone();

    view! {
        <div class="page page--analytics">
            <PageHeader
                title="Analytics Dashboard"
                subtitle="Comprehensive insights into your sourcing platform performance".to_string()
            />

            <div class="stats-grid stats-grid--4">
                {kpi_cards()
                    .into_iter()
                    .enumerate()
                    .map(|(i, card)| view! {
                        <CardAnimated delay_ms={i as u32 * 80}>
                            <StatCard card=card />
                        </CardAnimated>
                    })
                    .collect_view()}
            </div>

            <div class="two-col">
                <Card>
                    <h3 class="card-title">{icon("trending-up")}"Monthly Revenue Growth"</h3>
                    <div class="bar-list">
                        {revenue_months.iter().cloned().map(|m| view! { <RevenueRow month=m /> }).collect_view()}
                    </div>
                </Card>

                <Card>
                    <h3 class="card-title">{icon("package")}"Order Trends"</h3>
                    <div class="trend-list">
                        {months
                            .into_iter()
                            .map(|m| view! {
                                <div class="trend-row">
                                    <div>
                                        <div class="trend-row__month">{m.month}</div>
                                        <div class="text-muted text-small">{format!("{} orders", m.orders)}</div>
                                    </div>
                                    <div class="trend-row__users">
                                        <div class="fact__strong">{m.users}</div>
                                        <div class="text-muted text-small">"new users"</div>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </Card>
            </div>

            <Card>
                <h3 class="card-title">{icon("bot")}"AI Performance Metrics"</h3>
                <div class="metric-grid">
                    {ai_performance().into_iter().map(|m| view! { <TrendMetric metric=m /> }).collect_view()}
                </div>
            </Card>

            <div class="two-col">
                <Card>
                    <h3 class="card-title">{icon("globe")}"Top Sourcing Regions"</h3>
                    <div class="bar-list">
                        {top_regions()
                            .into_iter()
                            .map(|r| view! {
                                <div class="bar-row">
                                    <div class="bar-row__labels">
                                        <span class="fact__strong">{r.region}</span>
                                        <span class="text-muted">{format!("{} orders", r.orders)}</span>
                                    </div>
                                    <ProgressBar value={r.percentage as f64} />
                                    <div class="bar-row__note text-muted text-small">
                                        {format!("{}%", r.percentage)}
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </Card>

                <Card>
                    <h3 class="card-title">{icon("target")}"Performance Goals"</h3>
                    <div class="bar-list">
                        {performance_goals()
                            .into_iter()
                            .map(|g| view! {
                                <div class="bar-row">
                                    <div class="bar-row__labels">
                                        <span class="fact__strong">{g.label}</span>
                                        <span class="text-muted">{g.ratio}</span>
                                    </div>
                                    <ProgressBar value=g.achieved />
                                    <p class="text-muted text-small">{format!("{}% achieved", g.achieved)}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </Card>
            </div>
        </div>
    }
}

#[component]
fn RevenueRow(month: MonthlyMetrics) -> impl IntoView {
    let percent = month.revenue_bar_percent();

    view! {
        <div class="bar-row">
            <div class="bar-row__labels">
                <span class="fact__strong">{month.month}</span>
                <span class="text-success">{format!("${}", format_thousands(month.revenue))}</span>
            </div>
            <ProgressBar value=percent />
        </div>
    }
}

#[component]
fn TrendMetric(metric: PercentMetric) -> impl IntoView {
    view! {
        <div class="metric">
            <div class="bar-row__labels">
                <span class="fact__strong">{metric.label}</span>
                <span class="text-success text-small">{metric.trend.unwrap_or_default()}</span>
            </div>
            <div class="metric__value">{format!("{}%", metric.value)}</div>
            <ProgressBar value=metric.value />
        </div>
    }
}
