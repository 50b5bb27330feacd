use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{ProgressBar, StatusBadge};
use crate::shared::icons::icon;
use contracts::domain::a004_supplier::mock::{mock_network_stats, mock_suppliers};
use contracts::domain::a004_supplier::{NetworkStats, Supplier};
use contracts::enums::BadgeTone;
use contracts::shared::format::format_thousands;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Card};

/// (icon, value, label, tone) for the four network tiles
fn network_tiles(stats: &NetworkStats) -> Vec<(&'static str, String, &'static str, BadgeTone)> {
    vec![
        (
            "target",
            format_thousands(stats.total_suppliers as i64),
            "Total Suppliers",
            BadgeTone::Primary,
        ),
        (
            "check-circle",
            format_thousands(stats.verified as i64),
            "Verified",
            BadgeTone::Success,
        ),
        ("globe", stats.countries.to_string(), "Countries", BadgeTone::Info),
        ("star", format!("{:.1}", stats.average_rating), "Avg Rating", BadgeTone::Warning),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierNetworkPage() -> impl IntoView {
    let tiles = network_tiles(&mock_network_stats());

    view! {
        <div class="page page--suppliers">
            <PageHeader
                title="Supplier Network"
                subtitle="Manage your global supplier partnerships and performance".to_string()
            />

            <div class="stats-grid stats-grid--4">
                {tiles
                    .into_iter()
                    .map(|(icon_name, value, label, tone)| view! {
                        <Card attr:class=format!("network-tile network-tile--{}", tone.css_modifier())>
                            <div class="network-tile__icon">{icon(icon_name)}</div>
                            <div>
                                <div class="network-tile__value">{value}</div>
                                <p class="text-muted text-small">{label}</p>
                            </div>
                        </Card>
                    })
                    .collect_view()}
            </div>

            <Card>
                <h3 class="card-title">{icon("star")}"Top Performing Suppliers"</h3>
                <div class="supplier-list">
                    {mock_suppliers()
                        .into_iter()
                        .map(|supplier| view! { <SupplierRow supplier=supplier /> })
                        .collect_view()}
                </div>
            </Card>
        </div>
    }
}

#[component]
fn SupplierRow(supplier: Supplier) -> impl IntoView {
    let status = supplier.status;
    let verified = supplier.is_verified();
    let reliability = supplier.reliability as f64;

    view! {
        <div class="supplier-row">
            <div class="supplier-row__header">
                <div>
                    <div class="supplier-row__title">
                        <h3>{supplier.name}</h3>
                        {if verified {
                            view! { <StatusBadge tone=status.tone() label=status.code() icon_name="check-circle" /> }.into_any()
                        } else {
                            view! { <StatusBadge tone=status.tone() label=status.code() /> }.into_any()
                        }}
                    </div>
                    <div class="supplier-row__meta text-muted text-small">
                        <span class="fact">{icon("map-pin")}{supplier.location}</span>
                        <span class="fact">{icon("package")}{supplier.category}</span>
                        <span class="fact">{icon("users")}{format!("{} orders", supplier.orders)}</span>
                    </div>
                </div>
                <div class="supplier-row__rating">
                    <div class="fact fact--warning">
                        {icon("star")}
                        <span class="fact__strong">{format!("{:.1}", supplier.rating)}</span>
                    </div>
                    <p class="text-muted text-small">{format!("Response: {}", supplier.response_time)}</p>
                </div>
            </div>

            <div class="supplier-row__reliability">
                <div class="delivery-progress__labels text-small">
                    <span>"Reliability Score"</span>
                    <span>{format!("{}%", supplier.reliability)}</span>
                </div>
                <ProgressBar value=reliability />
            </div>

            <div class="supplier-row__actions">
                <Button appearance=ButtonAppearance::Secondary>"View Details"</Button>
                <Button appearance=ButtonAppearance::Secondary>"Contact"</Button>
                <Button appearance=ButtonAppearance::Primary>"Partner Settings"</Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_tiles_format_counts() {
        let tiles = network_tiles(&mock_network_stats());
        let values: Vec<&str> = tiles.iter().map(|(_, v, _, _)| v.as_str()).collect();
        assert_eq!(values, vec!["1,247", "892", "67", "4.7"]);
    }
}
