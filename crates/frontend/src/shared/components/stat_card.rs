use crate::shared::icons::icon;
use contracts::dashboards::KpiCard;
use leptos::prelude::*;

/// Headline number card used by the analytics and admin dashboards
#[component]
pub fn StatCard(card: KpiCard) -> impl IntoView {
    let tone = card.tone.css_modifier();

    view! {
        <div class=format!("stat-card stat-card--{}", tone)>
            <div class="stat-card__header">
                <div class="stat-card__label">{card.label}</div>
                <div class="stat-card__icon">{icon(&card.icon)}</div>
            </div>
            <div class="stat-card__value">{card.value}</div>
            <div class="stat-card__subtitle">{card.note}</div>
        </div>
    }
}
