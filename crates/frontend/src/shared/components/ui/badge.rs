use contracts::enums::BadgeTone;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use crate::shared::icons::icon;

pub fn badge_color(tone: BadgeTone) -> BadgeColor {
    match tone {
        BadgeTone::Success => BadgeColor::Success,
        BadgeTone::Info => BadgeColor::Informative,
        BadgeTone::Warning => BadgeColor::Warning,
        BadgeTone::Primary => BadgeColor::Brand,
        BadgeTone::Muted => BadgeColor::Subtle,
    }
}

/// Tinted status badge with an optional leading icon
#[component]
pub fn StatusBadge(
    tone: BadgeTone,
    /// Badge text
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(optional)]
    icon_name: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span class=format!("status-badge status-badge--{}", tone.css_modifier())>
            <Badge appearance=BadgeAppearance::Tint color=badge_color(tone)>
                {icon_name.map(icon)}
                <span class="status-badge__label">{label}</span>
            </Badge>
        </span>
    }
}
