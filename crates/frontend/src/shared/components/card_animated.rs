//! CardAnimated — thaw `Card` with the `card-appear` entrance animation.
//!
//! ```ignore
//! <CardAnimated delay_ms=0>...</CardAnimated>
//! <CardAnimated delay_ms=80 class="order-card">...</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

pub fn animation_style(delay_ms: u32) -> String {
    format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
}

#[component]
pub fn CardAnimated(
    /// Animation delay, use multiples of 80 for a stagger effect
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card attr:class=class attr:style=animation_style(delay_ms)>
            {children()}
        </Card>
    }
}
