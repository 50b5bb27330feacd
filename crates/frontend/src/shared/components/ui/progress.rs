use leptos::prelude::*;

/// Width of the filled part, clamped to 0..=100
pub fn fill_style(value: f64) -> String {
    let pct = if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 };
    format!("width: {:.2}%;", pct)
}

/// Horizontal progress bar taking a percentage
#[component]
pub fn ProgressBar(
    #[prop(into)] value: Signal<f64>,
    /// "sm" (default), "md" or "lg"
    #[prop(optional)]
    size: Option<&'static str>,
) -> impl IntoView {
    let class = format!("progress progress--{}", size.unwrap_or("sm"));

    view! {
        <div
            class=class
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", value.get())
        >
            <div class="progress__fill" style=move || fill_style(value.get())></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_style_is_clamped() {
        assert_eq!(fill_style(57.142857), "width: 57.14%;");
        assert_eq!(fill_style(120.0), "width: 100.00%;");
        assert_eq!(fill_style(-3.0), "width: 0.00%;");
        assert_eq!(fill_style(f64::NAN), "width: 0.00%;");
    }
}
