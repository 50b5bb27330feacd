use contracts::domain::a003_tracking::mock::{demo_shipment, demo_timeline, DEMO_TRACKING_CODE};
use contracts::domain::a003_tracking::{StepState, Timeline, TrackingLookup};
use contracts::enums::BadgeTone;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, Card, Input};

use crate::shared::components::ui::{ProgressBar, StatusBadge};
use crate::shared::icons::icon;

fn marker_class(state: StepState) -> &'static str {
    match state {
        StepState::Completed => "timeline__marker timeline__marker--completed",
        StepState::Current => "timeline__marker timeline__marker--current",
        StepState::Upcoming => "timeline__marker timeline__marker--upcoming",
    }
}

fn label_class(state: StepState) -> &'static str {
    match state {
        StepState::Completed => "timeline__label",
        StepState::Current => "timeline__label timeline__label--current",
        StepState::Upcoming => "timeline__label timeline__label--upcoming",
    }
}

fn marker_icon(state: StepState) -> &'static str {
    match state {
        StepState::Completed => "check-circle",
        StepState::Current => "clock",
        StepState::Upcoming => "alert-circle",
    }
}

/// Public shipment tracking page, rendered outside the shell
#[component]
pub fn TrackingPage() -> impl IntoView {
    let code = RwSignal::new(String::new());
    let lookup = RwSignal::new(TrackingLookup::default());

    let on_track = move |_| {
        let entered = code.get_untracked();
        lookup.update(|l| *l = l.track(&entered));
        let shown = lookup.with_untracked(|l| l.is_shown());
        log!("tracking lookup for {:?}: shown={}", entered, shown);
    };

    let on_demo = move |_| {
        code.set(DEMO_TRACKING_CODE.to_string());
        lookup.set(TrackingLookup::default().track(DEMO_TRACKING_CODE));
    };

    view! {
        <div class="page page--tracking">
            <div class="tracking-header">
                <h1 class="page-header__title">"Track Your Order"</h1>
                <p class="text-muted">
                    "Enter your tracking number to see real-time updates on your SourceAnything order"
                </p>
            </div>

            <Card attr:class="tracking-input">
                <h3 class="card-title">{icon("search")}"Track Your Package"</h3>
                <div class="search-bar">
                    <Input value=code placeholder="Enter tracking number (e.g., TRK123456789)" />
                    <Button appearance=ButtonAppearance::Primary on_click=on_track>
                        {icon("search")}
                        "Track"
                    </Button>
                </div>
                <p class="text-muted text-small">
                    "You can find your tracking number in your order confirmation email"
                </p>
            </Card>

            <Show
                when=move || lookup.with(|l| l.is_shown())
                fallback=move || view! { <QuickAccess on_demo=on_demo /> }
            >
                <TrackingResult code=code />
            </Show>
        </div>
    }
}

#[component]
fn TrackingResult(code: RwSignal<String>) -> impl IntoView {
    let shipment = demo_shipment();
    let timeline = demo_timeline();
    let progress = timeline.progress_percent();
    let progress_rounded = timeline.progress_rounded();
    let delivery = shipment.estimated_delivery.format("%b %-d, %Y").to_string();
    let summary = shipment.clone();

    view! {
        <div class="tracking-result">
            <Card>
                <div class="card-header-row">
                    <h3 class="card-title">{icon("package")}"Order Details"</h3>
                    <StatusBadge tone=BadgeTone::Primary label="In Transit" icon_name="truck" />
                </div>
                <div class="shipment-summary">
                    <div>
                        <h3>{shipment.product}</h3>
                        <p class="text-muted">{shipment.blurb}</p>
                        <div class="shipment-summary__codes">
                            <span>{format!("Order: {}", shipment.order_id)}</span>
                            <span>"•"</span>
                            <span>
                                {move || {
                                    let entered = code.get();
                                    format!("Tracking: {}", summary.display_code(&entered))
                                }}
                            </span>
                        </div>
                    </div>
                    <div class="shipment-summary__route">
                        <div class="fact">{icon("map-pin")}<span>{format!("From: {}", shipment.origin)}</span></div>
                        <div class="fact">{icon("map-pin")}<span>{format!("To: {}", shipment.destination)}</span></div>
                        <div class="fact">{icon("calendar")}<span>{format!("Est. Delivery: {}", delivery)}</span></div>
                    </div>
                </div>

                <div class="delivery-progress">
                    <div class="delivery-progress__labels">
                        <span>"Delivery Progress"</span>
                        <span>{format!("{}% Complete", progress_rounded)}</span>
                    </div>
                    <ProgressBar value=progress size="lg" />
                </div>
            </Card>

            <Card>
                <h3 class="card-title">{icon("clock")}"Tracking Timeline"</h3>
                <TimelineView timeline=timeline />
            </Card>

            <Card attr:class="support-card">
                <h3>"Need Help?"</h3>
                <p class="text-muted">
                    "If you have any questions about your order, our AI-powered support is here to help 24/7"
                </p>
                <Button appearance=ButtonAppearance::Secondary>"Contact Support"</Button>
            </Card>
        </div>
    }
}

#[component]
fn TimelineView(timeline: Timeline) -> impl IntoView {
    let rows = timeline
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let state = step.state();
            let connector = timeline.has_connector(index).then(|| {
                let class = if step.completed {
                    "timeline__connector timeline__connector--done"
                } else {
                    "timeline__connector"
                };
                view! { <div class=class></div> }
            });

            view! {
                <div class="timeline__row">
                    <div class="timeline__rail">
                        <div class=marker_class(state)>{icon(marker_icon(state))}</div>
                        {connector}
                    </div>
                    <div class="timeline__body">
                        <div class="timeline__heading">
                            <h4 class=label_class(state)>
                                {step.label.clone()}
                            </h4>
                            <span class="text-muted text-small">{step.date.format("%Y-%m-%d").to_string()}</span>
                        </div>
                        {(state == StepState::Current).then(|| view! {
                            <p class="timeline__note">
                                "Your package is currently in transit and on its way to you"
                            </p>
                        })}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="timeline">{rows}</div> }
}

#[component]
fn QuickAccess<F>(on_demo: F) -> impl IntoView
where
    F: Fn(leptos::ev::MouseEvent) + Send + Sync + 'static,
{
    view! {
        <div class="quick-access">
            <Card attr:class="quick-access__card">
                <div class="quick-access__icon">{icon("package")}</div>
                <h3>"Sample Tracking"</h3>
                <p class="text-muted text-small">"See how our tracking works"</p>
                <Button appearance=ButtonAppearance::Secondary size=ButtonSize::Small on_click=on_demo>
                    "Try Demo"
                </Button>
            </Card>
            <Card attr:class="quick-access__card">
                <div class="quick-access__icon quick-access__icon--success">{icon("truck")}</div>
                <h3>"Fast Delivery"</h3>
                <p class="text-muted text-small">"Average delivery time: 5-7 days globally"</p>
            </Card>
            <Card attr:class="quick-access__card">
                <div class="quick-access__icon quick-access__icon--accent">{icon("check-circle")}</div>
                <h3>"Reliable Service"</h3>
                <p class="text-muted text-small">"99.5% successful delivery rate"</p>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_follows_step_state() {
        let timeline = demo_timeline();
        let states: Vec<StepState> = timeline.steps.iter().map(|s| s.state()).collect();

        assert_eq!(marker_icon(states[0]), "check-circle");
        assert_eq!(marker_icon(states[4]), "clock");
        assert_eq!(marker_icon(states[6]), "alert-circle");
        assert!(marker_class(states[4]).ends_with("--current"));
    }
}
