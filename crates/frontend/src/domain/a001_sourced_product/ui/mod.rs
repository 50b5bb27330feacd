use contracts::domain::a001_sourced_product::{
    SourcedProduct, SourcingError, SourcingFeed, SourcingPrompt, SOURCING_DELAY_MS,
};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, Card, Textarea};

use super::task::SourcingTask;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::ui::{ProgressBar, StatusBadge};
use crate::shared::icons::icon;

/// Percentage shown while a request is in flight
const PROCESSING_PROGRESS: f64 = 66.0;

/// AI sourcing page: free-text prompt in, synthesized offers out
#[component]
pub fn SourcingPage() -> impl IntoView {
    let toasts = use_toasts();

    let prompt = RwSignal::new(String::new());
    let processing = RwSignal::new(false);
    let feed = RwSignal::new(SourcingFeed::new());
    let current_task = StoredValue::new(None::<SourcingTask>);

    on_cleanup(move || {
        current_task.try_with_value(|task| {
            if let Some(task) = task {
                task.cancel();
            }
        });
    });

    let can_submit = Signal::derive(move || {
        !processing.get() && SourcingPrompt::parse(&prompt.get()).is_ok()
    });

    let on_source = move |_| {
        if processing.get_untracked() {
            return;
        }
        let parsed = match SourcingPrompt::parse(&prompt.get_untracked()) {
            Ok(p) => p,
            Err(_) => return,
        };

        processing.set(true);
        toasts.info("AI is sourcing your request...");
        log::debug!("Sourcing started: {:?}", parsed.as_str());

        let task = SourcingTask::spawn(parsed, SOURCING_DELAY_MS, move |result| {
            match result {
                Ok(product) => {
                    log::info!(
                        "Sourced offer {} ({}% match)",
                        product.id.as_string(),
                        product.confidence
                    );
                    feed.update(|f| f.prepend(product));
                    prompt.set(String::new());
                    processing.set(false);
                    toasts.success("Product sourced successfully!");
                }
                Err(SourcingError::Cancelled) => {
                    log::debug!("Sourcing task cancelled");
                }
                Err(e) => {
                    log::warn!("Sourcing failed: {}", e);
                    processing.set(false);
                }
            }
        });
        current_task.set_value(Some(task));
    };

    view! {
        <div class="page page--sourcing">
            <div class="hero">
                <div class="hero__badge">{icon("bot")}</div>
                <h1 class="hero__title">"AI-Powered Product Sourcing"</h1>
                <p class="hero__subtitle">
                    "Describe anything you need, and our AI will source it globally with automated payment and tracking"
                </p>

                <Card attr:class="hero__input">
                    <Textarea
                        value=prompt
                        placeholder="Describe what you need... (e.g., 'High-quality wireless headphones with noise cancellation under $200' or 'Organic cotton t-shirts for a small business, bulk order')"
                        disabled=processing
                        attr:rows=4
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Large
                        block=true
                        disabled=Signal::derive(move || !can_submit.get())
                        on_click=on_source
                    >
                        {move || if processing.get() {
                            view! { <>{icon("sparkles")}"AI is Sourcing..."</> }.into_any()
                        } else {
                            view! { <>{icon("send")}"Source with AI"</> }.into_any()
                        }}
                    </Button>
                </Card>
            </div>

            <Show when=move || processing.get()>
                <ProcessingCard />
            </Show>

            <Show when=move || !feed.with(|f| f.is_empty())>
                <div class="sourced-list">
                    <h2>"Sourced Products"</h2>
                    <For
                        each=move || feed.with(|f| f.items().to_vec())
                        key=|product| product.id
                        children=|product| view! { <SourcedProductCard product=product /> }
                    />
                </div>
            </Show>

            <Show when=move || feed.with(|f| f.is_empty()) && !processing.get()>
                <Card attr:class="empty-state">
                    <div class="empty-state__icon">{icon("bot")}</div>
                    <h3>"Ready to Source Anything"</h3>
                    <p class="text-muted">
                        "Enter a description above and let our AI find the perfect products for you"
                    </p>
                </Card>
            </Show>
        </div>
    }
}

#[component]
fn ProcessingCard() -> impl IntoView {
    view! {
        <Card attr:class="processing-card">
            <div class="processing-card__title">
                {icon("sparkles")}
                <span>"AI Processing Your Request"</span>
            </div>
            <ProgressBar value=PROCESSING_PROGRESS size="md" />
            <div class="processing-card__steps text-muted">
                <div>"✓ Analyzing product requirements"</div>
                <div>"✓ Scanning global supplier network"</div>
                <div class="processing-card__pending">
                    <span class="pulse-dot"></span>
                    "Negotiating prices and terms"
                </div>
            </div>
        </Card>
    }
}

#[component]
fn SourcedProductCard(product: SourcedProduct) -> impl IntoView {
    let status = product.status;

    view! {
        <Card attr:class="sourced-card">
            <div class="sourced-card__header">
                <div>
                    <h3 class="sourced-card__title">{product.title}</h3>
                    <p class="text-muted">{product.description}</p>
                </div>
                <StatusBadge tone=status.tone() label=status.display_name() icon_name=status.icon() />
            </div>

            <div class="sourced-card__facts">
                <div class="fact fact--success">
                    {icon("dollar-sign")}
                    <span class="fact__strong">{format!("${}", product.price)}</span>
                </div>
                <div class="fact fact--info">
                    {icon("package")}
                    <span>{product.supplier}</span>
                </div>
                <div class="fact fact--primary">
                    {icon("truck")}
                    <span>{product.estimated_delivery}</span>
                </div>
                <div class="fact fact--warning">
                    {icon("sparkles")}
                    <span>{format!("{}% match", product.confidence)}</span>
                </div>
            </div>

            {status.is_actionable().then(|| view! {
                <div class="sourced-card__actions">
                    <Button appearance=ButtonAppearance::Secondary>"Request Details"</Button>
                    <Button appearance=ButtonAppearance::Primary>"Order Now"</Button>
                </div>
            })}
        </Card>
    }
}
