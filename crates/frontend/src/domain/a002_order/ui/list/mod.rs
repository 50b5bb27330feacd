use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use contracts::domain::a002_order::mock::mock_orders;
use contracts::domain::a002_order::Order;
use contracts::shared::format::format_price;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Button, ButtonAppearance, Card, Flex, FlexAlign, FlexGap, Input};

#[component]
#[allow(non_snake_case)]
pub fn OrdersPage() -> impl IntoView {
    // Bound to the input only; the list is not filtered
    let search = RwSignal::new(String::new());

    let orders = mock_orders();
    let is_empty = orders.is_empty();

    view! {
        <div class="page page--orders">
            <PageHeader
                title="My Orders"
                subtitle="Track all your AI-sourced products and deliveries".to_string()
            >
                <Flex class="search-bar" align=FlexAlign::Center gap=FlexGap::Medium>
                    <Input value=search placeholder="Search orders..." />
                    <Button appearance=ButtonAppearance::Secondary>
                        {icon("search")}
                        "Search"
                    </Button>
                </Flex>
            </PageHeader>

            <div class="card-grid">
                {orders
                    .into_iter()
                    .map(|order| view! { <OrderCard order=order /> })
                    .collect_view()}
            </div>

            {is_empty.then(|| view! {
                <Card attr:class="empty-state">
                    <div class="empty-state__icon">{icon("package")}</div>
                    <h3>"No Orders Yet"</h3>
                    <p class="text-muted">"Start by sourcing your first product with our AI assistant"</p>
                    <A href="/">
                        <span class="btn-primary">"Start Sourcing"</span>
                    </A>
                </Card>
            })}
        </div>
    }
}

#[component]
fn OrderCard(order: Order) -> impl IntoView {
    let status = order.status;
    let can_review = order.can_review();
    let delivery = order.estimated_delivery.format("%Y-%m-%d").to_string();

    view! {
        <Card attr:class="order-card">
            <div class="order-card__header">
                <div>
                    <div class="order-card__title-row">
                        <h3>{order.product}</h3>
                        <StatusBadge tone=status.tone() label=status.display_name() icon_name=status.icon() />
                    </div>
                    <div class="order-card__meta text-muted">
                        <span>{format!("Order: {}", order.id)}</span>
                        <span>"•"</span>
                        <span>{format!("Tracking: {}", order.tracking)}</span>
                    </div>
                </div>
                <div class="order-card__total">
                    <div class="order-card__price">{format_price(order.price)}</div>
                    <div class="text-muted">"Total"</div>
                </div>
            </div>

            <div class="order-card__facts">
                <div class="fact">{icon("package")}<span>{order.supplier}</span></div>
                <div class="fact">{icon("clock")}<span>{format!("Est. Delivery: {}", delivery)}</span></div>
                <div class="fact">{icon("map-pin")}<span>"Tracking Available"</span></div>
            </div>

            <div class="order-card__actions">
                <A href="/tracking">
                    <span class="btn-outline">{icon("truck")}"Track Package"</span>
                </A>
                <Button appearance=ButtonAppearance::Secondary>
                    {icon("external-link")}
                    "View Details"
                </Button>
                {can_review.then(|| view! {
                    <Button appearance=ButtonAppearance::Primary>"Rate & Review"</Button>
                })}
            </div>
        </Card>
    }
}
