use crate::dashboards::d400_analytics::AnalyticsPage;
use crate::dashboards::d401_admin_overview::AdminOverviewPage;
use crate::domain::a001_sourced_product::ui::SourcingPage;
use crate::domain::a002_order::ui::list::OrdersPage;
use crate::domain::a003_tracking::ui::TrackingPage;
use crate::domain::a004_supplier::ui::list::SupplierNetworkPage;
use crate::domain::a005_user_account::ui::list::UserManagementPage;
use crate::layout::toast_service::ToastHost;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAdmin;
use crate::system::pages::login::AdminLoginPage;
use crate::system::pages::not_found::NotFoundPage;
use contracts::system::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

fn page_view(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Sourcing => view! { <SourcingPage /> }.into_any(),
        AppRoute::Orders => view! { <OrdersPage /> }.into_any(),
        AppRoute::Tracking => view! { <TrackingPage /> }.into_any(),
        AppRoute::Analytics => view! { <AnalyticsPage /> }.into_any(),
        AppRoute::AdminLogin => view! { <AdminLoginPage /> }.into_any(),
        AppRoute::AdminDashboard => view! { <AdminOverviewPage /> }.into_any(),
        AppRoute::AdminUsers => view! { <UserManagementPage /> }.into_any(),
        AppRoute::AdminSuppliers => view! { <SupplierNetworkPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

/// Page for `route`, behind the admin guard where the route asks for it
fn guarded_view(route: AppRoute) -> AnyView {
    if route.requires_admin() {
        view! { <RequireAdmin route=route>{page_view(route)}</RequireAdmin> }.into_any()
    } else {
        page_view(route)
    }
}

/// Resolves the current pathname through [`AppRoute::from_path`] and
/// renders the matching page, inside the shell where the route uses one
#[component]
fn RoutedPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let route = Memo::new(move |_| AppRoute::from_path(&pathname.get()));

    move || {
        let route = route.get();
        log::debug!("Rendering {} page", route.title());
        if route.uses_shell() {
            view! { <Shell>{guarded_view(route)}</Shell> }.into_any()
        } else {
            guarded_view(route)
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <ToastHost />
            <Routes fallback=|| view! { <RoutedPage /> }>
                <Route path=path!("/*any") view=RoutedPage />
            </Routes>
        </Router>
    }
}
