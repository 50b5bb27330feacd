use contracts::system::routes::{guard, AppRoute, GuardDecision};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders `children` when the guard lets `route` through, otherwise
/// redirects to the page the guard names.
///
/// The decision is memoized, so auth writes that keep it unchanged do not
/// remount the page.
#[component]
pub fn RequireAdmin(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let decision = Memo::new(move |_| auth_state.with(|s| guard(route, &s.session)));

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(target) => {
            let path = target.path().unwrap_or("/");
            log::info!("{} requires an admin session, redirecting to {}", route.title(), path);
            view! { <Redirect path=path /> }.into_any()
        }
    }
}
