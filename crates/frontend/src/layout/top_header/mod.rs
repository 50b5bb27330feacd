//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, brand, notifications, avatar and, for an
//! authenticated admin, the sign-out button.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::use_toasts;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = expect_context::<AppConfig>();
    let toasts = use_toasts();
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let toggle_sidebar = move |_| ctx.toggle_left();

    let storage_key = config.auth.storage_key.clone();
    let logout = move |_| {
        do_logout(&storage_key, set_auth_state);
        toasts.info("Signed out");
        navigate("/admin-login", Default::default());
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let is_admin = move || auth_state.get().session.is_authenticated();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Collapse sidebar" } else { "Expand sidebar" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"SourceAI"</span>
            </div>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" title="Notifications">
                    {icon("bell")}
                </button>

                <div class="top-header__avatar">
                    {icon("user")}
                </div>

                <Show when=is_admin>
                    <button class="top-header__icon-btn" on:click=logout.clone() title="Sign out">
                        {icon("log-out")}
                    </button>
                </Show>
            </div>
        </header>
    }
}
