use contracts::shared::config::AppConfig;
use contracts::system::auth::{Credentials, DemoCredentialVerifier, DEMO_PASSWORD, DEMO_USERNAME};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::{Card, Spinner, SpinnerSize};

use crate::layout::toast_service::use_toasts;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let config = expect_context::<AppConfig>();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let credentials = Credentials::new(username.get_untracked(), password.get_untracked());
        let config = config.clone();
        let navigate = navigate.clone();
        set_is_loading.set(true);

        spawn_local(async move {
            let verifier = DemoCredentialVerifier::new();
            match do_login(&verifier, credentials, &config, set_auth_state).await {
                Ok(()) => {
                    toasts.success("Login successful! Redirecting...");
                    set_is_loading.set(false);
                    navigate("/admin", Default::default());
                }
                Err(e) => {
                    log::warn!("Admin login rejected: {}", e);
                    toasts.error(e.to_string());
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <Card attr:class="login-box">
                <div class="login-box__header">
                    <div class="login-box__badge">{icon("shield")}</div>
                    <h1>"Admin Access"</h1>
                    <p class="text-muted">"Secure login for SourceAnything administrators"</p>
                </div>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Enter admin username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <div class="password-field">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                id="password"
                                placeholder="Enter admin password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                            />
                            <button
                                type="button"
                                class="password-field__toggle"
                                title=move || if show_password.get() { "Hide password" } else { "Show password" }
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { icon("eye-off") } else { icon("eye") }}
                            </button>
                        </div>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary btn-block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() {
                            view! { <><Spinner size=SpinnerSize::Tiny />"Authenticating..."</> }.into_any()
                        } else {
                            view! { <>{icon("shield")}"Sign In"</> }.into_any()
                        }}
                    </button>

                    <div class="login-info">
                        <p>"Demo credentials:"</p>
                        <p>"Username: " <code>{DEMO_USERNAME}</code></p>
                        <p>"Password: " <code>{DEMO_PASSWORD}</code></p>
                    </div>
                </form>
            </Card>
        </div>
    }
}
