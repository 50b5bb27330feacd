use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::ToastService;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

fn load_config() -> AppConfig {
    match AppConfig::load_embedded() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Embedded config rejected ({}), using defaults", e);
            AppConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::debug!("Starting SourceAI with {:?}", config);

    provide_context(ToastService::new(config.toast.timeout_ms));
    provide_context(AppGlobalContext::new());
    provide_context(config);

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
        </ConfigProvider>
    }
}
