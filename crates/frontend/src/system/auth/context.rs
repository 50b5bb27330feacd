use contracts::shared::config::AppConfig;
use contracts::system::auth::{
    AdminSession, AuthError, CredentialVerifier, Credentials, LOGIN_DELAY_MS,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: AdminSession,
}

/// Auth context provider component.
///
/// Restores the admin session from localStorage once, on mount.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let stored = storage::get_admin_flag(&config.auth.storage_key);
    let session = AdminSession::from_stored_flag(stored.as_deref());
    if session.is_authenticated() {
        log::debug!("Admin session restored from localStorage");
    }

    let (auth_state, set_auth_state) = signal(AuthState { session });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login.
///
/// Waits `LOGIN_DELAY_MS` to mimic a round trip, then asks `verifier`. On success
/// the flag is persisted and the session published to the context.
pub async fn do_login<V: CredentialVerifier>(
    verifier: &V,
    credentials: Credentials,
    config: &AppConfig,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), AuthError> {
    TimeoutFuture::new(LOGIN_DELAY_MS).await;

    let token = verifier.verify(&credentials)?;
    let session = AdminSession::Authenticated(token);
    if let Some(flag) = session.stored_flag() {
        storage::save_admin_flag(&config.auth.storage_key, flag);
    }
    log::info!("Admin '{}' signed in", credentials.username);

    set_auth_state.set(AuthState { session });
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(storage_key: &str, set_auth_state: WriteSignal<AuthState>) {
    storage::clear_admin_flag(storage_key);
    set_auth_state.set(AuthState::default());
    log::info!("Admin signed out");
}
