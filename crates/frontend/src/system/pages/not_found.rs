use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;

    Effect::new(move |_| {
        log::error!(
            "404 Error: User attempted to access non-existent route: {}",
            pathname.get()
        );
    });

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p class="text-muted">"Oops! Page not found"</p>
            <a href="/" class="not-found__home">"Return to Home"</a>
        </div>
    }
}
