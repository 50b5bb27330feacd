pub mod global_context;
pub mod left;
pub mod toast_service;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell shared by the platform and admin pages.
///
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// |  (Left)   |           Content            |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <left::Left>
                <left::sidebar::Sidebar />
            </left::Left>

            <div class="app-body">
                <TopHeader />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
