//! Sidebar with the platform and admin navigation groups

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::system::navigation::{is_active, menu_groups, NavItem};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

fn nav_class(active: bool) -> &'static str {
    if active {
        "sidebar__item sidebar__item--active"
    } else {
        "sidebar__item"
    }
}

#[component]
fn SidebarLink(item: NavItem) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let pathname = use_location().pathname;

    let title = item.title;
    let url = item.url;
    let icon_name = item.icon;
    let active = move || is_active(&pathname.get(), &item);

    view! {
        <li>
            <a href=url class=move || nav_class(active()) title=title>
                {icon(icon_name)}
                <Show when=move || ctx.left_open.get()>
                    <span>{title}</span>
                </Show>
            </a>
        </li>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded = move || ctx.left_open.get();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                <div class="sidebar__logo">{icon("search")}</div>
                <Show when=expanded>
                    <span class="sidebar__brand-name">"SourceAI"</span>
                </Show>
            </div>

            {menu_groups()
                .into_iter()
                .map(|group| {
                    let label = group.label;
                    view! {
                        <div class="sidebar__group" data-group=group.id>
                            <div class="sidebar__group-label">
                                {group.admin.then(|| icon("shield"))}
                                <Show when=expanded>
                                    <span>{label}</span>
                                </Show>
                            </div>
                            <ul class="sidebar__menu">
                                {group
                                    .items
                                    .into_iter()
                                    .map(|item| view! { <SidebarLink item=item /> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_class() {
        assert_eq!(nav_class(true), "sidebar__item sidebar__item--active");
        assert_eq!(nav_class(false), "sidebar__item");
    }
}
