use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use contracts::domain::a005_user_account::mock::mock_users;
use contracts::domain::a005_user_account::UserAccount;
use contracts::enums::UserRole;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Card, Flex, FlexAlign, FlexGap, Input};

#[component]
#[allow(non_snake_case)]
pub fn UserManagementPage() -> impl IntoView {
    // Bound to the input only; the list is not filtered
    let search = RwSignal::new(String::new());

    view! {
        <div class="page page--users">
            <PageHeader
                title="User Management"
                subtitle="Manage platform users and their permissions".to_string()
            >
                <Button appearance=ButtonAppearance::Primary>
                    {icon("user-plus")}
                    "Add User"
                </Button>
            </PageHeader>

            <Card>
                <div class="card-header-row">
                    <h3 class="card-title">{icon("users")}"All Users"</h3>
                    <Flex class="search-bar" align=FlexAlign::Center gap=FlexGap::Medium>
                        <Input value=search placeholder="Search users..." />
                        <Button appearance=ButtonAppearance::Secondary>
                            {icon("search")}
                            "Search"
                        </Button>
                    </Flex>
                </div>

                <div class="user-list">
                    {mock_users()
                        .into_iter()
                        .map(|user| view! { <UserRow user=user /> })
                        .collect_view()}
                </div>
            </Card>
        </div>
    }
}

#[component]
fn UserRow(user: UserAccount) -> impl IntoView {
    let initials = user.initials();
    let role = user.role;
    let status = user.status;
    let joined = user.joined.format("%Y-%m-%d").to_string();

    let role_badge = if role == UserRole::Admin {
        view! { <StatusBadge tone=role.tone() label=role.display_name() icon_name="shield" /> }.into_any()
    } else {
        view! { <StatusBadge tone=role.tone() label=role.display_name() /> }.into_any()
    };

    view! {
        <div class="user-row">
            <div class="user-row__main">
                <div class="avatar">{initials}</div>
                <div>
                    <div class="user-row__title">
                        <h3>{user.name}</h3>
                        {role_badge}
                        <StatusBadge tone=status.tone() label=status.code() />
                    </div>
                    <div class="user-row__meta text-muted text-small">
                        <span class="fact">{icon("mail")}{user.email}</span>
                        <span class="fact">{icon("calendar")}{format!("Joined {}", joined)}</span>
                        <span>{format!("{} orders", user.orders)}</span>
                    </div>
                </div>
            </div>
            <div class="user-row__actions">
                <Button appearance=ButtonAppearance::Subtle attr:title="Edit">{icon("edit")}</Button>
                <Button appearance=ButtonAppearance::Subtle attr:title="Delete">{icon("trash")}</Button>
                <Button appearance=ButtonAppearance::Subtle attr:title="More">{icon("more-horizontal")}</Button>
            </div>
        </div>
    }
}
