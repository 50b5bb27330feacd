//! Sidebar menu definition

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub items: Vec<NavItem>,
    pub admin: bool,
}

pub fn menu_groups() -> Vec<NavGroup> {
    vec![
        NavGroup {
            id: "main",
            label: "Main Platform",
            items: vec![
                NavItem { title: "AI Sourcing", url: "/", icon: "bot" },
                NavItem { title: "Orders", url: "/orders", icon: "package" },
                NavItem { title: "Tracking", url: "/tracking", icon: "truck" },
                NavItem { title: "Analytics", url: "/analytics", icon: "bar-chart" },
            ],
            admin: false,
        },
        NavGroup {
            id: "admin",
            label: "Admin Panel",
            items: vec![
                NavItem { title: "Dashboard", url: "/admin", icon: "bar-chart" },
                NavItem { title: "User Management", url: "/admin/users", icon: "users" },
                NavItem { title: "Supplier Network", url: "/admin/suppliers", icon: "target" },
                NavItem { title: "Payments", url: "/admin/payments", icon: "dollar-sign" },
                NavItem { title: "Reports", url: "/admin/reports", icon: "file-text" },
                NavItem { title: "System Settings", url: "/admin/settings", icon: "settings" },
            ],
            admin: true,
        },
    ]
}

/// Menu highlight uses exact path equality
pub fn is_active(current_path: &str, item: &NavItem) -> bool {
    current_path == item.url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::routes::AppRoute;

    #[test]
    fn test_menu_shape() {
        let groups = menu_groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].items.len(), 4);
        assert_eq!(groups[1].items.len(), 6);
    }

    #[test]
    fn test_unbuilt_admin_pages_hit_fallback() {
        let admin = &menu_groups()[1];
        let missing: Vec<_> = admin
            .items
            .iter()
            .filter(|i| AppRoute::from_path(i.url) == AppRoute::NotFound)
            .map(|i| i.title)
            .collect();
        assert_eq!(missing, vec!["Payments", "Reports", "System Settings"]);
    }

    #[test]
    fn test_built_menu_items_resolve_to_their_page() {
        for item in menu_groups().iter().flat_map(|g| g.items.iter()) {
            let route = AppRoute::from_path(item.url);
            if route != AppRoute::NotFound {
                assert_eq!(route.path(), Some(item.url));
                assert_eq!(route.title(), item.title);
            }
        }
    }

    #[test]
    fn test_active_is_exact() {
        let groups = menu_groups();
        let dashboard = &groups[1].items[0];
        assert!(is_active("/admin", dashboard));
        assert!(!is_active("/admin/users", dashboard));
    }
}
