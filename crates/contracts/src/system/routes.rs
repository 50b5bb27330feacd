//! Route table and the admin route guard

use serde::{Deserialize, Serialize};

use super::auth::AdminSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppRoute {
    Sourcing,
    Orders,
    Tracking,
    Analytics,
    AdminLogin,
    AdminDashboard,
    AdminUsers,
    AdminSuppliers,
    NotFound,
}

impl AppRoute {
    /// Every routable page, fallback excluded
    pub fn all() -> Vec<AppRoute> {
        vec![
            AppRoute::Sourcing,
            AppRoute::Orders,
            AppRoute::Tracking,
            AppRoute::Analytics,
            AppRoute::AdminLogin,
            AppRoute::AdminDashboard,
            AppRoute::AdminUsers,
            AppRoute::AdminSuppliers,
        ]
    }

    /// Path of the page; the fallback has none
    pub fn path(&self) -> Option<&'static str> {
        match self {
            AppRoute::Sourcing => Some("/"),
            AppRoute::Orders => Some("/orders"),
            AppRoute::Tracking => Some("/tracking"),
            AppRoute::Analytics => Some("/analytics"),
            AppRoute::AdminLogin => Some("/admin-login"),
            AppRoute::AdminDashboard => Some("/admin"),
            AppRoute::AdminUsers => Some("/admin/users"),
            AppRoute::AdminSuppliers => Some("/admin/suppliers"),
            AppRoute::NotFound => None,
        }
    }

    /// Exact match on the pathname; a single trailing slash is tolerated
    pub fn from_path(path: &str) -> AppRoute {
        let normalized = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        AppRoute::all()
            .into_iter()
            .find(|route| route.path() == Some(normalized))
            .unwrap_or(AppRoute::NotFound)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Sourcing => "AI Sourcing",
            AppRoute::Orders => "Orders",
            AppRoute::Tracking => "Tracking",
            AppRoute::Analytics => "Analytics",
            AppRoute::AdminLogin => "Admin Login",
            AppRoute::AdminDashboard => "Dashboard",
            AppRoute::AdminUsers => "User Management",
            AppRoute::AdminSuppliers => "Supplier Network",
            AppRoute::NotFound => "Not Found",
        }
    }

    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            AppRoute::AdminDashboard | AppRoute::AdminUsers | AppRoute::AdminSuppliers
        )
    }

    /// Pages rendered inside the sidebar + header shell
    pub fn uses_shell(&self) -> bool {
        !matches!(
            self,
            AppRoute::Tracking | AppRoute::AdminLogin | AppRoute::NotFound
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(AppRoute),
}

/// Decide whether `route` may render for `session`
pub fn guard(route: AppRoute, session: &AdminSession) -> GuardDecision {
    if route.requires_admin() && !session.is_authenticated() {
        GuardDecision::Redirect(AppRoute::AdminLogin)
    } else {
        GuardDecision::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::SessionToken;

    #[test]
    fn test_every_route_resolves_from_its_path() {
        for route in AppRoute::all() {
            let path = route.path().unwrap();
            assert_eq!(AppRoute::from_path(path), route, "path {}", path);
        }
    }

    #[test]
    fn test_unknown_paths_fall_back() {
        assert_eq!(AppRoute::from_path("/admin/payments"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/orders/1"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/orders/"), AppRoute::Orders);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Sourcing);
    }

    #[test]
    fn test_near_miss_paths_fall_back() {
        assert_eq!(AppRoute::from_path("/admin/user"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/Orders"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/admin-login/"), AppRoute::AdminLogin);
    }

    #[test]
    fn test_public_routes_ignore_session_changes() {
        let anonymous = AdminSession::Unauthenticated;
        let session = AdminSession::Authenticated(SessionToken::restored());
        for route in AppRoute::all().into_iter().filter(|r| !r.requires_admin()) {
            assert_eq!(guard(route, &anonymous), guard(route, &session));
        }
    }

    #[test]
    fn test_guard_redirects_admin_routes_without_session() {
        let anonymous = AdminSession::Unauthenticated;
        assert_eq!(
            guard(AppRoute::AdminDashboard, &anonymous),
            GuardDecision::Redirect(AppRoute::AdminLogin)
        );
        assert_eq!(
            guard(AppRoute::AdminUsers, &anonymous),
            GuardDecision::Redirect(AppRoute::AdminLogin)
        );
        assert_eq!(guard(AppRoute::Orders, &anonymous), GuardDecision::Render);
        assert_eq!(guard(AppRoute::AdminLogin, &anonymous), GuardDecision::Render);
    }

    #[test]
    fn test_guard_renders_admin_routes_with_session() {
        let session = AdminSession::Authenticated(SessionToken::restored());
        for route in AppRoute::all() {
            assert_eq!(guard(route, &session), GuardDecision::Render);
        }
    }

    #[test]
    fn test_shell_usage() {
        assert!(AppRoute::Sourcing.uses_shell());
        assert!(AppRoute::AdminSuppliers.uses_shell());
        assert!(!AppRoute::Tracking.uses_shell());
        assert!(!AppRoute::AdminLogin.uses_shell());
        assert!(!AppRoute::NotFound.uses_shell());
    }
}
