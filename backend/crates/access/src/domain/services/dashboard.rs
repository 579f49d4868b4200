//! Role Resolver and protected path conventions

use crate::domain::value_object::user_role::UserRole;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_ROOT: &str = "/dashboard";

const ADMIN_DASHBOARD: &str = "/dashboard/admin";
const HOST_DASHBOARD: &str = "/dashboard/host";
const CUSTOMER_DASHBOARD: &str = "/dashboard/customer";

impl UserRole {
    /// Canonical dashboard of this role
    #[inline]
    pub const fn dashboard_path(&self) -> &'static str {
        match self {
            UserRole::Admin => ADMIN_DASHBOARD,
            UserRole::Host => HOST_DASHBOARD,
            UserRole::Customer => CUSTOMER_DASHBOARD,
        }
    }
}

/// Dashboard for an optional role; unknown/absent falls back to customer.
#[inline]
pub const fn dashboard_path_for(role: Option<UserRole>) -> &'static str {
    match role {
        Some(role) => role.dashboard_path(),
        None => CUSTOMER_DASHBOARD,
    }
}

/// Remainder of `path` below `prefix`, matching whole segments only.
fn strip_segment_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

/// Any path at or below `/dashboard` requires a session.
pub fn is_protected(path: &str) -> bool {
    strip_segment_prefix(path, DASHBOARD_ROOT).is_some()
}

/// `/dashboard` or `/dashboard/`
pub fn is_dashboard_root(path: &str) -> bool {
    matches!(strip_segment_prefix(path, DASHBOARD_ROOT), Some("" | "/"))
}

/// Role owning the area `path` belongs to, if any.
pub fn required_role(path: &str) -> Option<UserRole> {
    UserRole::ALL
        .into_iter()
        .find(|role| strip_segment_prefix(path, role.dashboard_path()).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_path_for_every_role() {
        for role in UserRole::ALL {
            let path = dashboard_path_for(Some(role));
            assert_eq!(path, format!("/dashboard/{}", role.code()));
        }
    }

    #[test]
    fn test_dashboard_path_for_missing_role_is_customer() {
        assert_eq!(dashboard_path_for(None), "/dashboard/customer");
    }

    #[test]
    fn test_is_protected_is_segment_aware() {
        assert!(is_protected("/dashboard"));
        assert!(is_protected("/dashboard/"));
        assert!(is_protected("/dashboard/host/listings/42"));
        assert!(!is_protected("/dashboards"));
        assert!(!is_protected("/login"));
        assert!(!is_protected("/"));
    }

    #[test]
    fn test_dashboard_root_detection() {
        assert!(is_dashboard_root("/dashboard"));
        assert!(is_dashboard_root("/dashboard/"));
        assert!(!is_dashboard_root("/dashboard/admin"));
        assert!(!is_dashboard_root("/dashboard//"));
    }

    #[test]
    fn test_required_role_by_prefix() {
        assert_eq!(required_role("/dashboard/admin"), Some(UserRole::Admin));
        assert_eq!(required_role("/dashboard/admin/users"), Some(UserRole::Admin));
        assert_eq!(required_role("/dashboard/host/bookings"), Some(UserRole::Host));
        assert_eq!(required_role("/dashboard/customer"), Some(UserRole::Customer));
        assert_eq!(required_role("/dashboard/administrator"), None);
        assert_eq!(required_role("/dashboard"), None);
        assert_eq!(required_role("/listings"), None);
    }
}
