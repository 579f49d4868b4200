//! Route Guard decision table
//!
//! | session            | path                          | decision                      |
//! |--------------------|-------------------------------|-------------------------------|
//! | any                | not under `/dashboard`        | `Allow`                       |
//! | loading            | protected                     | `Pending`                     |
//! | anonymous          | protected                     | `RedirectToLogin`             |
//! | role `r`           | `/dashboard` root             | `RedirectTo(dashboard(r))`    |
//! | role `r`           | other role's area             | `RedirectTo(dashboard(r))`    |
//! | role `r`           | own area / unowned subpath    | `Allow`                       |

use crate::domain::entity::session::{Session, SessionState};
use crate::domain::services::dashboard::{
    LOGIN_PATH, dashboard_path_for, is_dashboard_root, is_protected, required_role,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet: show a neutral placeholder, decide nothing
    Pending,
    Allow,
    RedirectToLogin,
    RedirectTo(&'static str),
}

impl GuardDecision {
    /// Navigation target, if this decision redirects
    pub fn redirect_target(&self) -> Option<&'static str> {
        match self {
            GuardDecision::RedirectToLogin => Some(LOGIN_PATH),
            GuardDecision::RedirectTo(path) => Some(*path),
            GuardDecision::Pending | GuardDecision::Allow => None,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Evaluate the guard for a navigation to `path`.
pub fn evaluate(path: &str, state: &SessionState) -> GuardDecision {
    if !is_protected(path) {
        return GuardDecision::Allow;
    }

    let profile = match state {
        SessionState::Loading => return GuardDecision::Pending,
        SessionState::Ready(Session::Anonymous) => return GuardDecision::RedirectToLogin,
        SessionState::Ready(Session::Authenticated(profile)) => profile,
    };

    let home = dashboard_path_for(Some(profile.role));

    if is_dashboard_root(path) {
        return GuardDecision::RedirectTo(home);
    }

    match required_role(path) {
        Some(required) if required != profile.role => GuardDecision::RedirectTo(home),
        _ => GuardDecision::Allow,
    }
}
