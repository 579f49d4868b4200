//! Domain Services
//!
//! Pure functions: role → dashboard resolution and the route guard decision
//! table. Both enforcement points (edge middleware and page guard) call into
//! this module; neither carries its own copy of the rules.

pub mod dashboard;
pub mod route_guard;

pub use dashboard::{DASHBOARD_ROOT, LOGIN_PATH, dashboard_path_for};
pub use route_guard::{GuardDecision, evaluate};
