//! Presentation Layer
//!
//! HTTP handlers, pages, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod router;

pub use handlers::AccessAppState;
pub use middleware::{
    CurrentAuth, RequestAuthContext, ResponseNavigator, guard_protected_routes,
    provide_auth_context,
};
pub use pages::{View, guarded_view};
pub use router::{access_router, http_access_router};
