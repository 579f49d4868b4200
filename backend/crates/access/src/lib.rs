//! Access (session & role-aware routing) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session model, roles, route guard decision table, collaborator traits
//! - `application/` - Login/logout use cases, auth context, realtime connection manager
//! - `infra/` - Signed cookie store, backend HTTP client, websocket connector
//! - `presentation/` - JSON handlers, pages, middleware, router
//!
//! ## Access Model
//! - `/dashboard` and everything below it requires a session
//! - `/dashboard/{admin,host,customer}` additionally require the matching role
//! - The edge middleware is authoritative; pages re-check the same table
//! - Session profile lives in an HMAC-signed HttpOnly cookie, the bearer token next to it
//! - Corrupt or tampered cookies read as anonymous and are cleared

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccessConfig;
pub use error::{AccessError, AccessResult};
pub use infra::http_auth_api::HttpAuthApi;
pub use presentation::router::{access_router, http_access_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::auth_token::AuthToken;
    pub use crate::domain::value_object::user_role::UserRole;
    pub use crate::presentation::dto::*;
}

pub mod guard {
    pub use crate::domain::services::*;
    pub use crate::presentation::pages::{View, guarded_view};
}
