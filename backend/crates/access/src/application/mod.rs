//! Application Layer
//!
//! Use cases, the auth context and configuration.

pub mod auth_context;
pub mod config;
pub mod login;
pub mod logout;
pub mod password_reset;
pub mod realtime;

// Re-exports
pub use auth_context::AuthContext;
pub use config::AccessConfig;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use password_reset::PasswordResetUseCase;
pub use realtime::ConnectionManager;
