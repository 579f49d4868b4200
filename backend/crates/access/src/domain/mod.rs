//! Domain Layer
//!
//! Entities, value objects, pure services and the traits of the
//! collaborators the access layer talks to.

pub mod entity;
pub mod gateway;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::{Session, SessionState, UserProfile};
pub use gateway::{AuthApi, Connector, Navigator};
pub use repository::SessionStore;
