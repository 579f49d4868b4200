//! Entity Module

pub mod session;
pub mod user_profile;

pub use session::{Session, SessionState};
pub use user_profile::UserProfile;
