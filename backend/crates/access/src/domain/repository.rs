//! Repository Traits
//!
//! Persistence of the client-held session. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::{session::Session, user_profile::UserProfile};
use crate::domain::value_object::auth_token::AuthToken;
use crate::error::AccessResult;

/// Client-side session persistence (profile + bearer token).
pub trait SessionStore {
    /// Persist profile and token together
    fn write(&mut self, profile: &UserProfile, token: &AuthToken) -> AccessResult<()>;

    /// Stored profile; malformed entries are cleared and read as `None`
    fn read(&mut self) -> Option<UserProfile>;

    /// Stored bearer token
    fn token(&self) -> Option<AuthToken>;

    /// Remove profile and token (idempotent)
    fn clear(&mut self);

    fn session(&mut self) -> Session {
        Session::from_profile(self.read())
    }
}
