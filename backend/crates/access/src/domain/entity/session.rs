//! Session Entity
//!
//! `Session` is what the client holds; `SessionState` adds the hydration
//! phase during which nothing is known yet.

use crate::domain::entity::user_profile::UserProfile;
use crate::domain::value_object::user_role::UserRole;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(UserProfile),
}

impl Session {
    pub fn from_profile(profile: Option<UserProfile>) -> Self {
        match profile {
            Some(profile) => Session::Authenticated(profile),
            None => Session::Anonymous,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Session::Authenticated(profile) => Some(profile),
            Session::Anonymous => None,
        }
    }

    pub fn into_profile(self) -> Option<UserProfile> {
        match self {
            Session::Authenticated(profile) => Some(profile),
            Session::Anonymous => None,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        self.profile().map(|profile| profile.role)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Hydration in flight
    #[default]
    Loading,
    Ready(Session),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Ready(session) => Some(session),
            SessionState::Loading => None,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session().and_then(Session::profile)
    }
}
