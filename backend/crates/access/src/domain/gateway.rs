//! Collaborator Traits
//!
//! The external backend auth API, navigation, and the realtime socket.
//! Implementations live in `infra/` (and as fakes in tests).

use serde::Serialize;
use std::fmt;
use std::future::Future;

use crate::domain::entity::user_profile::UserProfile;
use crate::domain::value_object::auth_token::AuthToken;
use crate::error::AccessResult;

/// Login credentials
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Successful login as reported by the backend
#[derive(Debug, Clone)]
pub struct AuthGrant {
    pub user: UserProfile,
    pub token: AuthToken,
}

/// Upstream response relayed verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct Relayed {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Backend auth API
#[trait_variant::make(AuthApi: Send)]
pub trait LocalAuthApi {
    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> AccessResult<AuthGrant>;

    /// `POST /auth/logout`
    async fn logout(&self, token: &AuthToken) -> AccessResult<()>;

    /// `POST /auth/send-reset-password`
    async fn send_reset_password(&self, body: &serde_json::Value) -> AccessResult<Relayed>;

    /// `POST /auth/reset-password`
    async fn reset_password(&self, body: &serde_json::Value) -> AccessResult<Relayed>;
}

/// Navigation sink. Guards and logout only ever replace the current entry.
pub trait Navigator: Send + Sync {
    fn replace(&self, path: &str);
}

/// Opens and closes the realtime messaging connection.
pub trait Connector: Send + Sync {
    type Connection: Send + 'static;

    fn open(
        &self,
        token: &AuthToken,
    ) -> impl Future<Output = AccessResult<Self::Connection>> + Send;

    fn close(&self, connection: Self::Connection) -> impl Future<Output = ()> + Send;
}
