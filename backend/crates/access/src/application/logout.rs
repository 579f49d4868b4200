//! Logout Use Case
//!
//! Revokes the session upstream on a best-effort basis and always clears it
//! locally.

use std::sync::Arc;

use crate::domain::gateway::AuthApi;
use crate::domain::repository::SessionStore;
use crate::domain::services::LOGIN_PATH;
use crate::domain::value_object::auth_token::AuthToken;

/// Logout use case
pub struct LogoutUseCase<A>
where
    A: AuthApi,
{
    api: Arc<A>,
}

impl<A> LogoutUseCase<A>
where
    A: AuthApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Clear the session; returns where to navigate next. Never fails.
    pub async fn execute<S>(&self, store: &mut S) -> &'static str
    where
        S: SessionStore + Send,
    {
        let token = store.token();
        self.revoke(token.as_ref()).await;
        store.clear();

        tracing::info!("User logged out");
        LOGIN_PATH
    }

    /// Remote half of logout. Failures are logged and swallowed.
    pub async fn revoke(&self, token: Option<&AuthToken>) {
        let Some(token) = token else {
            tracing::debug!("No token to revoke, skipping remote logout");
            return;
        };

        if let Err(e) = self.api.logout(token).await {
            tracing::warn!(error = %e, "Remote logout failed, clearing local session anyway");
        }
    }
}
