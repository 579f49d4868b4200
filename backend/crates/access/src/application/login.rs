//! Login Use Case
//!
//! Authenticates against the backend and persists the session.

use std::sync::Arc;

use crate::domain::entity::user_profile::UserProfile;
use crate::domain::gateway::{AuthApi, Credentials};
use crate::domain::repository::SessionStore;
use crate::domain::services::dashboard_path_for;
use crate::domain::value_object::user_role::UserRole;
use crate::error::{AccessError, AccessResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
    /// Roles this login surface accepts; `None` accepts every role
    pub allowed_roles: Option<Vec<UserRole>>,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: UserProfile,
    /// Dashboard the caller should navigate to
    pub redirect_to: &'static str,
}

/// Login use case
pub struct LoginUseCase<A>
where
    A: AuthApi,
{
    api: Arc<A>,
}

impl<A> LoginUseCase<A>
where
    A: AuthApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Nothing is written to `store` unless every check passes.
    pub async fn execute<S>(&self, input: LoginInput, store: &mut S) -> AccessResult<LoginOutput>
    where
        S: SessionStore + Send,
    {
        let email = input.email.trim();
        if email.is_empty() || input.password.is_empty() {
            return Err(AccessError::AuthRejected(
                "Email and password are required".to_string(),
            ));
        }

        let credentials = Credentials {
            email: email.to_string(),
            password: input.password,
        };

        let grant = self.api.login(&credentials).await?;

        if let Some(allowed) = &input.allowed_roles {
            if !allowed.contains(&grant.user.role) {
                tracing::info!(
                    user_id = %grant.user.id,
                    role = %grant.user.role,
                    "Login refused on restricted surface"
                );
                return Err(AccessError::RoleNotAllowed);
            }
        }

        store.write(&grant.user, &grant.token)?;

        let redirect_to = dashboard_path_for(Some(grant.user.role));

        tracing::info!(
            user_id = %grant.user.id,
            role = %grant.user.role,
            redirect_to,
            "User logged in"
        );

        Ok(LoginOutput {
            user: grant.user,
            redirect_to,
        })
    }
}
