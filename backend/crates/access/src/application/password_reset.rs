//! Password Reset Use Case
//!
//! Both steps of the reset flow belong to the backend; the gateway relays
//! them and passes the upstream answer through unchanged.

use std::sync::Arc;

use crate::domain::gateway::{AuthApi, Relayed};
use crate::error::{AccessError, AccessResult};

pub struct PasswordResetUseCase<A>
where
    A: AuthApi,
{
    api: Arc<A>,
}

impl<A> PasswordResetUseCase<A>
where
    A: AuthApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Ask the backend to mail a reset link
    pub async fn send_link(&self, body: serde_json::Value) -> AccessResult<Relayed> {
        Self::require_object(&body)?;
        self.api.send_reset_password(&body).await
    }

    /// Submit the new password together with the reset token
    pub async fn reset(&self, body: serde_json::Value) -> AccessResult<Relayed> {
        Self::require_object(&body)?;
        self.api.reset_password(&body).await
    }

    fn require_object(body: &serde_json::Value) -> AccessResult<()> {
        if body.is_object() {
            Ok(())
        } else {
            Err(AccessError::BadRequest("expected a JSON object".to_string()))
        }
    }
}
