//! HTTP client for the backend auth API

use reqwest::{Client, StatusCode, header};
use serde::Deserialize;

use crate::application::config::AccessConfig;
use crate::domain::entity::user_profile::UserProfile;
use crate::domain::gateway::{AuthApi, AuthGrant, Credentials, Relayed};
use crate::domain::value_object::auth_token::AuthToken;
use crate::error::{AccessError, AccessResult};

const DEFAULT_REJECTION: &str = "Invalid email or password";

/// Body of a successful `POST /auth/login`
#[derive(Debug, Deserialize)]
struct LoginReply {
    token: String,
    user: UserProfile,
}

/// Error body shape used by the backend
#[derive(Debug, Deserialize)]
struct ErrorReply {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &AccessConfig) -> AccessResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AccessError::Internal(format!("HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.backend_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn relay(&self, path: &str, body: &serde_json::Value) -> AccessResult<Relayed> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(network_failure)?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(network_failure)?;
        let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::json!({ "message": String::from_utf8_lossy(&bytes) })
        });

        tracing::debug!(path, status, "Relayed backend auth call");
        Ok(Relayed { status, body })
    }
}

fn network_failure(err: reqwest::Error) -> AccessError {
    AccessError::NetworkFailure(err.to_string())
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> AccessResult<AuthGrant> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()
            .await
            .map_err(network_failure)?;

        let status = response.status();

        if status.is_client_error() {
            let message = response
                .json::<ErrorReply>()
                .await
                .ok()
                .and_then(|reply| reply.message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_REJECTION.to_string());
            return Err(AccessError::AuthRejected(message));
        }

        if !status.is_success() {
            return Err(AccessError::NetworkFailure(format!(
                "backend answered {status} to login"
            )));
        }

        let reply = response
            .json::<LoginReply>()
            .await
            .map_err(|e| AccessError::NetworkFailure(format!("unreadable login reply: {e}")))?;

        let token = AuthToken::new(reply.token).ok_or_else(|| {
            AccessError::NetworkFailure("backend issued an empty token".to_string())
        })?;

        Ok(AuthGrant {
            user: reply.user,
            token,
        })
    }

    async fn logout(&self, token: &AuthToken) -> AccessResult<()> {
        let response = self
            .client
            .post(self.url("/auth/logout"))
            .header(header::AUTHORIZATION, token.bearer())
            .send()
            .await
            .map_err(network_failure)?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => {
                tracing::debug!("Backend already considered the token invalid");
                Ok(())
            }
            status => Err(AccessError::NetworkFailure(format!(
                "backend answered {status} to logout"
            ))),
        }
    }

    async fn send_reset_password(&self, body: &serde_json::Value) -> AccessResult<Relayed> {
        self.relay("/auth/send-reset-password", body).await
    }

    async fn reset_password(&self, body: &serde_json::Value) -> AccessResult<Relayed> {
        self.relay("/auth/reset-password", body).await
    }
}
