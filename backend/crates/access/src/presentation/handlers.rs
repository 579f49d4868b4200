//! HTTP Handlers (JSON API)

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{AppendHeaders, IntoResponse};
use std::sync::Arc;

use crate::application::config::AccessConfig;
use crate::application::{LoginInput, LoginUseCase, LogoutUseCase, PasswordResetUseCase};
use crate::domain::gateway::{AuthApi, Relayed};
use crate::domain::repository::SessionStore;
use crate::error::AccessResult;
use crate::infra::cookie_store::CookieSessionStore;
use crate::presentation::dto::{LoginRequest, LoginResponse, LogoutResponse, SessionResponse};

/// Shared state for access handlers
pub struct AccessAppState<A>
where
    A: AuthApi + Send + Sync + 'static,
{
    pub api: Arc<A>,
    pub config: Arc<AccessConfig>,
}

impl<A> Clone for AccessAppState<A>
where
    A: AuthApi + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Login / Logout
// ============================================================================

/// POST /api/auth/login
pub async fn login<A>(
    State(state): State<AccessAppState<A>>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> AccessResult<impl IntoResponse>
where
    A: AuthApi + Send + Sync + 'static,
{
    let mut store = CookieSessionStore::from_headers(&headers, &state.config);

    let input = LoginInput {
        email: req.email,
        password: req.password,
        allowed_roles: req.allowed_roles,
    };

    let output = LoginUseCase::new(state.api.clone())
        .execute(input, &mut store)
        .await?;

    Ok((
        StatusCode::OK,
        set_cookie_headers(&mut store),
        Json(LoginResponse {
            user: output.user,
            redirect_to: output.redirect_to.to_string(),
        }),
    ))
}

/// POST /api/auth/logout
pub async fn logout<A>(
    State(state): State<AccessAppState<A>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    A: AuthApi + Send + Sync + 'static,
{
    let mut store = CookieSessionStore::from_headers(&headers, &state.config);

    let redirect_to = LogoutUseCase::new(state.api.clone())
        .execute(&mut store)
        .await;

    (
        StatusCode::OK,
        set_cookie_headers(&mut store),
        Json(LogoutResponse {
            redirect_to: redirect_to.to_string(),
        }),
    )
}

// ============================================================================
// Session echo
// ============================================================================

/// GET /api/auth/session
pub async fn session<A>(
    State(state): State<AccessAppState<A>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    A: AuthApi + Send + Sync + 'static,
{
    let mut store = CookieSessionStore::from_headers(&headers, &state.config);
    let user = store.read();

    (
        set_cookie_headers(&mut store),
        Json(SessionResponse {
            authenticated: user.is_some(),
            user,
        }),
    )
}

// ============================================================================
// Password reset (relayed)
// ============================================================================

/// POST /api/auth/send-reset-password
pub async fn send_reset_password<A>(
    State(state): State<AccessAppState<A>>,
    Json(body): Json<serde_json::Value>,
) -> AccessResult<impl IntoResponse>
where
    A: AuthApi + Send + Sync + 'static,
{
    let relayed = PasswordResetUseCase::new(state.api.clone())
        .send_link(body)
        .await?;
    Ok(relay_response(relayed))
}

/// POST /api/auth/reset-password
pub async fn reset_password<A>(
    State(state): State<AccessAppState<A>>,
    Json(body): Json<serde_json::Value>,
) -> AccessResult<impl IntoResponse>
where
    A: AuthApi + Send + Sync + 'static,
{
    let relayed = PasswordResetUseCase::new(state.api.clone())
        .reset(body)
        .await?;
    Ok(relay_response(relayed))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// `Set-Cookie` headers staged on the store
pub(crate) fn set_cookie_headers(
    store: &mut CookieSessionStore,
) -> AppendHeaders<Vec<(HeaderName, String)>> {
    AppendHeaders(
        store
            .take_set_cookies()
            .into_iter()
            .map(|cookie| (header::SET_COOKIE, cookie))
            .collect(),
    )
}

fn relay_response(relayed: Relayed) -> impl IntoResponse {
    let status = StatusCode::from_u16(relayed.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(relayed.body))
}
