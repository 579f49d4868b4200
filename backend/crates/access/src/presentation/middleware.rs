//! Access Middleware
//!
//! - `guard_protected_routes`: edge enforcement of the route guard
//! - `provide_auth_context`: per-request auth context for page handlers
//! - `CurrentAuth`: extractor for the provided context

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;
use axum::http::{HeaderValue, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::{Arc, Mutex};

use crate::application::auth_context::{AuthContext, lock_store};
use crate::application::config::AccessConfig;
use crate::domain::entity::{Session, SessionState};
use crate::domain::gateway::{AuthApi, Navigator};
use crate::domain::repository::SessionStore;
use crate::domain::services::dashboard::is_protected;
use crate::domain::services::{GuardDecision, LOGIN_PATH, evaluate};
use crate::error::AccessError;
use crate::infra::cookie_store::CookieSessionStore;
use crate::presentation::handlers::AccessAppState;

/// Auth context bound to one request's cookies
pub type RequestAuthContext<A> = AuthContext<CookieSessionStore, A>;

// ============================================================================
// Edge guard
// ============================================================================

/// Redirect before any handler runs when the cookie session does not grant
/// the requested path. Non-protected paths pass through without reading
/// cookies.
pub async fn guard_protected_routes(
    State(config): State<Arc<AccessConfig>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    if !is_protected(&path) {
        return next.run(req).await;
    }

    let mut store = CookieSessionStore::from_headers(req.headers(), &config);
    let session = Session::from_profile(store.read());
    let decision = evaluate(&path, &SessionState::Ready(session));

    let mut response = match decision {
        GuardDecision::Allow => next.run(req).await,
        other => {
            // A ready session never yields Pending
            let target = other.redirect_target().unwrap_or(LOGIN_PATH);
            tracing::debug!(path = %path, target, "Edge guard redirect");
            Redirect::to(target).into_response()
        }
    };

    append_set_cookies(&mut response, store.take_set_cookies());
    response
}

// ============================================================================
// Auth context provider
// ============================================================================

/// Navigator that turns `replace` into a redirect on the current response.
#[derive(Debug, Default)]
pub struct ResponseNavigator {
    target: Mutex<Option<String>>,
}

impl ResponseNavigator {
    /// Last requested target, if any
    pub fn take(&self) -> Option<String> {
        self.target
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl Navigator for ResponseNavigator {
    fn replace(&self, path: &str) {
        *self
            .target
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(path.to_string());
    }
}

/// Build an auth context over the request cookies, start its hydration and
/// expose it to handlers through request extensions.
pub async fn provide_auth_context<A>(
    State(state): State<AccessAppState<A>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    A: AuthApi + Send + Sync + 'static,
{
    let store = Arc::new(Mutex::new(CookieSessionStore::from_headers(
        req.headers(),
        &state.config,
    )));
    let navigator = Arc::new(ResponseNavigator::default());
    let context: Arc<RequestAuthContext<A>> =
        AuthContext::new(store.clone(), state.api.clone(), navigator.clone());

    let hydration = context.hydrate();
    req.extensions_mut().insert(context.clone());

    let mut response = next.run(req).await;

    // Settle hydration so cookie repairs it staged reach the client
    if let Some(handle) = hydration {
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Auth context hydration task failed");
        }
    }

    if let Some(target) = navigator.take() {
        response = Redirect::to(&target).into_response();
    }

    let cookies = lock_store(&store).take_set_cookies();
    append_set_cookies(&mut response, cookies);
    response
}

/// Extractor for the auth context installed by [`provide_auth_context`].
///
/// Rejects with [`AccessError::ContextMissing`] when the provider layer is
/// absent.
pub struct CurrentAuth<A>(pub Arc<RequestAuthContext<A>>)
where
    A: AuthApi + Send + Sync + 'static;

impl<S, A> FromRequestParts<S> for CurrentAuth<A>
where
    S: Send + Sync,
    A: AuthApi + Send + Sync + 'static,
{
    type Rejection = AccessError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Arc<RequestAuthContext<A>>>()
            .cloned()
            .map(CurrentAuth)
            .ok_or(AccessError::ContextMissing)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn append_set_cookies(response: &mut Response, cookies: Vec<String>) {
    for cookie in cookies {
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!(error = %e, "Dropping invalid Set-Cookie value"),
        }
    }
}
