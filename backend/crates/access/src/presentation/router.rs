//! Access Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AccessConfig;
use crate::domain::gateway::AuthApi;
use crate::domain::services::LOGIN_PATH;
use crate::error::AccessResult;
use crate::infra::http_auth_api::HttpAuthApi;
use crate::presentation::handlers::{self, AccessAppState};
use crate::presentation::middleware::{guard_protected_routes, provide_auth_context};
use crate::presentation::pages;

/// Create the access router talking to the HTTP backend from `config`
pub fn http_access_router(config: AccessConfig) -> AccessResult<Router> {
    let api = HttpAuthApi::new(&config)?;
    Ok(access_router(api, config))
}

/// Create the access router for any auth API implementation
///
/// The edge guard wraps every route; the auth context provider wraps the
/// pages that consume it.
pub fn access_router<A>(api: A, config: AccessConfig) -> Router
where
    A: AuthApi + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = AccessAppState {
        api: Arc::new(api),
        config: config.clone(),
    };

    let api_routes = Router::new()
        .route("/login", post(handlers::login::<A>))
        .route("/logout", post(handlers::logout::<A>))
        .route("/session", get(handlers::session::<A>))
        .route(
            "/send-reset-password",
            post(handlers::send_reset_password::<A>),
        )
        .route("/reset-password", post(handlers::reset_password::<A>));

    let login_routes = Router::new()
        .route(
            LOGIN_PATH,
            get(pages::login_page::<A>).post(pages::login_submit::<A>),
        )
        .route(
            pages::ADMIN_LOGIN_PATH,
            get(pages::admin_login_page::<A>).post(pages::admin_login_submit::<A>),
        );

    let context_routes = Router::new()
        .route("/logout", post(pages::logout_submit::<A>))
        .route("/dashboard", get(pages::dashboard::<A>))
        .route("/dashboard/{*rest}", get(pages::dashboard::<A>))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            provide_auth_context::<A>,
        ));

    Router::new()
        .nest("/api/auth", api_routes)
        .merge(login_routes)
        .merge(context_routes)
        .layer(middleware::from_fn_with_state(config, guard_protected_routes))
        .with_state(state)
}
