//! Server-rendered pages
//!
//! Login surfaces and the role dashboards. Dashboards go through
//! [`guarded_view`], which sits behind the edge guard and re-checks the same
//! decision table against the auth context.

use axum::extract::{Form, OriginalUri, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::application::{LoginInput, LoginUseCase};
use crate::domain::entity::{SessionState, UserProfile};
use crate::domain::gateway::AuthApi;
use crate::domain::repository::SessionStore;
use crate::domain::services::{GuardDecision, LOGIN_PATH, dashboard_path_for, evaluate};
use crate::domain::value_object::user_role::UserRole;
use crate::error::AccessError;
use crate::infra::cookie_store::CookieSessionStore;
use crate::presentation::dto::LoginForm;
use crate::presentation::handlers::{AccessAppState, set_cookie_headers};
use crate::presentation::middleware::CurrentAuth;

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Roles accepted by the admin login surface
const ADMIN_ONLY: [UserRole; 1] = [UserRole::Admin];

// ============================================================================
// Guarded view
// ============================================================================

/// Outcome of rendering a guarded page
#[derive(Debug, PartialEq, Eq)]
pub enum View<T> {
    /// Session still loading
    Placeholder,
    Redirect(&'static str),
    Content(T),
}

impl<T> IntoResponse for View<T>
where
    T: IntoResponse,
{
    fn into_response(self) -> Response {
        match self {
            View::Placeholder => Html(placeholder_html()).into_response(),
            View::Redirect(target) => Redirect::to(target).into_response(),
            View::Content(content) => content.into_response(),
        }
    }
}

/// Evaluate the route guard and call `render` only when access is allowed.
pub fn guarded_view<T, F>(path: &str, state: &SessionState, render: F) -> View<T>
where
    F: FnOnce(Option<&UserProfile>) -> T,
{
    match evaluate(path, state) {
        GuardDecision::Pending => View::Placeholder,
        GuardDecision::Allow => View::Content(render(state.user())),
        decision => View::Redirect(decision.redirect_target().unwrap_or(LOGIN_PATH)),
    }
}

// ============================================================================
// Login pages
// ============================================================================

/// GET /login
pub async fn login_page<A>(State(state): State<AccessAppState<A>>, headers: HeaderMap) -> Response
where
    A: AuthApi + Send + Sync + 'static,
{
    render_login_page(&state, &headers, LOGIN_PATH)
}

/// POST /login
pub async fn login_submit<A>(
    State(state): State<AccessAppState<A>>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response
where
    A: AuthApi + Send + Sync + 'static,
{
    submit_login(&state, &headers, form, None, LOGIN_PATH).await
}

/// GET /admin/login
pub async fn admin_login_page<A>(
    State(state): State<AccessAppState<A>>,
    headers: HeaderMap,
) -> Response
where
    A: AuthApi + Send + Sync + 'static,
{
    render_login_page(&state, &headers, ADMIN_LOGIN_PATH)
}

/// POST /admin/login
pub async fn admin_login_submit<A>(
    State(state): State<AccessAppState<A>>,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> Response
where
    A: AuthApi + Send + Sync + 'static,
{
    submit_login(&state, &headers, form, Some(ADMIN_ONLY.to_vec()), ADMIN_LOGIN_PATH).await
}

// ============================================================================
// Context-backed pages
// ============================================================================

/// POST /logout
///
/// The context navigates to the login page; the provider layer turns that
/// into the redirect.
pub async fn logout_submit<A>(CurrentAuth(context): CurrentAuth<A>) -> StatusCode
where
    A: AuthApi + Send + Sync + 'static,
{
    context.logout().await;
    StatusCode::NO_CONTENT
}

/// GET /dashboard, /dashboard/{*rest}
pub async fn dashboard<A>(
    CurrentAuth(context): CurrentAuth<A>,
    OriginalUri(uri): OriginalUri,
) -> View<Html<String>>
where
    A: AuthApi + Send + Sync + 'static,
{
    context.ready().await;
    let state = context.state();

    guarded_view(uri.path(), &state, |user| Html(dashboard_html(user)))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn render_login_page<A>(state: &AccessAppState<A>, headers: &HeaderMap, action: &str) -> Response
where
    A: AuthApi + Send + Sync + 'static,
{
    let mut store = CookieSessionStore::from_headers(headers, &state.config);
    let user = store.read();
    let cookies = set_cookie_headers(&mut store);

    match user {
        Some(user) => (cookies, Redirect::to(dashboard_path_for(Some(user.role)))).into_response(),
        None => (cookies, Html(login_html(action, None))).into_response(),
    }
}

async fn submit_login<A>(
    state: &AccessAppState<A>,
    headers: &HeaderMap,
    form: LoginForm,
    allowed_roles: Option<Vec<UserRole>>,
    action: &str,
) -> Response
where
    A: AuthApi + Send + Sync + 'static,
{
    let mut store = CookieSessionStore::from_headers(headers, &state.config);
    let input = LoginInput {
        email: form.email,
        password: form.password,
        allowed_roles,
    };

    match LoginUseCase::new(state.api.clone())
        .execute(input, &mut store)
        .await
    {
        Ok(output) => (set_cookie_headers(&mut store), Redirect::to(output.redirect_to))
            .into_response(),
        Err(e) => {
            tracing::info!(error = %e, surface = action, "Login form rejected");
            let status = form_status(&e);
            (status, Html(login_html(action, Some(&e.user_message())))).into_response()
        }
    }
}

fn form_status(error: &AccessError) -> StatusCode {
    StatusCode::from_u16(error.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn login_html(action: &str, error: Option<&str>) -> String {
    let title = if action == ADMIN_LOGIN_PATH {
        "Admin sign in"
    } else {
        "Sign in"
    };
    let error = error
        .map(|message| format!(r#"<p class="error" role="alert">{}</p>"#, escape_html(message)))
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<h1>{title}</h1>
{error}
<form method="post" action="{action}">
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Sign in</button>
</form>
</body>
</html>"#
    )
}

fn dashboard_html(user: Option<&UserProfile>) -> String {
    let (name, role) = match user {
        Some(user) => (escape_html(&user.name), user.role.to_string()),
        None => (String::new(), String::new()),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Dashboard</title></head>
<body data-role="{role}">
<h1>Welcome, {name}</h1>
<form method="post" action="/logout"><button type="submit">Log out</button></form>
</body>
</html>"#
    )
}

fn placeholder_html() -> String {
    r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Loading</title></head>
<body aria-busy="true"><p>Loading…</p></body>
</html>"#
        .to_string()
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
