//! Auth Context
//!
//! Reactive `{user, loading, logout}` state shared by everything rendered for
//! one client. Hydrated exactly once from the session store; it does not
//! follow later changes made to the store by others.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::application::logout::LogoutUseCase;
use crate::domain::entity::{Session, SessionState, UserProfile};
use crate::domain::gateway::{AuthApi, Navigator};
use crate::domain::repository::SessionStore;
use crate::domain::services::LOGIN_PATH;

pub struct AuthContext<S, A>
where
    S: SessionStore + Send + 'static,
    A: AuthApi + Send + Sync + 'static,
{
    state: watch::Sender<SessionState>,
    hydration_started: AtomicBool,
    store: Arc<Mutex<S>>,
    logout: LogoutUseCase<A>,
    navigator: Arc<dyn Navigator>,
}

/// Poisoning only means another holder panicked; the store data is still usable.
pub(crate) fn lock_store<S>(store: &Mutex<S>) -> MutexGuard<'_, S> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<S, A> AuthContext<S, A>
where
    S: SessionStore + Send + 'static,
    A: AuthApi + Send + Sync + 'static,
{
    pub fn new(store: Arc<Mutex<S>>, api: Arc<A>, navigator: Arc<dyn Navigator>) -> Arc<Self> {
        let (state, _) = watch::channel(SessionState::Loading);
        Arc::new(Self {
            state,
            hydration_started: AtomicBool::new(false),
            store,
            logout: LogoutUseCase::new(api),
            navigator,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.borrow().user().cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Wait until hydration has settled
    pub async fn ready(&self) -> Session {
        let mut rx = self.state.subscribe();
        match rx.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.session().cloned().unwrap_or_default(),
            Err(_) => Session::Anonymous,
        }
    }

    // ========================================================================
    // Hydration
    // ========================================================================

    /// Hydrate from the context's own store.
    pub fn hydrate(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let store = self.store.clone();
        self.hydrate_with(async move { lock_store(&store).read() })
    }

    /// One-shot hydration from an arbitrary (possibly slow) source.
    ///
    /// Returns `None` when hydration was already started. The spawned task
    /// only holds a weak reference; if the context is gone when the load
    /// finishes, the result is dropped.
    pub fn hydrate_with<F>(self: &Arc<Self>, load: F) -> Option<JoinHandle<()>>
    where
        F: Future<Output = Option<UserProfile>> + Send + 'static,
    {
        if self.hydration_started.swap(true, Ordering::AcqRel) {
            tracing::debug!("Auth context already hydrated");
            return None;
        }

        let context = Arc::downgrade(self);
        Some(tokio::spawn(async move {
            let profile = load.await;
            match context.upgrade() {
                Some(context) => context.settle(Session::from_profile(profile)),
                None => tracing::debug!("Auth context dropped before hydration finished"),
            }
        }))
    }

    /// Only leaves `Loading`; a result arriving after logout is dropped.
    fn settle(&self, session: Session) {
        let authenticated = session.is_authenticated();
        let settled = self.state.send_if_modified(|state| {
            if !state.is_loading() {
                return false;
            }
            *state = SessionState::Ready(session);
            true
        });

        if settled {
            tracing::debug!(authenticated, "Auth context hydrated");
        } else {
            tracing::debug!("Auth context already settled, dropping hydration result");
        }
    }

    // ========================================================================
    // Logout
    // ========================================================================

    /// Always succeeds locally, whatever the backend says.
    pub async fn logout(&self) {
        let token = lock_store(&self.store).token();
        self.logout.revoke(token.as_ref()).await;

        lock_store(&self.store).clear();
        self.state.send_replace(SessionState::Ready(Session::Anonymous));

        tracing::info!("User logged out");
        self.navigator.replace(LOGIN_PATH);
    }
}
