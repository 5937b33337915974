//! Authentication context and hooks.
//!
//! The stored session is the source of truth at startup: a persisted token
//! means signed in, and the first 401 from the backend is what ends that.
//! [`AuthProvider`] restores the session before anything renders, installs
//! the client's unauthorized handler, and revalidates the token in the
//! background.

use api::{Client, UserInfo};
use dioxus::prelude::*;
use store::{SessionStore, StoredSession, StoredUser};

use crate::use_api;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self {
            user: None,
            token: None,
            loading: false,
        }
    }

    fn from_session(session: StoredSession) -> Self {
        Self {
            user: Some(user_from_stored(&session.user)),
            token: Some(session.token),
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the operator signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap the app with this component, below the client/config providers.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_api();

    let auth_state = use_signal({
        let client = client.clone();
        move || match session_store().load() {
            Some(session) => {
                client.set_token(Some(session.token.clone()));
                AuthState::from_session(session)
            }
            None => AuthState::signed_out(),
        }
    });
    let mut auth_state = use_context_provider(|| auth_state);

    // Any 401 wipes the persisted session; on the web we also leave the page
    // outright so every bit of in-memory state is gone.
    use_hook(|| {
        client.on_unauthorized(|| {
            session_store().clear();
            #[cfg(target_arch = "wasm32")]
            redirect_to_login();
        });
    });

    // Revalidate the restored token once, in the background. A 401 signs the
    // operator out; transport errors keep the session so the dashboard still
    // opens while offline.
    let _revalidation = use_resource(move || {
        let client = client.clone();
        async move {
            let token = auth_state.peek().token.clone();
            if token.is_none() {
                return;
            }
            match client.current_user().await {
                Ok(user) => {
                    if let Some(token) = token {
                        session_store()
                            .save(&StoredSession::new(token.clone(), user_to_stored(&user)));
                        auth_state.set(AuthState {
                            user: Some(user),
                            token: Some(token),
                            loading: false,
                        });
                    }
                }
                Err(err) if err.is_unauthorized() => {
                    auth_state.set(AuthState::signed_out());
                }
                Err(err) => {
                    tracing::debug!("session revalidation skipped: {err}");
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Persist a fresh login and flip the auth state to signed in.
pub fn complete_login(
    mut auth: Signal<AuthState>,
    client: &Client,
    response: api::LoginResponse,
) {
    client.set_token(Some(response.token.clone()));
    session_store().save(&StoredSession::new(
        response.token.clone(),
        user_to_stored(&response.user),
    ));
    auth.set(AuthState {
        user: Some(response.user),
        token: Some(response.token),
        loading: false,
    });
}

/// Drop the session locally and tell the backend, best effort.
pub async fn sign_out(mut auth: Signal<AuthState>, client: Client) {
    if let Err(err) = client.logout().await {
        tracing::debug!("logout call failed: {err}");
    }
    client.set_token(None);
    session_store().clear();
    auth.set(AuthState::signed_out());
}

fn user_from_stored(stored: &StoredUser) -> UserInfo {
    UserInfo {
        id: stored.id.clone(),
        username: stored.username.clone(),
        name: stored.name.clone(),
        role: stored.role.clone(),
    }
}

fn user_to_stored(user: &UserInfo) -> StoredUser {
    StoredUser {
        id: user.id.clone(),
        username: user.username.clone(),
        name: user.name.clone(),
        role: user.role.clone(),
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn session_store() -> store::WebStore {
    store::WebStore::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn session_store() -> store::FileStore {
    store::FileStore::new()
}

// wasm without browser storage keeps no session between runs.
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
fn session_store() -> store::MemoryStore {
    store::MemoryStore::new()
}

#[cfg(target_arch = "wasm32")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
