use contracts::system::auth::LoginResponse;
use leptos::prelude::*;

use super::session::{self, Session};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Auth context provider component. Rehydrates the persisted session
/// from localStorage on mount.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        session: session::load(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Turn a successful login response into the active session. Email and
/// role fall back to the submitted email and `admin` when the backend
/// omits the user block.
pub fn establish_session(
    set_auth_state: WriteSignal<AuthState>,
    submitted_email: &str,
    response: LoginResponse,
) {
    let email = response
        .user
        .as_ref()
        .and_then(|user| user.email.clone())
        .unwrap_or_else(|| submitted_email.to_string());
    let role = response
        .user
        .as_ref()
        .and_then(|user| user.role.clone())
        .unwrap_or_else(|| "admin".to_string());

    let session = Session {
        token: response.token,
        email,
        role,
    };
    session::save(&session);
    set_auth_state.set(AuthState {
        session: Some(session),
    });
}

/// Destroy the session and return to the login screen.
pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    session::clear();
    set_auth_state.set(AuthState::default());
}
