//! Persisted login session. Created at login, destroyed at logout,
//! rehydrated at startup from localStorage under fixed key names.

use web_sys::window;

const TOKEN_KEY: &str = "authToken";
const EMAIL_KEY: &str = "userEmail";
const ROLE_KEY: &str = "userRole";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub role: String,
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session across reloads.
pub fn save(session: &Session) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(EMAIL_KEY, &session.email);
        let _ = storage.set_item(ROLE_KEY, &session.role);
    }
}

/// Rehydrate the persisted session. Token and email are both required;
/// a missing role falls back to `admin`.
pub fn load() -> Option<Session> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let email = storage.get_item(EMAIL_KEY).ok()??;
    let role = storage
        .get_item(ROLE_KEY)
        .ok()
        .flatten()
        .unwrap_or_else(|| "admin".to_string());

    Some(Session { token, email, role })
}

/// Destroy the persisted session.
pub fn clear() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(EMAIL_KEY);
        let _ = storage.remove_item(ROLE_KEY);
    }
}
