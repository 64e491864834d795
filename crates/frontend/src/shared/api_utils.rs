//! API utilities for frontend-backend communication
//!
//! Provides helpers for constructing API URLs and attaching the session
//! bearer credential to outgoing requests.

use gloo_net::http::RequestBuilder;

use crate::system::auth::session;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/customers");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Attach `Authorization: Bearer <token>` from the active session, if
/// one exists. Unauthenticated requests go out untouched.
pub fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session::load() {
        Some(session) => builder.header("Authorization", &format!("Bearer {}", session.token)),
        None => builder,
    }
}
