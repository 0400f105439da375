//! Authenticated HTTP client for the admin API.
//!
//! Every request goes out with the stored bearer token; a locally expired
//! token, or a 401/403 response, tears the session down and sends the user
//! back to the login screen.

use contracts::system::auth::token_expired;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde_json::Value;

use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
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

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn now_unix() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Drop the persisted session and return to the login screen.
pub fn force_logout() {
    storage::clear_session();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

/// Bearer header value for the current session. A missing or locally
/// expired token forces a logout instead of sending a doomed request.
fn auth_header() -> Result<String, String> {
    let Some(token) = storage::get_access_token() else {
        force_logout();
        return Err("Not authenticated".to_string());
    };
    let expires_at = storage::get_expires_at().unwrap_or(0);
    if token_expired(expires_at, now_unix()) {
        force_logout();
        return Err("Session expired".to_string());
    }
    Ok(format!("Bearer {}", token))
}

fn check_status(response: &Response) -> Result<(), String> {
    if response.status() == 401 || response.status() == 403 {
        force_logout();
        return Err("Session expired".to_string());
    }
    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}

/// GET a JSON body from an authenticated endpoint.
pub async fn get_json(path: &str) -> Result<Value, String> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check_status(&response)?;

    response
        .json::<Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// PATCH a JSON body to an authenticated endpoint; the response body is
/// ignored beyond the status check.
pub async fn patch_json<T: Serialize>(path: &str, body: &T) -> Result<(), String> {
    let response = Request::patch(&api_url(path))
        .header("Authorization", &auth_header()?)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check_status(&response)
}

/// DELETE an authenticated endpoint.
pub async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check_status(&response)
}
