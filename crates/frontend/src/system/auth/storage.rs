use contracts::system::auth::{LoginResponse, UserInfo};
use contracts::system::permissions::PermissionMatrix;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "session_access_token";
const EXPIRES_AT_KEY: &str = "session_expires_at";
const USER_KEY: &str = "session_user";
const PERMISSIONS_KEY: &str = "session_permissions";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the whole session delivered by a successful login.
pub fn save_session(response: &LoginResponse) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    let _ = storage.set_item(ACCESS_TOKEN_KEY, &response.access_token);
    let _ = storage.set_item(EXPIRES_AT_KEY, &response.expires_at.to_string());
    if let Ok(raw) = serde_json::to_string(&response.user) {
        let _ = storage.set_item(USER_KEY, &raw);
    }
    if let Ok(raw) = serde_json::to_string(&response.permissions) {
        let _ = storage.set_item(PERMISSIONS_KEY, &raw);
    }
}

pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn get_expires_at() -> Option<i64> {
    let raw = get_local_storage()?.get_item(EXPIRES_AT_KEY).ok()??;
    raw.parse().ok()
}

pub fn get_user() -> Option<UserInfo> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Missing or malformed matrix reads as empty: no permissions at all.
pub fn get_permissions() -> Option<PermissionMatrix> {
    let raw = get_local_storage()?.get_item(PERMISSIONS_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Clear every persisted session entry.
pub fn clear_session() {
    let Some(storage) = get_local_storage() else {
        return;
    };
    let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    let _ = storage.remove_item(EXPIRES_AT_KEY);
    let _ = storage.remove_item(USER_KEY);
    let _ = storage.remove_item(PERMISSIONS_KEY);
}
