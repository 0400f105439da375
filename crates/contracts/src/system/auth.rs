use serde::{Deserialize, Serialize};

use super::permissions::PermissionMatrix;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Unix seconds after which the token is locally considered expired.
    pub expires_at: i64,
    pub user: UserInfo,
    /// Module permission matrix resolved from the user's role at login.
    #[serde(default)]
    pub permissions: PermissionMatrix,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Local expiry check used by the request interceptor. An unknown expiry
/// (zero or negative) counts as expired: fail closed.
pub fn token_expired(expires_at: i64, now: i64) -> bool {
    expires_at <= 0 || now >= expires_at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_inclusive_and_fails_closed() {
        assert!(!token_expired(100, 99));
        assert!(token_expired(100, 100));
        assert!(token_expired(100, 101));
        assert!(token_expired(0, 50));
        assert!(token_expired(-1, 50));
    }

    #[test]
    fn login_response_without_permissions_parses_empty() {
        let raw = r#"{
            "access_token": "t",
            "expires_at": 10,
            "user": {"id": "u1", "username": "admin", "full_name": null, "email": null}
        }"#;
        let resp: LoginResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.permissions.is_empty());
        assert!(!resp.user.is_admin);
    }
}
