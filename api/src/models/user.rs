//! # Authentication models
//!
//! The login exchange and the client-safe user record.
//!
//! ## [`UserInfo`]
//!
//! Everything the dashboard knows about the signed-in operator:
//!
//! - `id`: opaque backend identifier.
//! - `username`: the login name, always present.
//! - `name`: optional human name; [`UserInfo::display_name`] falls back to
//!   the username when it is missing.
//! - `role`: backend-assigned role string (`"admin"`, `"operator"`, ...),
//!   shown as-is; the client does not gate anything on it.
//!
//! ## [`LoginResponse`]
//!
//! `POST /auth/login` answers with the bearer token plus the `UserInfo` it
//! belongs to. Both halves are persisted by the session store so that a page
//! reload stays signed in (the presence of the token is what the client
//! treats as "authenticated"; the first 401 evicts it).

use serde::{Deserialize, Serialize};

/// Client-safe record of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl UserInfo {
    /// Human name if the account has one, username otherwise.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login: the bearer token and who it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_the_human_name() {
        let user = UserInfo {
            id: "u1".into(),
            username: "ayse".into(),
            name: Some("Ayşe Demir".into()),
            role: "admin".into(),
        };
        assert_eq!(user.display_name(), "Ayşe Demir");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user = UserInfo {
            id: "u2".into(),
            username: "ops".into(),
            name: None,
            role: String::new(),
        };
        assert_eq!(user.display_name(), "ops");

        let blank = UserInfo {
            name: Some(String::new()),
            ..user
        };
        assert_eq!(blank.display_name(), "ops");
    }

    #[test]
    fn login_response_tolerates_missing_optional_fields() {
        let raw = r#"{"token": "t-123", "user": {"id": "u1", "username": "ops"}}"#;
        let parsed: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.token, "t-123");
        assert_eq!(parsed.user.name, None);
        assert_eq!(parsed.user.role, "");
    }
}
