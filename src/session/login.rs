//! Login request and response types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Username and password, serialized only into the login body
#[derive(Clone, Serialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body of a login reply. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub status: Option<String>,
    /// Bearer token issued on success
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Read a reply body; anything that is not the expected object reads as empty
    pub fn from_body(body: &Value) -> Self {
        serde_json::from_value(body.clone()).unwrap_or_default()
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// Result of a login attempt the backend answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Accepted; the page navigated to `redirect`
    Success {
        redirect: String,
        token: Option<String>,
    },
    /// Anything other than `status: "success"`
    Rejected { message: Option<String> },
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credentials_body() {
        let body = serde_json::to_value(Credentials::new("admin", "admin123")).unwrap();
        assert_eq!(body, json!({"username": "admin", "password": "admin123"}));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let debug = format!("{:?}", Credentials::new("admin", "admin123"));
        assert!(debug.contains("admin"));
        assert!(!debug.contains("admin123"));
    }

    #[test]
    fn test_only_literal_success_is_success() {
        assert!(LoginResponse::from_body(&json!({"status": "success", "token": "t"})).is_success());
        assert!(!LoginResponse::from_body(&json!({"status": "failure"})).is_success());
        assert!(!LoginResponse::from_body(&json!({"status": "SUCCESS"})).is_success());
        assert!(!LoginResponse::from_body(&json!({})).is_success());
        assert!(!LoginResponse::from_body(&json!({"status": 1})).is_success());
        assert!(!LoginResponse::from_body(&json!(["success"])).is_success());
    }

    #[test]
    fn test_token_and_message_are_read() {
        let response = LoginResponse::from_body(&json!({
            "status": "fail",
            "message": "Invalid credentials"
        }));
        assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
        assert_eq!(response.token, None);
    }
}
