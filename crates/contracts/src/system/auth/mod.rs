use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Subdomain of the company instance, when the app runs on one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
}

impl UserInfo {
    /// Full name when present, username otherwise.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_omits_missing_tenant() {
        let req = LoginRequest {
            username: "admin".into(),
            password: "secret".into(),
            tenant: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("tenant"));
    }

    #[test]
    fn test_display_name() {
        let mut user = UserInfo {
            id: "1".into(),
            username: "ivanov".into(),
            full_name: Some("  ".into()),
            email: None,
            is_admin: false,
        };
        assert_eq!(user.display_name(), "ivanov");
        user.full_name = Some("Иван Иванов".into());
        assert_eq!(user.display_name(), "Иван Иванов");
    }
}
