use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.username.to_lowercase().contains(&query)
            || self
                .full_name
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
            || self
                .email
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_search() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","username":"petrov","email":"p@acme.io","full_name":"Пётр Петров",
                "is_active":true,"is_admin":false,"created_at":"2024-03-01T10:00:00Z","last_login_at":null}"#,
        )
        .unwrap();
        assert!(user.matches("PETR"));
        assert!(user.matches("acme"));
        assert!(user.matches("петров"));
        assert!(user.matches(" "));
        assert!(!user.matches("sidorov"));
    }
}
