use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A dashboard user account.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Active users must be deactivated before they can be deleted.
    pub fn deletable(&self) -> bool {
        !self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_user_defaults_inactive() {
        let json = r#"{"id": "u-1", "email": "ops@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert!(!user.is_active);
        assert!(user.deletable());
        assert!(user.role.is_none());
    }

    #[test]
    fn test_active_user_is_not_deletable() {
        let json = r#"{"id": "u-2", "is_active": true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(!user.deletable());
    }
}
