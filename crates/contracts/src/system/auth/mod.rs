use serde::{Deserialize, Serialize};

pub const USERNAME_MIN_LEN: usize = 3;
pub const PASSWORD_MIN_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Returns the message to show under the username field, if any.
pub fn validate_username(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Username is required");
    }
    if value.chars().count() < USERNAME_MIN_LEN {
        return Some("Username must be at least 3 characters");
    }
    None
}

/// Returns the message to show under the password field, if any.
pub fn validate_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Password is required");
    }
    if value.chars().count() < PASSWORD_MIN_LEN {
        return Some("Password must be at least 6 characters");
    }
    None
}

impl LoginCredentials {
    pub fn is_valid(&self) -> bool {
        validate_username(&self.username).is_none() && validate_password(&self.password).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert_eq!(validate_username(""), Some("Username is required"));
        assert_eq!(
            validate_username("ab"),
            Some("Username must be at least 3 characters")
        );
        assert_eq!(validate_username("abc"), None);
        assert_eq!(validate_username("ñoñ"), None);
    }

    #[test]
    fn password_rules() {
        assert_eq!(validate_password(""), Some("Password is required"));
        assert_eq!(
            validate_password("12345"),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(validate_password("123456"), None);
    }

    #[test]
    fn credentials_need_both_fields() {
        let mut creds = LoginCredentials::default();
        assert!(!creds.is_valid());
        creds.username = "admin".into();
        assert!(!creds.is_valid());
        creds.password = "secret1".into();
        assert!(creds.is_valid());
    }
}
