//! Authentication data transfer objects.

use chrono::{DateTime, Utc};
use gazette_core::{User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to register a new user account.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User's email address, unique across all accounts.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Public display name, unique across all accounts.
    #[validate(length(min = 3, max = 64, message = "Display name must be 3-64 characters"))]
    pub display_name: String,

    /// Plaintext password, hashed before storage.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Request to log in with email and password.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User representation returned to clients.
///
/// Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email.as_str().to_string(),
            display_name: user.display_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Successful authentication response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// Signed JWT access token.
    pub access_token: String,
    /// Always "Bearer".
    pub token_type: String,
    /// Unix timestamp at which the token expires.
    pub expires_at: i64,
    /// The authenticated user.
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazette_core::Email;

    #[test]
    fn test_register_request_validation() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            display_name: "ab".to_string(),
            password: "short".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("display_name"));
        assert!(errors.field_errors().contains_key("password"));

        let request = RegisterRequest {
            email: "reader@example.com".to_string(),
            display_name: "reader".to_string(),
            password: "Str0ngPassw0rd!".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_user_response_omits_password_hash() {
        let user = User::new(
            Email::new("reader@example.com").unwrap(),
            "reader".to_string(),
            "hashed-password".to_string(),
        );
        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("hashed-password"));
        assert!(json.contains("reader@example.com"));
    }
}
