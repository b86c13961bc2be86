//! User entity.

use super::super::value_objects::Email;
use crate::{Entity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// User entity representing an authenticated author.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// User's email address, unique across all users.
    pub email: Email,

    /// Public display name, unique across all users.
    #[validate(length(min = 3, max = 64))]
    pub display_name: String,

    /// Hashed password (never exposed via API).
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with the given details.
    #[must_use]
    pub fn new(email: Email, display_name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email,
            display_name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the user's password hash.
    pub fn update_password(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_user(name: &str) -> User {
        User::new(
            Email::new(format!("{}@example.com", name)).unwrap(),
            name.to_string(),
            "hashed_password".to_string(),
        )
    }

    #[test]
    fn test_user_creation() {
        let user = create_user("janedoe");
        assert_eq!(user.display_name, "janedoe");
        assert_eq!(user.email.as_str(), "janedoe@example.com");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_user_update_password() {
        let mut user = create_user("janedoe");
        let old_hash = user.password_hash.clone();
        user.update_password("new_hash_value".to_string());
        assert_ne!(user.password_hash, old_hash);
        assert_eq!(user.password_hash, "new_hash_value");
    }

    #[test]
    fn test_user_serialize_does_not_expose_password() {
        let user = create_user("janedoe");
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hashed_password"));
    }

    #[test]
    fn test_user_id_is_unique() {
        let user1 = create_user("user1");
        let user2 = create_user("user2");
        assert_ne!(user1.id, user2.id);
    }
}
