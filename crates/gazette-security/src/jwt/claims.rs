//! JWT claims structure.

use chrono::{DateTime, Utc};
use gazette_core::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: String,

    /// User ID as UUID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,

    /// User's email.
    pub email: String,

    /// User's display name.
    pub display_name: String,

    /// Issued at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Not before timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Issuer.
    pub iss: String,

    /// Audience.
    pub aud: String,

    /// JWT ID (unique identifier for this token).
    pub jti: String,
}

impl Claims {
    /// Creates new access token claims.
    #[must_use]
    pub fn new_access(
        user_id: UserId,
        email: String,
        display_name: String,
        issuer: String,
        audience: String,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            user_id: Some(user_id.into_inner()),
            email,
            display_name,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            nbf: Some(now.timestamp()),
            iss: issuer,
            aud: audience,
            jti: Uuid::now_v7().to_string(),
        }
    }

    /// Returns the user ID.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id.map(UserId::from_uuid)
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_access_token_claims() {
        let user_id = UserId::new();
        let expires = Utc::now() + Duration::hours(1);
        let claims = Claims::new_access(
            user_id,
            "test@example.com".to_string(),
            "testuser".to_string(),
            "issuer".to_string(),
            "audience".to_string(),
            expires,
        );

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.user_id(), Some(user_id));
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_claims() {
        let expires = Utc::now() - Duration::hours(1);
        let claims = Claims::new_access(
            UserId::new(),
            "test@example.com".to_string(),
            "testuser".to_string(),
            "issuer".to_string(),
            "audience".to_string(),
            expires,
        );

        assert!(claims.is_expired());
    }
}
