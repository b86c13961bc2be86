//! JWT token provider for creating and validating tokens.

use super::Claims;
use chrono::{Duration, Utc};
use gazette_config::SecurityConfig;
use gazette_core::{GazetteError, GazetteResult, UserId};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use tracing::{debug, warn};

/// An issued access token with its expiration.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// The encoded JWT.
    pub access_token: String,
    /// Access token expiration timestamp.
    pub expires_at: i64,
    /// Token type (always "Bearer").
    pub token_type: String,
}

/// JWT token provider service.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            encoding_key,
            decoding_key,
            config,
            validation,
        }
    }

    /// Generates an access token for a user.
    pub fn generate_access_token(
        &self,
        user_id: UserId,
        email: &str,
        display_name: &str,
    ) -> GazetteResult<IssuedToken> {
        let expires_at =
            Utc::now() + Duration::seconds(self.config.jwt_access_expiration_secs as i64);

        let claims = Claims::new_access(
            user_id,
            email.to_string(),
            display_name.to_string(),
            self.config.jwt_issuer.clone(),
            self.config.jwt_audience.clone(),
            expires_at,
        );

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| GazetteError::Internal(format!("Failed to generate access token: {}", e)))?;

        debug!("Generated access token for user {}", user_id);
        Ok(IssuedToken {
            access_token: token,
            expires_at: expires_at.timestamp(),
            token_type: "Bearer".to_string(),
        })
    }

    /// Validates a token and returns the claims.
    pub fn validate_token(&self, token: &str) -> GazetteResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                warn!("Token validation failed: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => GazetteError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidToken
                    | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        GazetteError::InvalidToken("Invalid token signature".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        GazetteError::InvalidToken("Invalid token issuer".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                        GazetteError::InvalidToken("Invalid token audience".to_string())
                    }
                    _ => GazetteError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.config.jwt_issuer)
            .field("audience", &self.config.jwt_audience)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider() -> TokenProvider {
        let config = SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_access_expiration_secs: 3600,
            jwt_issuer: "test-issuer".to_string(),
            jwt_audience: "test-audience".to_string(),
        };
        TokenProvider::new(Arc::new(config))
    }

    #[test]
    fn test_generate_and_validate_token() {
        let provider = create_test_provider();
        let user_id = UserId::new();

        let issued = provider
            .generate_access_token(user_id, "test@example.com", "testuser")
            .unwrap();
        assert_eq!(issued.token_type, "Bearer");

        let claims = provider.validate_token(&issued.access_token).unwrap();
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.display_name, "testuser");
        assert_eq!(claims.user_id(), Some(user_id));
    }

    #[test]
    fn test_invalid_token() {
        let provider = create_test_provider();
        let result = provider.validate_token("invalid-token");
        assert!(result.is_err());
    }

    #[test]
    fn test_token_from_other_issuer_rejected() {
        let provider = create_test_provider();

        let other_config = SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_access_expiration_secs: 3600,
            jwt_issuer: "other-issuer".to_string(),
            jwt_audience: "test-audience".to_string(),
        };
        let other = TokenProvider::new(Arc::new(other_config));

        let issued = other
            .generate_access_token(UserId::new(), "test@example.com", "testuser")
            .unwrap();
        assert!(provider.validate_token(&issued.access_token).is_err());
    }

    #[test]
    fn test_token_with_wrong_secret_rejected() {
        let provider = create_test_provider();

        let other_config = SecurityConfig {
            jwt_secret: "a-completely-different-secret".to_string(),
            jwt_access_expiration_secs: 3600,
            jwt_issuer: "test-issuer".to_string(),
            jwt_audience: "test-audience".to_string(),
        };
        let other = TokenProvider::new(Arc::new(other_config));

        let issued = other
            .generate_access_token(UserId::new(), "test@example.com", "testuser")
            .unwrap();
        assert!(provider.validate_token(&issued.access_token).is_err());
    }
}
