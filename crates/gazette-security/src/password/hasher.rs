//! Password hashing using Argon2.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2, Params,
};
use gazette_core::{GazetteError, GazetteResult, Interface};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Interface for password hashing operations.
///
/// This trait abstracts password hashing functionality for dependency injection.
pub trait PasswordHasherInterface: Interface + Send + Sync {
    /// Hashes a password.
    fn hash(&self, password: &str) -> GazetteResult<String>;

    /// Verifies a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> GazetteResult<bool>;
}

/// Password hasher service using Argon2.
#[derive(Component, Clone)]
#[shaku(interface = PasswordHasherInterface)]
pub struct PasswordHasher {
    argon2: Arc<Argon2<'static>>,
}

impl PasswordHasher {
    /// Creates a new password hasher with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(Params::DEFAULT)
    }

    /// Creates a new password hasher with custom parameters.
    #[must_use]
    pub fn with_params(params: Params) -> Self {
        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
        Self {
            argon2: Arc::new(argon2),
        }
    }

    fn hash_impl(&self, password: &str) -> GazetteResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| GazetteError::Internal(format!("Failed to hash password: {}", e)))?;

        debug!("Password hashed successfully");
        Ok(hash.to_string())
    }

    fn verify_impl(&self, password: &str, hash: &str) -> GazetteResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| GazetteError::Internal(format!("Invalid password hash format: {}", e)))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => {
                debug!("Password verification failed: incorrect password");
                Ok(false)
            }
            Err(e) => Err(GazetteError::Internal(format!(
                "Password verification error: {}",
                e
            ))),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherInterface for PasswordHasher {
    fn hash(&self, password: &str) -> GazetteResult<String> {
        self.hash_impl(password)
    }

    fn verify(&self, password: &str, hash: &str) -> GazetteResult<bool> {
        self.verify_impl(password, hash)
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "MySecurePassword123!";

        let hash = hasher.hash(password).unwrap();
        assert!(hasher.verify(password, &hash).unwrap());
        assert!(!hasher.verify("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes() {
        let hasher = PasswordHasher::new();
        let password = "TestPassword123!";

        let hash1 = hasher.hash(password).unwrap();
        let hash2 = hasher.hash(password).unwrap();

        // Same password should produce different hashes (different salts)
        assert_ne!(hash1, hash2);

        assert!(hasher.verify(password, &hash1).unwrap());
        assert!(hasher.verify(password, &hash2).unwrap());
    }

    #[test]
    fn test_invalid_hash_format_returns_error() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "not-a-valid-hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_hasher_debug_does_not_leak_secrets() {
        let hasher = PasswordHasher::new();
        let debug_str = format!("{:?}", hasher);
        assert!(debug_str.contains("PasswordHasher"));
    }
}
