//! Authentication service.

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use async_trait::async_trait;
use gazette_config::SecurityConfig;
use gazette_core::{Email, GazetteError, GazetteResult, Interface, User, ValidateExt};
use gazette_repository::UserRepository;
use gazette_security::{Claims, PasswordHasher, PasswordHasherInterface, TokenProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Authentication operations.
#[async_trait]
pub trait AuthService: Interface + Send + Sync {
    /// Registers a new user account.
    async fn register(&self, request: RegisterRequest) -> GazetteResult<AuthResponse>;

    /// Logs in with email and password.
    async fn login(&self, request: LoginRequest) -> GazetteResult<AuthResponse>;

    /// Validates an access token and returns its claims.
    async fn validate_token(&self, token: &str) -> GazetteResult<Claims>;

    /// Resolves the user behind a set of validated claims.
    async fn get_current_user(&self, claims: &Claims) -> GazetteResult<UserResponse>;
}

/// Authentication service implementation.
pub struct AuthServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
    password_hasher: Arc<PasswordHasher>,
    token_provider: Arc<TokenProvider>,
}

impl<R: UserRepository> AuthServiceImpl<R> {
    /// Creates a new authentication service.
    pub fn new(
        user_repository: Arc<R>,
        password_hasher: Arc<PasswordHasher>,
        security_config: Arc<SecurityConfig>,
    ) -> Self {
        let token_provider = Arc::new(TokenProvider::new(security_config));
        Self {
            user_repository,
            password_hasher,
            token_provider,
        }
    }

    fn create_auth_response(&self, user: &User) -> GazetteResult<AuthResponse> {
        let token = self.token_provider.generate_access_token(
            user.id,
            user.email.as_str(),
            &user.display_name,
        )?;

        Ok(AuthResponse {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_at: token.expires_at,
            user: UserResponse::from(user.clone()),
        })
    }
}

#[async_trait]
impl<R: UserRepository + 'static> AuthService for AuthServiceImpl<R> {
    async fn register(&self, request: RegisterRequest) -> GazetteResult<AuthResponse> {
        debug!("Registering user '{}'", request.display_name);
        request.validate_request()?;

        if self.user_repository.exists_by_email(&request.email).await? {
            return Err(GazetteError::Conflict(format!(
                "Email '{}' already exists",
                request.email
            )));
        }

        if self
            .user_repository
            .exists_by_display_name(&request.display_name)
            .await?
        {
            return Err(GazetteError::Conflict(format!(
                "Display name '{}' already exists",
                request.display_name
            )));
        }

        let email =
            Email::new(&request.email).map_err(|e| GazetteError::Validation(e.to_string()))?;
        let password_hash = self.password_hasher.hash(&request.password)?;

        let user = User::new(email, request.display_name, password_hash);
        let saved = self.user_repository.save(&user).await?;

        info!("User registered: {}", saved.id);
        self.create_auth_response(&saved)
    }

    async fn login(&self, request: LoginRequest) -> GazetteResult<AuthResponse> {
        debug!("Login attempt for '{}'", request.email);
        request.validate_request()?;

        // Unknown email and wrong password both answer InvalidCredentials
        let user = self
            .user_repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email '{}'", request.email);
                GazetteError::InvalidCredentials
            })?;

        if !self
            .password_hasher
            .verify(&request.password, &user.password_hash)?
        {
            warn!("Login failed: invalid password for {}", user.id);
            return Err(GazetteError::InvalidCredentials);
        }

        info!("User logged in: {}", user.id);
        self.create_auth_response(&user)
    }

    async fn validate_token(&self, token: &str) -> GazetteResult<Claims> {
        self.token_provider.validate_token(token)
    }

    async fn get_current_user(&self, claims: &Claims) -> GazetteResult<UserResponse> {
        let user_id = claims
            .user_id()
            .ok_or_else(|| GazetteError::InvalidToken("Missing user id".to_string()))?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| GazetteError::not_found("User", user_id))?;

        Ok(UserResponse::from(user))
    }
}

impl<R: UserRepository> std::fmt::Debug for AuthServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazette_core::UserId;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockUserRepository {
        users: Mutex<HashMap<UserId, User>>,
    }

    impl MockUserRepository {
        fn new() -> Self {
            Self {
                users: Mutex::new(HashMap::new()),
            }
        }

        fn with_user(user: User) -> Self {
            let repo = Self::new();
            repo.users.lock().unwrap().insert(user.id, user);
            repo
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_id(&self, id: UserId) -> GazetteResult<Option<User>> {
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> GazetteResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.email.as_str() == email.to_lowercase())
                .cloned())
        }

        async fn exists_by_email(&self, email: &str) -> GazetteResult<bool> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .any(|u| u.email.as_str() == email.to_lowercase()))
        }

        async fn exists_by_display_name(&self, display_name: &str) -> GazetteResult<bool> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .any(|u| u.display_name == display_name))
        }

        async fn save(&self, user: &User) -> GazetteResult<User> {
            self.users.lock().unwrap().insert(user.id, user.clone());
            Ok(user.clone())
        }
    }

    fn create_test_config() -> Arc<SecurityConfig> {
        Arc::new(SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_access_expiration_secs: 3600,
            jwt_issuer: "test-issuer".to_string(),
            jwt_audience: "test-audience".to_string(),
        })
    }

    fn create_user_with_password(password: &str) -> User {
        let hasher = PasswordHasher::new();
        User::new(
            Email::new_unchecked("reader@example.com".to_string()),
            "reader".to_string(),
            hasher.hash(password).unwrap(),
        )
    }

    fn create_auth_service(repo: MockUserRepository) -> AuthServiceImpl<MockUserRepository> {
        AuthServiceImpl::new(
            Arc::new(repo),
            Arc::new(PasswordHasher::new()),
            create_test_config(),
        )
    }

    fn register_request(email: &str, display_name: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            display_name: display_name.to_string(),
            password: "Str0ngPassw0rd!".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let service = create_auth_service(MockUserRepository::new());

        let response = service
            .register(register_request("new@example.com", "newuser"))
            .await
            .unwrap();

        assert!(!response.access_token.is_empty());
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.user.display_name, "newuser");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let repo = MockUserRepository::with_user(create_user_with_password("Str0ngPassw0rd!"));
        let service = create_auth_service(repo);

        let err = service
            .register(register_request("reader@example.com", "someone-else"))
            .await
            .unwrap_err();

        match err {
            GazetteError::Conflict(msg) => assert!(msg.contains("Email")),
            other => panic!("Expected Conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_duplicate_display_name_conflicts() {
        let repo = MockUserRepository::with_user(create_user_with_password("Str0ngPassw0rd!"));
        let service = create_auth_service(repo);

        let err = service
            .register(register_request("other@example.com", "reader"))
            .await
            .unwrap_err();

        match err {
            GazetteError::Conflict(msg) => assert!(msg.contains("Display name")),
            other => panic!("Expected Conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let repo = MockUserRepository::with_user(create_user_with_password("Str0ngPassw0rd!"));
        let service = create_auth_service(repo);

        let response = service
            .login(LoginRequest {
                email: "reader@example.com".to_string(),
                password: "Str0ngPassw0rd!".to_string(),
            })
            .await
            .unwrap();

        assert!(!response.access_token.is_empty());
        assert_eq!(response.user.email, "reader@example.com");
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_invalid_credentials() {
        let service = create_auth_service(MockUserRepository::new());

        let err = service
            .login(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "Str0ngPassw0rd!".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, GazetteError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_invalid_credentials() {
        let repo = MockUserRepository::with_user(create_user_with_password("Str0ngPassw0rd!"));
        let service = create_auth_service(repo);

        let err = service
            .login(LoginRequest {
                email: "reader@example.com".to_string(),
                password: "WrongPassword1!".to_string(),
            })
            .await
            .unwrap_err();

        // Same error shape as an unknown email
        assert!(matches!(err, GazetteError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_token_round_trip() {
        let user = create_user_with_password("Str0ngPassw0rd!");
        let user_id = user.id;
        let repo = MockUserRepository::with_user(user);
        let service = create_auth_service(repo);

        let response = service
            .login(LoginRequest {
                email: "reader@example.com".to_string(),
                password: "Str0ngPassw0rd!".to_string(),
            })
            .await
            .unwrap();

        let claims = service.validate_token(&response.access_token).await.unwrap();
        assert_eq!(claims.user_id(), Some(user_id));

        let current = service.get_current_user(&claims).await.unwrap();
        assert_eq!(current.id, user_id);
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        let service = create_auth_service(MockUserRepository::new());
        let err = service.validate_token("not-a-jwt").await.unwrap_err();
        assert!(matches!(err, GazetteError::InvalidToken(_)));
    }
}
