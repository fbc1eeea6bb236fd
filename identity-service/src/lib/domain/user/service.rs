use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::PublicProfile;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::RequestContext;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;
use crate::user::ports::AccessTokenIssuer;
use crate::user::ports::AuthServicePort;
use crate::user::ports::CredentialHasher;
use crate::user::ports::UserRepository;

/// Domain service implementation for registration and login.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<UR, CH, TI>
where
    UR: UserRepository,
    CH: CredentialHasher,
    TI: AccessTokenIssuer,
{
    repository: Arc<UR>,
    hasher: Arc<CH>,
    token_issuer: Arc<TI>,
}

impl<UR, CH, TI> AuthService<UR, CH, TI>
where
    UR: UserRepository,
    CH: CredentialHasher,
    TI: AccessTokenIssuer,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `hasher` - Password hashing implementation
    /// * `token_issuer` - Access token issuer
    pub fn new(repository: Arc<UR>, hasher: Arc<CH>, token_issuer: Arc<TI>) -> Self {
        Self {
            repository,
            hasher,
            token_issuer,
        }
    }

    fn reject_login(&self, password: &str) -> AuthError {
        self.hasher.verify_dummy(password);
        AuthError::InvalidCredentials
    }
}

#[async_trait]
impl<UR, CH, TI> AuthServicePort for AuthService<UR, CH, TI>
where
    UR: UserRepository,
    CH: CredentialHasher,
    TI: AccessTokenIssuer,
{
    async fn register(&self, command: RegisterCommand) -> Result<PublicProfile, AuthError> {
        if self.repository.find_by_email(&command.email).await?.is_some() {
            return Err(AuthError::DuplicateCredential(command.email.to_string()));
        }

        let password_hash = self.hasher.hash(&command.password)?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash,
            display_name: command.display_name,
            email_verified: false,
            created_at: Utc::now(),
        };

        // A concurrent registration can slip past the lookup above; the
        // store's uniqueness check reports it as DuplicateCredential.
        let created_user = self.repository.create(user).await?;

        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(PublicProfile::from(&created_user))
    }

    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AuthError> {
        let email = match EmailAddress::new(command.email) {
            Ok(email) => email,
            Err(_) => return Err(self.reject_login(&command.password)),
        };

        let user = match self.repository.find_by_email(&email).await? {
            Some(user) => user,
            None => return Err(self.reject_login(&command.password)),
        };

        if !self.hasher.verify(&command.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(&user.id, &user.email)?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome {
            token,
            expires_in_seconds: self.token_issuer.expiration_seconds(),
            user_id: user.id,
            email: user.email,
        })
    }

    fn current_identity(&self, context: &RequestContext) -> Result<PublicProfile, AuthError> {
        context
            .principal()
            .cloned()
            .ok_or(AuthError::Unauthenticated)
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, AuthError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::NotFound(email.to_string()))
    }
}
