use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::PublicProfile;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::RequestContext;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;

/// Port for credential domain service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Validated command containing email, password, and display name
    ///
    /// # Returns
    /// Public profile of the created user
    ///
    /// # Errors
    /// * `DuplicateCredential` - Email is already registered
    /// * `Password` - Password hashing failed
    /// * `StoreUnavailable` - Credential store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<PublicProfile, AuthError>;

    /// Check credentials and issue an access token.
    ///
    /// # Arguments
    /// * `command` - Raw email and password
    ///
    /// # Returns
    /// Token, its lifetime in seconds, and the user's identity
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `TokenIssuance` - Token signing failed
    /// * `StoreUnavailable` - Credential store operation failed
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, AuthError>;

    /// Read the identity established for the current request.
    ///
    /// # Errors
    /// * `Unauthenticated` - No identity in the request context
    fn current_identity(&self, context: &RequestContext) -> Result<PublicProfile, AuthError>;

    /// Retrieve user by email address.
    ///
    /// # Errors
    /// * `NotFound` - No user with this email
    /// * `StoreUnavailable` - Credential store operation failed
    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, AuthError>;
}

/// Credential store: persistence operations for the user aggregate.
///
/// Implementations must enforce email uniqueness atomically and report a
/// conflicting insert as `DuplicateCredential`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `DuplicateCredential` - Email is already registered
    /// * `StoreUnavailable` - Storage operation failed
    async fn create(&self, user: User) -> Result<User, AuthError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `StoreUnavailable` - Storage operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError>;
}

/// One-way password hashing.
pub trait CredentialHasher: Send + Sync + 'static {
    /// Hash a password with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Check a password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;

    /// Burn one verification without a stored hash.
    fn verify_dummy(&self, password: &str);
}

/// Access token issuance.
pub trait AccessTokenIssuer: Send + Sync + 'static {
    /// Issue a signed token naming the user.
    fn issue(&self, user_id: &UserId, email: &EmailAddress) -> Result<String, AuthError>;

    /// Lifetime of issued tokens in seconds.
    fn expiration_seconds(&self) -> i64;
}
