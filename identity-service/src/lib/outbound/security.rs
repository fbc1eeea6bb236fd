//! Adapters binding the `auth` crate primitives to the domain ports.

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;
use crate::user::errors::AuthError;
use crate::user::ports::AccessTokenIssuer;
use crate::user::ports::CredentialHasher;

impl CredentialHasher for auth::PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        auth::PasswordHasher::hash(self, password).map_err(AuthError::from)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        auth::PasswordHasher::verify(self, password, hash).map_err(AuthError::from)
    }

    fn verify_dummy(&self, password: &str) {
        auth::PasswordHasher::verify_dummy(self, password)
    }
}

impl AccessTokenIssuer for auth::TokenIssuer {
    fn issue(&self, user_id: &UserId, email: &EmailAddress) -> Result<String, AuthError> {
        auth::TokenIssuer::issue(self, user_id, email).map_err(|e| {
            tracing::error!(user_id = %user_id, "Token signing failed: {}", e);
            AuthError::from(e)
        })
    }

    fn expiration_seconds(&self) -> i64 {
        auth::TokenIssuer::expiration_seconds(self)
    }
}
