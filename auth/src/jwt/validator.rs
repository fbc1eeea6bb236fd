use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Verifies access tokens produced by a `TokenIssuer` sharing the same secret.
pub struct TokenValidator {
    handler: Arc<JwtHandler>,
    leeway: Duration,
}

impl TokenValidator {
    /// Create a validator with zero clock-skew tolerance.
    pub fn new(handler: Arc<JwtHandler>) -> Self {
        Self {
            handler,
            leeway: Duration::zero(),
        }
    }

    /// Accept tokens up to `leeway` past their expiration.
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    /// Extract the email claim after verifying the signature.
    ///
    /// Expiration is not checked.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed or its signature does not verify
    pub fn extract_email(&self, token: &str) -> Result<String, JwtError> {
        self.handler.decode(token).map(|claims| claims.email)
    }

    /// Parse, verify and check expiration, returning the claims.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed or its signature does not verify
    /// * `Expired` - Token is past its expiration
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        self.validate_at(token, Utc::now())
    }

    /// Same as `validate` with an explicit clock reading.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let claims = self.handler.decode(token)?;

        if claims.is_expired(now.timestamp(), self.leeway.num_seconds()) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }

    /// Check that a token is authentic, unexpired, and names `expected_email`.
    ///
    /// Parse and signature failures count as invalid; nothing is propagated.
    pub fn is_valid(&self, token: &str, expected_email: &str) -> bool {
        self.is_valid_at(token, expected_email, Utc::now())
    }

    /// Same as `is_valid` with an explicit clock reading.
    pub fn is_valid_at(&self, token: &str, expected_email: &str, now: DateTime<Utc>) -> bool {
        match self.validate_at(token, now) {
            Ok(claims) => claims.email == expected_email,
            Err(_) => false,
        }
    }
}
