use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use super::claims::Claims;
use super::errors::JwtError;
use super::handler::JwtHandler;

/// Issues signed, time-bounded access tokens.
///
/// The lifetime is fixed at construction; every token issued by one
/// issuer lives for the same duration.
pub struct TokenIssuer {
    handler: Arc<JwtHandler>,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(handler: Arc<JwtHandler>, lifetime: Duration) -> Self {
        Self { handler, lifetime }
    }

    /// Issue a token for a user, starting now.
    ///
    /// # Arguments
    /// * `user_id` - Subject of the token
    /// * `email` - Email claim
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed, or the lifetime overflows
    ///   the clock
    pub fn issue(&self, user_id: impl ToString, email: impl ToString) -> Result<String, JwtError> {
        self.issue_at(user_id, email, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        user_id: impl ToString,
        email: impl ToString,
        now: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_user(user_id, email, now, self.lifetime)?;
        self.handler.encode(&claims)
    }

    /// Configured token lifetime in whole seconds.
    pub fn expiration_seconds(&self) -> i64 {
        self.lifetime.num_seconds()
    }
}
