use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::AuthError;

/// Process-local credential store keyed by normalized email.
///
/// Used when no database is configured and by the integration tests.
/// Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<EmailAddress, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, AuthError> {
        // Check and insert under one write lock so concurrent registrations
        // of the same email cannot both succeed.
        let mut users = self.users.write().await;

        if users.contains_key(&user.email) {
            return Err(AuthError::DuplicateCredential(user.email.to_string()));
        }

        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError> {
        Ok(self.users.read().await.get(email).cloned())
    }
}
