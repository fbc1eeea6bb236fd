//! Credential and access-token primitives
//!
//! Provides the building blocks of the identity service:
//! - Password hashing (Argon2id, salted per call)
//! - Access token issuance (HS256 JWT carrying subject and email)
//! - Access token validation (signature, expiration, principal match)
//!
//! Issuer and validator share one `JwtHandler`, so they always agree on the
//! signing secret.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Access Tokens
//! ```
//! use std::sync::Arc;
//!
//! use auth::{JwtHandler, TokenIssuer, TokenValidator};
//! use chrono::Duration;
//!
//! let handler = Arc::new(JwtHandler::new(b"secret_key_at_least_32_bytes_long!").unwrap());
//! let issuer = TokenIssuer::new(Arc::clone(&handler), Duration::hours(1));
//! let validator = TokenValidator::new(handler);
//!
//! let token = issuer.issue("user123", "alice@example.com").unwrap();
//! assert_eq!(issuer.expiration_seconds(), 3600);
//! assert_eq!(validator.extract_email(&token).unwrap(), "alice@example.com");
//! assert!(validator.is_valid(&token, "alice@example.com"));
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenIssuer;
pub use jwt::TokenValidator;
pub use password::PasswordError;
pub use password::PasswordHasher;
