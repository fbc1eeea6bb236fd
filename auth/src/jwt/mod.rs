pub mod claims;
pub mod errors;
pub mod handler;
pub mod issuer;
pub mod validator;

pub use claims::Claims;
pub use errors::JwtError;
pub use handler::JwtHandler;
pub use issuer::TokenIssuer;
pub use validator::TokenValidator;
