use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::PublicProfile;
use crate::domain::user::models::RequestContext;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::AuthError;

/// Middleware that validates bearer tokens and attaches a `RequestContext`
/// to the request extensions.
///
/// A missing or invalid token yields an anonymous context rather than a
/// rejection; handlers decide whether an identity is required. Only a
/// credential store failure aborts the request.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers()).map(str::to_owned);

    let context = match token {
        None => RequestContext::anonymous(),
        Some(token) => match authenticate(&state, &token).await {
            Ok(profile) => RequestContext::authenticated(profile),
            Err(err @ AuthError::StoreUnavailable(_)) => return Err(ApiError::from(err)),
            Err(err) => {
                tracing::warn!("Bearer token rejected: {}", err);
                RequestContext::anonymous()
            }
        },
    };

    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}

async fn authenticate(state: &AppState, token: &str) -> Result<PublicProfile, AuthError> {
    let email = state.token_validator.extract_email(token)?;
    let email = EmailAddress::new(email)
        .map_err(|e| AuthError::InvalidToken(format!("email claim: {}", e)))?;

    let user = state
        .auth_service
        .get_user_by_email(&email)
        .await
        .map_err(|e| match e {
            AuthError::NotFound(_) => AuthError::InvalidToken("unknown principal".to_string()),
            other => other,
        })?;

    if !state.token_validator.is_valid(token, user.email.as_str()) {
        return Err(AuthError::InvalidToken("expired".to_string()));
    }

    Ok(PublicProfile::from(&user))
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    value.strip_prefix("Bearer ").map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_missing_or_wrong_scheme() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwdw==")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
    }
}
