use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::PublicProfile;
use crate::domain::user::models::RequestContext;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Returns the identity the token middleware attached to this request.
pub async fn me(
    State(state): State<AppState>,
    context: Option<Extension<RequestContext>>,
) -> Result<ApiSuccess<MeResponseData>, ApiError> {
    let context = context.map(|Extension(context)| context).unwrap_or_default();

    state
        .auth_service
        .current_identity(&context)
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponseData {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub email_verified: bool,
}

impl From<&PublicProfile> for MeResponseData {
    fn from(profile: &PublicProfile) -> Self {
        Self {
            user_id: profile.user_id.to_string(),
            email: profile.email.as_str().to_string(),
            display_name: profile.display_name.as_str().to_string(),
            email_verified: profile.email_verified,
        }
    }
}
