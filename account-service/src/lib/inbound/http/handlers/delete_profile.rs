use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Deletes the authenticated account. Tokens already issued for it stay
/// valid until expiry; there is no revocation.
pub async fn delete_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<DeleteProfileResponseData>, ApiError> {
    state
        .user_service
        .delete_profile(&auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteProfileResponseData {
                    message: "user deleted successfully".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteProfileResponseData {
    pub message: String,
}
