use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_balance(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<UpdateBalanceRequest>,
) -> Result<ApiSuccess<UpdateBalanceResponseData>, ApiError> {
    state
        .user_service
        .update_balance(&auth_user.user_id, body.balance)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                UpdateBalanceResponseData {
                    message: "balance updated".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateBalanceRequest {
    balance: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateBalanceResponseData {
    pub message: String,
}
