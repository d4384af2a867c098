use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::ad::models::AdId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn delete_ad(
    State(state): State<AppState>,
    Path(ad_id): Path<String>,
) -> Result<ApiSuccess<DeleteAdResponseData>, ApiError> {
    let ad_id = AdId::from_string(&ad_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .ad_service
        .delete_ad(&ad_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteAdResponseData {
                    message: "ad deleted successfully".to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteAdResponseData {
    pub message: String,
}
