use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::AdData;
use crate::ad::models::AdId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_ad(
    State(state): State<AppState>,
    Path(ad_id): Path<String>,
) -> Result<ApiSuccess<AdData>, ApiError> {
    let ad_id = AdId::from_string(&ad_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .ad_service
        .get_ad(&ad_id)
        .await
        .map_err(ApiError::from)
        .map(|ref ad| ApiSuccess::new(StatusCode::OK, ad.into()))
}
