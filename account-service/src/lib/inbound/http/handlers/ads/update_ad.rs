use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::AdData;
use crate::ad::models::AdId;
use crate::ad::models::UpdateAdCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn update_ad(
    State(state): State<AppState>,
    Path(ad_id): Path<String>,
    Json(body): Json<UpdateAdRequest>,
) -> Result<ApiSuccess<AdData>, ApiError> {
    let ad_id = AdId::from_string(&ad_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .ad_service
        .update_ad(&ad_id, body.into_command())
        .await
        .map_err(ApiError::from)
        .map(|ref ad| ApiSuccess::new(StatusCode::OK, ad.into()))
}

/// HTTP request body for a partial ad update; absent fields are untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateAdRequest {
    title: Option<String>,
    image_url: Option<String>,
    description: Option<String>,
    active: Option<bool>,
    region: Option<String>,
    budget: Option<f64>,
    view_count: Option<i64>,
    reward_per_view: Option<f64>,
}

impl UpdateAdRequest {
    fn into_command(self) -> UpdateAdCommand {
        UpdateAdCommand {
            title: self.title,
            image_url: self.image_url,
            description: self.description,
            active: self.active,
            region: self.region,
            budget: self.budget,
            view_count: self.view_count,
            reward_per_view: self.reward_per_view,
        }
    }
}
