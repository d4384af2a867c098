use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::AdData;
use crate::ad::models::CreateAdCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_ad(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateAdRequest>,
) -> Result<ApiSuccess<AdData>, ApiError> {
    state
        .ad_service
        .create_ad(body.into_command(), auth_user.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref ad| ApiSuccess::new(StatusCode::CREATED, ad.into()))
}

/// HTTP request body for posting an ad (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateAdRequest {
    title: String,
    image_url: String,
    description: String,
    region: String,
    budget: f64,
    reward_per_view: f64,
}

impl CreateAdRequest {
    fn into_command(self) -> CreateAdCommand {
        CreateAdCommand {
            title: self.title,
            image_url: self.image_url,
            description: self.description,
            region: self.region,
            budget: self.budget,
            reward_per_view: self.reward_per_view,
        }
    }
}
