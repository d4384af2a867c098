use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

pub async fn status() -> ApiSuccess<StatusResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        StatusResponseData {
            status: "OK".to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponseData {
    pub status: String,
}
