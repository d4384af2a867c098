use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::ad::models::Ad;

pub mod create_ad;
pub mod delete_ad;
pub mod get_ad;
pub mod update_ad;

/// Wire representation of an ad, shared by the ad handlers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdData {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub posted_by: String,
    pub active: bool,
    pub region: String,
    pub budget: f64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub reward_per_view: f64,
    pub remaining_budget: f64,
}

impl From<&Ad> for AdData {
    fn from(ad: &Ad) -> Self {
        Self {
            id: ad.id.to_string(),
            title: ad.title.clone(),
            image_url: ad.image_url.clone(),
            description: ad.description.clone(),
            posted_by: ad.posted_by.to_string(),
            active: ad.active,
            region: ad.region.clone(),
            budget: ad.budget,
            created_at: ad.created_at,
            expires_at: ad.expires_at,
            view_count: ad.view_count,
            reward_per_view: ad.reward_per_view,
            remaining_budget: ad.remaining_budget,
        }
    }
}
