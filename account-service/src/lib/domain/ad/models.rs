use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use uuid::Uuid;

use crate::ad::errors::AdIdError;
use crate::domain::user::models::UserId;

/// Lifetime of a freshly posted ad.
const AD_LIFETIME_DAYS: i64 = 7;

/// Advertisement aggregate entity.
#[derive(Debug, Clone)]
pub struct Ad {
    pub id: AdId,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub posted_by: UserId,
    pub active: bool,
    pub region: String,
    pub budget: f64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub reward_per_view: f64,
    pub remaining_budget: f64,
}

impl Ad {
    /// Build a freshly posted ad: active, zero views, full remaining
    /// budget, expiring seven days out.
    ///
    /// # Arguments
    /// * `command` - Validated creation command
    /// * `posted_by` - The authenticated user posting the ad
    pub fn new(command: CreateAdCommand, posted_by: UserId) -> Self {
        let now = Utc::now();

        Self {
            id: AdId::new(),
            title: command.title,
            image_url: command.image_url,
            description: command.description,
            posted_by,
            active: true,
            region: command.region,
            budget: command.budget,
            created_at: now,
            expires_at: Some(now + Duration::days(AD_LIFETIME_DAYS)),
            view_count: 0,
            reward_per_view: command.reward_per_view,
            remaining_budget: command.budget,
        }
    }

    /// Apply a partial update, leaving absent fields untouched.
    pub fn apply(&mut self, command: UpdateAdCommand) {
        if let Some(title) = command.title {
            self.title = title;
        }
        if let Some(image_url) = command.image_url {
            self.image_url = image_url;
        }
        if let Some(description) = command.description {
            self.description = description;
        }
        if let Some(active) = command.active {
            self.active = active;
        }
        if let Some(region) = command.region {
            self.region = region;
        }
        if let Some(budget) = command.budget {
            self.budget = budget;
        }
        if let Some(view_count) = command.view_count {
            self.view_count = view_count;
        }
        if let Some(reward_per_view) = command.reward_per_view {
            self.reward_per_view = reward_per_view;
        }
    }
}

/// Ad unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdId(pub Uuid);

impl AdId {
    /// Generate a new random ad ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ad ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AdIdError> {
        Uuid::parse_str(s)
            .map(AdId)
            .map_err(|e| AdIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AdId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to post a new ad
#[derive(Debug)]
pub struct CreateAdCommand {
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub region: String,
    pub budget: f64,
    pub reward_per_view: f64,
}

/// Command to update an existing ad with optional fields.
///
/// Only provided fields will be updated.
#[derive(Debug, Default)]
pub struct UpdateAdCommand {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub region: Option<String>,
    pub budget: Option<f64>,
    pub view_count: Option<i64>,
    pub reward_per_view: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_command() -> CreateAdCommand {
        CreateAdCommand {
            title: "Spring sale".to_string(),
            image_url: "https://cdn.example.com/sale.png".to_string(),
            description: "Half price".to_string(),
            region: "US".to_string(),
            budget: 100.0,
            reward_per_view: 0.05,
        }
    }

    #[test]
    fn test_new_ad_defaults() {
        let posted_by = UserId::new();
        let ad = Ad::new(make_command(), posted_by);

        assert_eq!(ad.posted_by, posted_by);
        assert!(ad.active);
        assert_eq!(ad.view_count, 0);
        assert_eq!(ad.remaining_budget, ad.budget);

        let expires_at = ad.expires_at.expect("New ads carry an expiry");
        assert_eq!(
            (expires_at - ad.created_at).num_days(),
            AD_LIFETIME_DAYS
        );
    }

    #[test]
    fn test_apply_partial_update() {
        let mut ad = Ad::new(make_command(), UserId::new());

        ad.apply(UpdateAdCommand {
            title: Some("Summer sale".to_string()),
            active: Some(false),
            ..Default::default()
        });

        assert_eq!(ad.title, "Summer sale");
        assert!(!ad.active);
        // Untouched fields keep their values
        assert_eq!(ad.description, "Half price");
        assert_eq!(ad.budget, 100.0);
    }
}
