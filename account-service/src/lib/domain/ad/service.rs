use std::sync::Arc;

use async_trait::async_trait;

use crate::ad::errors::AdError;
use crate::ad::models::Ad;
use crate::ad::models::AdId;
use crate::ad::models::CreateAdCommand;
use crate::ad::models::UpdateAdCommand;
use crate::ad::ports::AdRepository;
use crate::ad::ports::AdServicePort;
use crate::domain::user::models::UserId;

/// Domain service for advertisement operations.
pub struct AdService<AR>
where
    AR: AdRepository,
{
    repository: Arc<AR>,
}

impl<AR> AdService<AR>
where
    AR: AdRepository,
{
    /// Create a new ad service with an injected repository.
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AdServicePort for AdService<AR>
where
    AR: AdRepository,
{
    async fn create_ad(
        &self,
        command: CreateAdCommand,
        posted_by: UserId,
    ) -> Result<Ad, AdError> {
        self.repository.create(Ad::new(command, posted_by)).await
    }

    async fn get_ad(&self, id: &AdId) -> Result<Ad, AdError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AdError::NotFound(id.to_string()))
    }

    async fn update_ad(&self, id: &AdId, command: UpdateAdCommand) -> Result<Ad, AdError> {
        let mut ad = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AdError::NotFound(id.to_string()))?;

        ad.apply(command);

        self.repository.update(ad).await
    }

    async fn delete_ad(&self, id: &AdId) -> Result<(), AdError> {
        self.repository.delete(id).await
    }
}
