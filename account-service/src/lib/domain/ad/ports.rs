use async_trait::async_trait;

use crate::ad::errors::AdError;
use crate::ad::models::Ad;
use crate::ad::models::AdId;
use crate::ad::models::CreateAdCommand;
use crate::ad::models::UpdateAdCommand;
use crate::domain::user::models::UserId;

/// Port for advertisement operations.
#[async_trait]
pub trait AdServicePort: Send + Sync + 'static {
    /// Post a new ad on behalf of the authenticated user.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn create_ad(&self, command: CreateAdCommand, posted_by: UserId)
        -> Result<Ad, AdError>;

    /// Retrieve an ad by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Ad does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_ad(&self, id: &AdId) -> Result<Ad, AdError>;

    /// Apply a partial update to an existing ad.
    ///
    /// # Errors
    /// * `NotFound` - Ad does not exist
    /// * `DatabaseError` - Store operation failed
    async fn update_ad(&self, id: &AdId, command: UpdateAdCommand) -> Result<Ad, AdError>;

    /// Delete an existing ad.
    ///
    /// # Errors
    /// * `NotFound` - Ad does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete_ad(&self, id: &AdId) -> Result<(), AdError>;
}

/// Persistence operations for the ad aggregate.
#[async_trait]
pub trait AdRepository: Send + Sync + 'static {
    /// Persist a new ad to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, ad: Ad) -> Result<Ad, AdError>;

    /// Retrieve an ad by identifier.
    ///
    /// # Returns
    /// Optional ad entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &AdId) -> Result<Option<Ad>, AdError>;

    /// Overwrite an existing ad in storage.
    ///
    /// # Errors
    /// * `NotFound` - Ad does not exist
    /// * `DatabaseError` - Store operation failed
    async fn update(&self, ad: Ad) -> Result<Ad, AdError>;

    /// Remove an ad from storage.
    ///
    /// # Errors
    /// * `NotFound` - Ad does not exist
    /// * `DatabaseError` - Store operation failed
    async fn delete(&self, id: &AdId) -> Result<(), AdError>;
}
